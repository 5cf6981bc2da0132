use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StrategyError {
    #[error("reactive probability `{name}` must lie in [0, 1], got {value}")]
    Probability {
        name:  &'static str,
        value: f64,
    },
}

pub type StrategyResult<T> = Result<T, StrategyError>;
