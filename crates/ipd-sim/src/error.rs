use ipd_core::{IpdError, Position};
use ipd_strategy::{StrategyError, StrategyKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] IpdError),

    #[error("cohort `{kind}`: {source}")]
    Strategy {
        kind:   StrategyKind,
        source: StrategyError,
    },

    #[error("cohort `{kind}`: speed must be >= 0 and below f64::MAX / 2, got {speed}")]
    Speed {
        kind:  StrategyKind,
        speed: f64,
    },

    #[error("more than one cohort uses strategy `{0}`")]
    DuplicateCohort(StrategyKind),

    #[error("agent placed at {0} lies outside the field")]
    OutsideField(Position),
}

pub type SimResult<T> = Result<T, SimError>;
