//! Framework error type.
//!
//! The simulation itself is total over valid state; the only failure mode is
//! a rejected configuration.  Sub-crates define their own enums and wrap
//! `IpdError` via `#[from]` where they need it.

use thiserror::Error;

/// The top-level error type for `ipd-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq)]
pub enum IpdError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{what} must be {expected}, got {value}")]
    OutOfRange {
        what:     &'static str,
        expected: &'static str,
        value:    f64,
    },
}

/// Shorthand result type for all `ipd-*` crates.
pub type IpdResult<T> = Result<T, IpdError>;
