//! Simulation step counter.

use std::fmt;

/// Index of a completed (or in-progress) simulation step.
///
/// Step 0 is the first call to `Sim::step`.  Aggregate series are indexed so
/// that entry `n + 1` holds the state after step `n`; entry 0 is the initial
/// state.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// The step after `self`.
    #[inline]
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }

    /// `true` when a snapshot is due at this step for the given interval.
    ///
    /// An interval of 0 disables snapshots.
    #[inline]
    pub fn is_snapshot(self, interval: u64) -> bool {
        interval > 0 && self.0.is_multiple_of(interval)
    }
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
