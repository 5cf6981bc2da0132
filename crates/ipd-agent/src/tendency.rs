//! Running estimate of how often an agent defects.

use ipd_core::Move;

/// Estimates at or below this value classify as [`Leaning::Cooperative`].
pub const COOPERATIVE_THRESHOLD: f64 = 0.5;

/// Behavioural classification derived from a [`Tendency`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Leaning {
    /// Estimate `<= 0.5`: "farmer-like".
    Cooperative,
    /// Estimate `> 0.5`: "raider-like".
    Aggressive,
}

impl Leaning {
    pub fn as_str(self) -> &'static str {
        match self {
            Leaning::Cooperative => "cooperative",
            Leaning::Aggressive  => "aggressive",
        }
    }
}

/// Weighted running mean of an agent's own move values (0 = cooperate,
/// 1 = defect).
///
/// Starts at `0.5` with weight `1`, so a fresh agent is classified as
/// cooperative.  Each update folds one move in and increments the weight.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tendency {
    estimate: f64,
    weight:   u64,
}

impl Default for Tendency {
    fn default() -> Self {
        Self { estimate: 0.5, weight: 1 }
    }
}

impl Tendency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current estimate in `[0, 1]`.
    #[inline]
    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    /// Current update weight (1 before any update).
    #[inline]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    #[inline]
    pub fn leaning(&self) -> Leaning {
        if self.estimate <= COOPERATIVE_THRESHOLD {
            Leaning::Cooperative
        } else {
            Leaning::Aggressive
        }
    }

    /// Fold in the outcome of one encounter.
    ///
    /// Mutual defection leaves the estimate and weight untouched.  Returns
    /// `true` if the estimate was updated.
    pub fn observe(&mut self, own: Move, theirs: Move) -> bool {
        if own.is_defect() && theirs.is_defect() {
            return false;
        }
        let w = self.weight as f64;
        self.estimate = (self.estimate * w + own.value()) / (w + 1.0);
        self.weight += 1;
        true
    }
}
