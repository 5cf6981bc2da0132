//! Parameters of the probabilistic reactive strategy.

use crate::{StrategyError, StrategyResult};

/// Cooperation probabilities of a `ProbabilisticReactive` agent.
///
/// `Default` is `(1, 1, 0)`: cooperate first, keep cooperating with
/// cooperators, never forgive a defection.  That makes the default a
/// deterministic tit-for-tat expressed through the reactive rule.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactiveParams {
    /// Probability of cooperating on the first encounter with an opponent.
    pub initial_cooperate: f64,
    /// Probability of cooperating after the opponent last cooperated.
    pub cooperate_after_cooperate: f64,
    /// Probability of cooperating after the opponent last defected.
    pub cooperate_after_defect: f64,
}

impl Default for ReactiveParams {
    fn default() -> Self {
        Self {
            initial_cooperate:         1.0,
            cooperate_after_cooperate: 1.0,
            cooperate_after_defect:    0.0,
        }
    }
}

impl ReactiveParams {
    /// Build validated parameters.
    pub fn new(
        initial_cooperate:         f64,
        cooperate_after_cooperate: f64,
        cooperate_after_defect:    f64,
    ) -> StrategyResult<Self> {
        let params = Self {
            initial_cooperate,
            cooperate_after_cooperate,
            cooperate_after_defect,
        };
        params.validate()?;
        Ok(params)
    }

    /// Every probability must be a finite value in `[0, 1]`.
    pub fn validate(&self) -> StrategyResult<()> {
        probability("initial_cooperate", self.initial_cooperate)?;
        probability("cooperate_after_cooperate", self.cooperate_after_cooperate)?;
        probability("cooperate_after_defect", self.cooperate_after_defect)
    }
}

fn probability(name: &'static str, value: f64) -> StrategyResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(StrategyError::Probability { name, value })
    }
}
