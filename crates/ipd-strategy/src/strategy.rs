//! The `Strategy` policy.

use ipd_core::{Move, SimRng};

use crate::{ReactiveParams, StrategyKind, StrategyResult};

/// How an agent picks its move against a given opponent.
///
/// # Example
///
/// ```rust
/// use ipd_core::{Move, SimRng};
/// use ipd_strategy::Strategy;
///
/// let mut rng = SimRng::new(0);
/// let tft = Strategy::TitForTat;
/// assert_eq!(tft.decide(None, &mut rng), Move::Cooperate);
/// assert_eq!(tft.decide(Some(&[Move::Defect]), &mut rng), Move::Defect);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Strategy {
    /// "Raider": always defects.
    AlwaysDefect,
    /// "Farmer": always cooperates.
    AlwaysCooperate,
    /// Cooperates first, then repeats the opponent's last move.
    TitForTat,
    /// Cooperates with a probability that depends on the opponent's last move.
    ProbabilisticReactive(ReactiveParams),
}

impl Strategy {
    /// The variant tag.
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::AlwaysDefect             => StrategyKind::AlwaysDefect,
            Strategy::AlwaysCooperate          => StrategyKind::AlwaysCooperate,
            Strategy::TitForTat                => StrategyKind::TitForTat,
            Strategy::ProbabilisticReactive(_) => StrategyKind::ProbabilisticReactive,
        }
    }

    /// Check embedded parameters (only the reactive variant has any).
    pub fn validate(&self) -> StrategyResult<()> {
        match self {
            Strategy::ProbabilisticReactive(params) => params.validate(),
            _ => Ok(()),
        }
    }

    /// Pick a move given the opponent's recorded moves against this agent.
    ///
    /// `opponent_moves` is `None` when the two have never met.  A present but
    /// empty slice is treated the same way.  Only the reactive variant draws
    /// from `rng`: one draw per call.
    pub fn decide(&self, opponent_moves: Option<&[Move]>, rng: &mut SimRng) -> Move {
        let last = opponent_moves.and_then(|moves| moves.last().copied());
        match self {
            Strategy::AlwaysDefect    => Move::Defect,
            Strategy::AlwaysCooperate => Move::Cooperate,
            Strategy::TitForTat       => last.unwrap_or(Move::Cooperate),
            Strategy::ProbabilisticReactive(params) => {
                let p = match last {
                    None                  => params.initial_cooperate,
                    Some(Move::Cooperate) => params.cooperate_after_cooperate,
                    Some(Move::Defect)    => params.cooperate_after_defect,
                };
                if rng.unit() < p { Move::Cooperate } else { Move::Defect }
            }
        }
    }
}
