//! One pairwise encounter.
//!
//! # Protocol
//!
//! 1. Each side decides independently from its own view of the history:
//!    `first` is asked before `second` (this fixes the order of random draws).
//! 2. Both scores are credited from the payoff table.
//! 3. Both histories are appended, each with its own move and the opponent's.
//! 4. Both tendencies are updated, unless both sides defected.
//!
//! The encounter has no failure mode: first meetings simply find no history.

use ipd_agent::Agent;
use ipd_core::{AgentId, Move, SimRng};
use ipd_strategy::{KindTable, StrategyKind};
use tracing::trace;

use crate::PayoffMatrix;

/// What happened in one encounter, for aggregation and logging.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Encounter {
    pub first:         AgentId,
    pub second:        AgentId,
    pub first_kind:    StrategyKind,
    pub second_kind:   StrategyKind,
    pub first_move:    Move,
    pub second_move:   Move,
    pub first_payoff:  f64,
    pub second_payoff: f64,
}

impl Encounter {
    /// Add both payoffs to the per-kind running totals.
    pub fn credit(&self, totals: &mut KindTable<f64>) {
        totals[self.first_kind] += self.first_payoff;
        totals[self.second_kind] += self.second_payoff;
    }

    #[inline]
    pub fn mutual_defection(&self) -> bool {
        self.first_move.is_defect() && self.second_move.is_defect()
    }
}

/// Resolve one encounter between `first` and `second`.
pub fn interact(
    first:  &mut Agent,
    second: &mut Agent,
    payoff: &PayoffMatrix,
    rng:    &mut SimRng,
) -> Encounter {
    let first_move = first.decide_against(second.id(), rng);
    let second_move = second.decide_against(first.id(), rng);

    let (first_payoff, second_payoff) = payoff.lookup(first_move, second_move);
    first.score += first_payoff;
    second.score += second_payoff;

    first.record(second.id(), first_move, second_move);
    second.record(first.id(), second_move, first_move);

    let encounter = Encounter {
        first:       first.id(),
        second:      second.id(),
        first_kind:  first.kind(),
        second_kind: second.kind(),
        first_move,
        second_move,
        first_payoff,
        second_payoff,
    };
    trace!(
        first = %encounter.first,
        second = %encounter.second,
        moves = %format_args!("{}/{}", first_move, second_move),
        "encounter"
    );
    encounter
}
