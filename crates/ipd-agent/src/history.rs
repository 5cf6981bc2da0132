//! Per-opponent move records.
//!
//! An agent remembers, for every opponent id it has met, the ordered moves
//! that opponent played against it and, mirrored, the moves it played back.
//! Both sequences are appended together by [`History::record`], the only
//! mutator, so for any opponent they always have the same length.

use ipd_core::{AgentId, Move};

#[cfg(feature = "fx-hash")]
type HistoryMap = rustc_hash::FxHashMap<AgentId, Vec<Move>>;
#[cfg(not(feature = "fx-hash"))]
type HistoryMap = std::collections::HashMap<AgentId, Vec<Move>>;

/// Append-only record of past encounters, keyed by opponent id.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    /// Opponent id → that opponent's moves against this agent, oldest first.
    opponent_moves: HistoryMap,
    /// Opponent id → this agent's moves against that opponent, oldest first.
    own_moves: HistoryMap,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one encounter with `opponent`.
    pub fn record(&mut self, opponent: AgentId, own: Move, theirs: Move) {
        self.opponent_moves.entry(opponent).or_default().push(theirs);
        self.own_moves.entry(opponent).or_default().push(own);
    }

    /// Moves `opponent` has played against this agent, or `None` if they
    /// have never met.
    #[inline]
    pub fn opponent_moves(&self, opponent: AgentId) -> Option<&[Move]> {
        self.opponent_moves.get(&opponent).map(Vec::as_slice)
    }

    /// Moves this agent has played against `opponent`.
    #[inline]
    pub fn own_moves(&self, opponent: AgentId) -> Option<&[Move]> {
        self.own_moves.get(&opponent).map(Vec::as_slice)
    }

    /// The opponent's most recent move, if any.
    #[inline]
    pub fn last_opponent_move(&self, opponent: AgentId) -> Option<Move> {
        self.opponent_moves(opponent).and_then(|m| m.last().copied())
    }

    /// Number of encounters recorded with `opponent`.
    pub fn encounters_with(&self, opponent: AgentId) -> usize {
        self.opponent_moves.get(&opponent).map_or(0, Vec::len)
    }

    /// `true` if this agent has met `opponent` at least once.
    #[inline]
    pub fn has_met(&self, opponent: AgentId) -> bool {
        self.opponent_moves.contains_key(&opponent)
    }

    /// Number of distinct opponents met.
    pub fn opponent_count(&self) -> usize {
        self.opponent_moves.len()
    }

    /// Total encounters across all opponents.
    pub fn total_encounters(&self) -> usize {
        self.opponent_moves.values().map(Vec::len).sum()
    }

    /// `true` if no encounter has been recorded.
    pub fn is_empty(&self) -> bool {
        self.opponent_moves.is_empty()
    }
}
