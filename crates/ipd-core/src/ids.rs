//! Agent identity and the allocator that issues it.
//!
//! Ids are process-unique per simulation instance: every agent created by a
//! run, whether at initialization or by reproduction, receives the next value
//! from that run's [`IdAllocator`].  Ids are never reused, so a dead agent's id
//! left behind in another agent's history can never alias a newborn.

use std::fmt;

/// Identity of one agent.  `Copy + Ord + Hash` so it can key history maps.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u64);

impl AgentId {
    /// Raw integer value, e.g. for CSV columns.
    #[inline(always)]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for u64 {
    #[inline(always)]
    fn from(id: AgentId) -> u64 {
        id.0
    }
}

// ── IdAllocator ───────────────────────────────────────────────────────────────

/// Monotonic id source owned by one simulation.
///
/// Independent simulations each own an allocator, so two runs in the same
/// process never share a counter.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Start issuing from `first` (useful when resuming id spaces in tests).
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Issue the next id.
    #[inline]
    pub fn allocate(&mut self) -> AgentId {
        let id = AgentId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids issued so far (equals the next id to be issued when the
    /// allocator started at zero).
    #[inline]
    pub fn issued(&self) -> u64 {
        self.next
    }
}
