//! `Population` — the live agent collection of one simulation.
//!
//! # Mutation model
//!
//! The collection is a plain `Vec<Agent>` whose order is meaningful: the
//! engine shuffles it at the start of every step and then walks it in that
//! order.  Agents are never removed or inserted while a pass is walking the
//! vector.  The end-of-step pass collects dead ids and newborns first and
//! hands them to [`Population::commit`], which applies both in one go:
//!
//! ```ignore
//! let mut dead = Vec::new();
//! let mut born = Vec::new();
//! for agent in population.iter_mut() { /* decide, push into dead / born */ }
//! population.commit(&dead, born);
//! ```

use std::collections::HashSet;

use ipd_core::{AgentId, IdAllocator, Position};
use ipd_strategy::{KindTable, Strategy};

use crate::{Agent, Leaning};

/// Live agents plus the id allocator that names them.
#[derive(Clone, Debug, Default)]
pub struct Population {
    agents: Vec<Agent>,
    ids:    IdAllocator,
}

impl Population {
    /// An empty population whose first agent will get `AgentId(0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty population drawing ids from `ids`.
    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self { agents: Vec::new(), ids }
    }

    // ── Creation ──────────────────────────────────────────────────────────

    /// Create an agent with a fresh id and add it to the population.
    pub fn spawn(
        &mut self,
        strategy:   Strategy,
        speed:      f64,
        position:   Position,
        base_score: f64,
    ) -> AgentId {
        let id = self.ids.allocate();
        self.agents.push(Agent::new(id, strategy, speed, position, base_score));
        id
    }

    /// Split into the agent slice and the id allocator so a pass can mutate
    /// agents and issue ids for newborns at the same time.  Newborns go
    /// through [`commit`](Self::commit) so the pass never sees its own births.
    pub fn split_mut(&mut self) -> (&mut [Agent], &mut IdAllocator) {
        (&mut self.agents, &mut self.ids)
    }

    // ── Bulk update ───────────────────────────────────────────────────────

    /// Remove every agent listed in `dead`, then append `born` in order.
    pub fn commit(&mut self, dead: &[AgentId], born: Vec<Agent>) {
        if !dead.is_empty() {
            let dead: HashSet<AgentId> = dead.iter().copied().collect();
            self.agents.retain(|a| !dead.contains(&a.id()));
        }
        self.agents.extend(born);
    }

    // ── Access ────────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent> {
        self.agents.iter_mut()
    }

    /// Linear lookup by id.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    /// Two distinct agents by position in the collection, both mutable.
    ///
    /// # Panics
    /// Panics if `i == j` or either index is out of bounds.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Agent, &mut Agent) {
        assert_ne!(i, j, "pair_mut needs two distinct agents");
        if i < j {
            let (lo, hi) = self.agents.split_at_mut(j);
            (&mut lo[i], &mut hi[0])
        } else {
            let (lo, hi) = self.agents.split_at_mut(i);
            (&mut hi[0], &mut lo[j])
        }
    }

    /// Ids issued so far, including dead agents.
    pub fn ids_issued(&self) -> u64 {
        self.ids.issued()
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    /// Live agents per strategy kind.
    pub fn count_by_kind(&self) -> KindTable<usize> {
        let mut counts = KindTable::default();
        for agent in &self.agents {
            counts[agent.kind()] += 1;
        }
        counts
    }

    /// Agents whose tendency classifies as [`Leaning::Cooperative`].
    pub fn cooperative_count(&self) -> usize {
        self.agents
            .iter()
            .filter(|a| a.leaning() == Leaning::Cooperative)
            .count()
    }
}
