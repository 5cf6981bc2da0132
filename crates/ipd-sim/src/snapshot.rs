//! Read-only agent views handed to collaborators.

use ipd_agent::{Agent, Leaning};
use ipd_core::AgentId;
use ipd_strategy::StrategyKind;

/// A copy of the externally visible state of one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub id:       AgentId,
    pub x:        f64,
    pub y:        f64,
    pub kind:     StrategyKind,
    pub score:    f64,
    pub tendency: f64,
    pub leaning:  Leaning,
}

impl From<&Agent> for AgentView {
    fn from(agent: &Agent) -> Self {
        Self {
            id:       agent.id(),
            x:        agent.position.x,
            y:        agent.position.y,
            kind:     agent.kind(),
            score:    agent.score,
            tendency: agent.tendency().estimate(),
            leaning:  agent.leaning(),
        }
    }
}
