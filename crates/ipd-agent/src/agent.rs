//! The `Agent` entity.

use ipd_core::{AgentId, Field, Move, Position, SimRng};
use ipd_strategy::{Strategy, StrategyKind};

use crate::{History, Leaning, Tendency};

/// One situated player.
///
/// Identity, strategy and speed are fixed for life.  Position, score, history
/// and tendency change as the simulation steps.  Scores are signed: an agent
/// whose score drops below zero after upkeep is removed by the engine.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    id:       AgentId,
    strategy: Strategy,
    speed:    f64,

    /// Current location on the toroidal field.
    pub position: Position,

    /// Accumulated score.
    pub score: f64,

    history:  History,
    tendency: Tendency,
}

impl Agent {
    /// Create an agent with empty history and a neutral tendency.
    pub fn new(
        id:         AgentId,
        strategy:   Strategy,
        speed:      f64,
        position:   Position,
        base_score: f64,
    ) -> Self {
        Self {
            id,
            strategy,
            speed,
            position,
            score: base_score,
            history: History::new(),
            tendency: Tendency::new(),
        }
    }

    /// A newborn of this agent: same strategy (with parameters) and speed,
    /// placed at the parent's current position, fresh score and history.
    pub fn offspring(&self, id: AgentId, base_score: f64) -> Agent {
        Agent::new(id, self.strategy, self.speed, self.position, base_score)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    #[inline]
    pub fn kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn tendency(&self) -> &Tendency {
        &self.tendency
    }

    #[inline]
    pub fn leaning(&self) -> Leaning {
        self.tendency.leaning()
    }

    // ── Behaviour ─────────────────────────────────────────────────────────

    /// Ask this agent's strategy for its move against `opponent`.
    pub fn decide_against(&self, opponent: AgentId, rng: &mut SimRng) -> Move {
        self.strategy
            .decide(self.history.opponent_moves(opponent), rng)
    }

    /// Book one finished encounter: append both moves to the history and
    /// update the tendency (skipped on mutual defection).
    pub fn record(&mut self, opponent: AgentId, own: Move, theirs: Move) {
        self.history.record(opponent, own, theirs);
        self.tendency.observe(own, theirs);
    }

    /// Random walk: perturb each axis by a uniform offset in
    /// `[-speed, speed]`, then wrap back onto the field.  The x offset is
    /// drawn before the y offset.
    pub fn wander(&mut self, field: Field, rng: &mut SimRng) {
        let dx = rng.offset(self.speed);
        let dy = rng.offset(self.speed);
        let moved = Position::new(self.position.x + dx, self.position.y + dy);
        self.position = field.wrap(moved);
    }
}
