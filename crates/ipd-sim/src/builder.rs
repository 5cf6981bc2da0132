//! Fluent builder for constructing a [`Sim`].

use ipd_agent::Population;
use ipd_core::{Position, SimConfig, SimRng, Step};
use ipd_game::PayoffMatrix;
use ipd_strategy::{KindTable, ReactiveParams, Strategy, StrategyKind};
use tracing::info;

use crate::{Ledger, Sim, SimError, SimResult};

// ── Cohort ────────────────────────────────────────────────────────────────────

/// A group of identically configured agents placed at random on build.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cohort {
    pub strategy: Strategy,
    pub count:    usize,
    /// Half-width of the per-axis random walk offset.
    pub speed:    f64,
}

impl Cohort {
    /// `count` agents of `strategy` at the kind's default speed.
    pub fn new(strategy: Strategy, count: usize) -> Self {
        Self { strategy, count, speed: Self::default_speed(strategy.kind()) }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Raiders roam twice as far per step as everyone else.
    pub fn default_speed(kind: StrategyKind) -> f64 {
        match kind {
            StrategyKind::AlwaysDefect => 0.02,
            _                          => 0.01,
        }
    }

    /// 50 farmers, 50 reactive agents (1, 1, 0) and 100 raiders.
    pub fn reference_set() -> Vec<Cohort> {
        vec![
            Cohort::new(Strategy::AlwaysCooperate, 50),
            Cohort::new(Strategy::ProbabilisticReactive(ReactiveParams::default()), 50),
            Cohort::new(Strategy::AlwaysDefect, 100),
        ]
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

/// An agent with a caller-chosen starting position.
struct Placed {
    strategy: Strategy,
    speed:    f64,
    position: Position,
}

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                     |
/// |---------------------|-----------------------------|
/// | `.cohort(c)`        | No randomly placed agents   |
/// | `.payoff(m)`        | `PayoffMatrix::STANDARD`    |
/// | `.agent_at(..)`     | No explicitly placed agents |
///
/// Cohorts are placed first, in the order given, each agent drawing `x` then
/// `y` uniformly over the field.  Explicitly placed agents follow.
///
/// # Example
///
/// ```rust
/// use ipd_core::{Position, SimConfig};
/// use ipd_sim::{Cohort, SimBuilder};
/// use ipd_strategy::Strategy;
///
/// let sim = SimBuilder::new(SimConfig::default())
///     .cohort(Cohort::new(Strategy::TitForTat, 10))
///     .agent_at(Strategy::AlwaysDefect, 0.0, Position::new(0.1, 0.1))
///     .build()
///     .unwrap();
/// assert_eq!(sim.population().len(), 11);
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    cohorts: Vec<Cohort>,
    placed:  Vec<Placed>,
    payoff:  PayoffMatrix,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            cohorts: Vec::new(),
            placed:  Vec::new(),
            payoff:  PayoffMatrix::STANDARD,
        }
    }

    /// Add one cohort.  At most one cohort per strategy kind.
    pub fn cohort(mut self, cohort: Cohort) -> Self {
        self.cohorts.push(cohort);
        self
    }

    /// Add several cohorts.
    pub fn cohorts(mut self, cohorts: impl IntoIterator<Item = Cohort>) -> Self {
        self.cohorts.extend(cohorts);
        self
    }

    /// Replace the payoff table.
    pub fn payoff(mut self, payoff: PayoffMatrix) -> Self {
        self.payoff = payoff;
        self
    }

    /// Place a single agent at `position` instead of a random spot.
    pub fn agent_at(mut self, strategy: Strategy, speed: f64, position: Position) -> Self {
        self.placed.push(Placed { strategy, speed, position });
        self
    }

    /// Validate every input, place the agents and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut seen = KindTable::<bool>::default();
        for cohort in &self.cohorts {
            let kind = cohort.strategy.kind();
            if seen[kind] {
                return Err(SimError::DuplicateCohort(kind));
            }
            seen[kind] = true;
            check_agent(&cohort.strategy, cohort.speed)?;
        }

        let field = self.config.field();
        for placed in &self.placed {
            check_agent(&placed.strategy, placed.speed)?;
            if !field.contains(placed.position) {
                return Err(SimError::OutsideField(placed.position));
            }
        }

        let mut rng = SimRng::new(self.config.seed);
        let mut population = Population::new();
        for cohort in &self.cohorts {
            for _ in 0..cohort.count {
                let x = rng.unit() * field.width;
                let y = rng.unit() * field.height;
                population.spawn(
                    cohort.strategy,
                    cohort.speed,
                    Position::new(x, y),
                    self.config.base_score,
                );
            }
        }
        for placed in self.placed {
            population.spawn(
                placed.strategy,
                placed.speed,
                placed.position,
                self.config.base_score,
            );
        }

        let ledger = Ledger::new(&population.count_by_kind());
        info!(
            agents = population.len(),
            seed = self.config.seed,
            steps = self.config.total_steps,
            pairing = ?self.config.pairing,
            "simulation built"
        );

        Ok(Sim {
            config: self.config,
            step: Step::ZERO,
            population,
            rng,
            payoff: self.payoff,
            ledger,
        })
    }
}

fn check_agent(strategy: &Strategy, speed: f64) -> SimResult<()> {
    let kind = strategy.kind();
    strategy
        .validate()
        .map_err(|source| SimError::Strategy { kind, source })?;
    // The walk offset is drawn from a range `2 * speed` wide.
    if !(2.0 * speed).is_finite() || speed < 0.0 {
        return Err(SimError::Speed { kind, speed });
    }
    Ok(())
}
