//! The `Sim` struct and its step loop.

use ipd_agent::{Leaning, Population};
use ipd_core::{AgentId, Pairing, SimConfig, SimRng, Step};
use ipd_game::{interact, PayoffMatrix};
use ipd_strategy::KindTable;
use tracing::{debug, info};

use crate::{AgentView, Ledger, SimObserver, SimResult, StepReport};

/// Reproduction probability of a cooperative-leaning agent above the
/// threshold, given the number of cooperative-leaning agents this step.
///
/// Strictly decreasing in `farmers`; values ≤ 0 mean "never".
#[inline]
pub fn cooperative_reproduction_odds(farmers: usize, max_agents: u32) -> f64 {
    1.0 - farmers as f64 / f64::from(max_agents)
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The population engine.
///
/// Owns the agents, the id allocator and the single RNG of a run, and drives
/// the five-phase step described in the [crate docs][crate].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    /// Index of the next step to run.
    pub(crate) step: Step,

    pub(crate) population: Population,
    pub(crate) rng:        SimRng,
    pub(crate) payoff:     PayoffMatrix,
    pub(crate) ledger:     Ledger,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current step up to `config.end_step()`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_step();
        info!(from = %self.step, to = %end, agents = self.population.len(), "run started");
        while self.step < end {
            self.observed_step(observer);
        }
        observer.on_sim_end(self.step, &self.ledger);
        info!(
            steps = self.ledger.steps(),
            agents = self.population.len(),
            ids_issued = self.population.ids_issued(),
            "run finished"
        );
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores `end_step`).
    ///
    /// `on_sim_end` is not called.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer);
        }
        Ok(())
    }

    /// Advance one step without observers.
    pub fn step(&mut self) -> StepReport {
        let now = self.step;

        // ① Shuffle
        self.rng.shuffle(self.population.as_mut_slice());

        // ② Move
        let field = self.config.field();
        for agent in self.population.iter_mut() {
            agent.wander(field, &mut self.rng);
        }

        // ③ Interact
        let mut payoffs = KindTable::<f64>::default();
        let interactions = self.resolve_encounters(&mut payoffs);

        // ④ Classify
        let farmers = self.population.cooperative_count();

        // ⑤ Settle
        let (births, deaths) = self.settle(farmers);

        let report = StepReport {
            step: now,
            interactions,
            farmers,
            births,
            deaths,
            population: self.population.len(),
        };
        self.ledger.record(report, &self.population.count_by_kind(), &payoffs);
        self.step = now.next();

        debug!(
            step = %now,
            interactions,
            farmers,
            births,
            deaths,
            population = report.population,
            "step complete"
        );
        report
    }

    /// Read-only copies of every live agent, in current collection order.
    pub fn snapshot(&self) -> Vec<AgentView> {
        self.population.iter().map(AgentView::from).collect()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Index of the next step to run.
    #[inline]
    pub fn current_step(&self) -> Step {
        self.step
    }

    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    #[inline]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[inline]
    pub fn payoff(&self) -> &PayoffMatrix {
        &self.payoff
    }

    /// Counters of the most recent step, if any step has run.
    pub fn last_report(&self) -> Option<&StepReport> {
        self.ledger.last_report()
    }

    // ── Step phases ───────────────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.step;
        observer.on_step_start(now);
        let report = self.step();
        observer.on_step_end(now, &report, &self.ledger);
        if now.is_snapshot(self.config.snapshot_interval) {
            observer.on_snapshot(now, &self.snapshot(), &self.ledger);
        }
    }

    /// Proximity scan over the shuffled collection.
    ///
    /// `Pairing::Ordered` visits every ordered pair, so a proximate pair
    /// plays once as (a, b) and again as (b, a).  `Pairing::Unordered` only
    /// visits `j > i`.
    fn resolve_encounters(&mut self, payoffs: &mut KindTable<f64>) -> usize {
        let n = self.population.len();
        let range = self.config.interact_range;
        let mut count = 0;

        for i in 0..n {
            let start = match self.config.pairing {
                Pairing::Ordered   => 0,
                Pairing::Unordered => i + 1,
            };
            for j in start..n {
                if i == j {
                    continue;
                }
                let (a, b) = self.population.pair_mut(i, j);
                if !a.position.within_range(b.position, range) {
                    continue;
                }
                interact(a, b, &self.payoff, &mut self.rng).credit(payoffs);
                count += 1;
            }
        }
        count
    }

    /// Upkeep, death and reproduction.  Returns `(births, deaths)`.
    ///
    /// Deaths and newborns are collected during the pass and committed after
    /// it, so the pass walks a stable collection.
    fn settle(&mut self, farmers: usize) -> (usize, usize) {
        let upkeep = self.config.upkeep;
        let threshold = self.config.reproduce_score;
        let base = self.config.base_score;
        let odds = cooperative_reproduction_odds(farmers, self.config.max_agents);

        let mut dead: Vec<AgentId> = Vec::new();
        let mut born = Vec::new();
        let (agents, ids) = self.population.split_mut();

        for agent in agents.iter_mut() {
            agent.score -= upkeep;
            if agent.score < 0.0 {
                dead.push(agent.id());
            } else if agent.score > threshold {
                // Aggressive agents skip the draw.
                let reproduces = match agent.leaning() {
                    Leaning::Aggressive  => true,
                    Leaning::Cooperative => self.rng.unit() < odds,
                };
                if reproduces {
                    born.push(agent.offspring(ids.allocate(), base));
                    agent.score = base;
                } else {
                    agent.score = threshold;
                }
            }
        }

        let counts = (born.len(), dead.len());
        self.population.commit(&dead, born);
        counts
    }
}
