//! Per-step aggregates read by plotting and logging collaborators.

use ipd_core::Step;
use ipd_strategy::{KindTable, StrategyKind};

/// Counters for one completed step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    pub step:         Step,
    /// Encounters played in the interaction phase.
    pub interactions: usize,
    /// Agents whose tendency was ≤ 0.5 when the settle phase began.
    pub farmers:      usize,
    pub births:       usize,
    pub deaths:       usize,
    /// Live agents after the step.
    pub population:   usize,
}

/// Time series per strategy kind.
///
/// Both series have `steps() + 1` entries: entry 0 is the state before the
/// first step, entry `n + 1` the state after step `n`.  One entry is
/// appended per step even when nothing changed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ledger {
    population:       KindTable<Vec<usize>>,
    cumulative_score: KindTable<Vec<f64>>,
    reports:          Vec<StepReport>,
}

impl Ledger {
    /// Start a ledger from the initial per-kind population.
    pub fn new(initial: &KindTable<usize>) -> Self {
        Self {
            population:       initial.map(|_, &n| vec![n]),
            cumulative_score: KindTable::from_fn(|_| vec![0.0]),
            reports:          Vec::new(),
        }
    }

    /// Append one step: live counts after the step and the payoff credited
    /// to each kind during it.
    pub fn record(
        &mut self,
        report: StepReport,
        counts: &KindTable<usize>,
        payoff: &KindTable<f64>,
    ) {
        for kind in StrategyKind::ALL {
            self.population[kind].push(counts[kind]);
            let running = self.cumulative_score[kind].last().copied().unwrap_or(0.0);
            self.cumulative_score[kind].push(running + payoff[kind]);
        }
        self.reports.push(report);
    }

    /// Number of steps recorded.
    #[inline]
    pub fn steps(&self) -> usize {
        self.reports.len()
    }

    /// Live count of `kind` per step (entry 0 = initial).
    pub fn population(&self, kind: StrategyKind) -> &[usize] {
        &self.population[kind]
    }

    /// Running payoff total of `kind` per step (entry 0 = 0).
    pub fn cumulative_score(&self, kind: StrategyKind) -> &[f64] {
        &self.cumulative_score[kind]
    }

    /// Latest live count per kind.
    pub fn latest_population(&self) -> KindTable<usize> {
        self.population.map(|_, series| series.last().copied().unwrap_or(0))
    }

    /// Latest running payoff total per kind.
    pub fn latest_cumulative_score(&self) -> KindTable<f64> {
        self.cumulative_score.map(|_, series| series.last().copied().unwrap_or(0.0))
    }

    /// Per-step counters, oldest first.
    pub fn reports(&self) -> &[StepReport] {
        &self.reports
    }

    pub fn last_report(&self) -> Option<&StepReport> {
        self.reports.last()
    }
}
