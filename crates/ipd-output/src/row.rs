//! Plain data row types written by output backends.

use ipd_agent::Leaning;
use ipd_core::Step;
use ipd_sim::{AgentView, Ledger, StepReport};
use ipd_strategy::StrategyKind;

/// One agent as seen in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub run:      u32,
    pub step:     u64,
    pub agent_id: u64,
    pub kind:     StrategyKind,
    pub x:        f64,
    pub y:        f64,
    pub score:    f64,
    pub tendency: f64,
    pub leaning:  Leaning,
}

impl AgentSnapshotRow {
    pub fn from_view(run: u32, step: Step, view: &AgentView) -> Self {
        Self {
            run,
            step:     step.0,
            agent_id: view.id.get(),
            kind:     view.kind,
            x:        view.x,
            y:        view.y,
            score:    view.score,
            tendency: view.tendency,
            leaning:  view.leaning,
        }
    }
}

/// Aggregates of one strategy kind after one step.
///
/// The step-wide counters (`interactions`, `births`, `deaths`) repeat on
/// every kind's row of the same step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub run:              u32,
    pub step:             u64,
    pub kind:             StrategyKind,
    pub population:       u64,
    pub cumulative_score: f64,
    pub interactions:     u64,
    pub births:           u64,
    pub deaths:           u64,
}

impl StepSummaryRow {
    /// One row per strategy kind, read from the latest ledger entries.
    pub fn for_step(run: u32, report: &StepReport, ledger: &Ledger) -> Vec<StepSummaryRow> {
        let population = ledger.latest_population();
        let scores = ledger.latest_cumulative_score();
        StrategyKind::ALL
            .into_iter()
            .map(|kind| StepSummaryRow {
                run,
                step:             report.step.0,
                kind,
                population:       population[kind] as u64,
                cumulative_score: scores[kind],
                interactions:     report.interactions as u64,
                births:           report.births as u64,
                deaths:           report.deaths as u64,
            })
            .collect()
    }
}
