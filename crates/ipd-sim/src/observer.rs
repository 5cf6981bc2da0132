//! Simulation observer trait for progress reporting and data collection.

use ipd_core::Step;

use crate::{AgentView, Ledger, StepReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] between steps.
///
/// Observers only ever see state between steps, never mid-step, and cannot
/// mutate it.  All methods default to no-ops.
///
/// # Example — progress printer
///
/// ```rust
/// use ipd_core::Step;
/// use ipd_sim::{Ledger, SimObserver, StepReport};
///
/// struct Progress { run: usize }
///
/// impl SimObserver for Progress {
///     fn on_step_end(&mut self, step: Step, _report: &StepReport, _ledger: &Ledger) {
///         println!("{} - {}", self.run, step.0);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a step starts.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called after a step completes; `ledger` already includes it.
    fn on_step_end(&mut self, _step: Step, _report: &StepReport, _ledger: &Ledger) {}

    /// Called after steps whose index is a multiple of
    /// `config.snapshot_interval`.
    fn on_snapshot(&mut self, _step: Step, _agents: &[AgentView], _ledger: &Ledger) {}

    /// Called once after the final step of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_step: Step, _ledger: &Ledger) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
