//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ipd_core::Step;
use ipd_sim::{AgentView, Ledger, SimObserver, StepReport};
use tracing::warn;

use crate::row::{AgentSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and per-step summaries to
/// any [`OutputWriter`] backend.
///
/// Summaries are written after every step; snapshots whenever the simulation
/// takes one.  Errors from the writer are stored internally because
/// `SimObserver` methods have no return value.  After `sim.run()` returns,
/// check for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    run:        u32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, tagging every row with `run`.
    pub fn new(writer: W, run: u32) -> Self {
        Self {
            writer,
            run,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(run = self.run, error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, _step: Step, report: &StepReport, ledger: &Ledger) {
        let rows = StepSummaryRow::for_step(self.run, report, ledger);
        let result = self.writer.write_step_summaries(&rows);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, step: Step, agents: &[AgentView], _ledger: &Ledger) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|view| AgentSnapshotRow::from_view(self.run, step, view))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_step: Step, _ledger: &Ledger) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
