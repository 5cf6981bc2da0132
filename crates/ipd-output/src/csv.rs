//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `step_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::{AgentSnapshotRow, OutputResult, StepSummaryRow};
use crate::writer::OutputWriter;

pub const SNAPSHOT_HEADER: [&str; 11] = [
    "run", "step", "agent_id", "kind", "x", "y", "score", "tendency", "leaning", "color", "marker",
];

pub const SUMMARY_HEADER: [&str; 8] = [
    "run", "step", "kind", "population", "cumulative_score", "interactions", "births", "deaths",
];

/// Writes run output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.run.to_string(),
                row.step.to_string(),
                row.agent_id.to_string(),
                row.kind.label().to_owned(),
                row.x.to_string(),
                row.y.to_string(),
                row.score.to_string(),
                row.tendency.to_string(),
                row.leaning.as_str().to_owned(),
                row.kind.color().to_owned(),
                row.kind.marker().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summaries(&mut self, rows: &[StepSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summaries.write_record(&[
                row.run.to_string(),
                row.step.to_string(),
                row.kind.label().to_owned(),
                row.population.to_string(),
                row.cumulative_score.to_string(),
                row.interactions.to_string(),
                row.births.to_string(),
                row.deaths.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
