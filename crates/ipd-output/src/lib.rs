//! `ipd-output` — run output writers for the spatial iterated prisoner's
//! dilemma.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                   |
//! |-----------|---------|-------------------------------------------------|
//! | *(none)*  | CSV     | `agent_snapshots.csv`, `step_summaries.csv`     |
//! | `sqlite`  | SQLite  | `output.db`                                     |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `ipd_sim::SimObserver`.  Every row carries a `run`
//! column so several runs can share one sink.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ipd_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output/run_0")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, 0);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, StepSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
