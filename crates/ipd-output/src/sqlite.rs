//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `agent_snapshots` and `step_summaries`.

use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::{AgentSnapshotRow, OutputResult, StepSummaryRow};
use crate::writer::OutputWriter;

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS agent_snapshots (
                 run      INTEGER NOT NULL,
                 step     INTEGER NOT NULL,
                 agent_id INTEGER NOT NULL,
                 kind     TEXT    NOT NULL,
                 x        REAL    NOT NULL,
                 y        REAL    NOT NULL,
                 score    REAL    NOT NULL,
                 tendency REAL    NOT NULL,
                 leaning  TEXT    NOT NULL,
                 color    TEXT    NOT NULL,
                 marker   TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS step_summaries (
                 run              INTEGER NOT NULL,
                 step             INTEGER NOT NULL,
                 kind             TEXT    NOT NULL,
                 population       INTEGER NOT NULL,
                 cumulative_score REAL    NOT NULL,
                 interactions     INTEGER NOT NULL,
                 births           INTEGER NOT NULL,
                 deaths           INTEGER NOT NULL,
                 PRIMARY KEY (run, step, kind)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots \
                 (run, step, agent_id, kind, x, y, score, tendency, leaning, color, marker) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.run,
                    row.step as i64,
                    row.agent_id as i64,
                    row.kind.label(),
                    row.x,
                    row.y,
                    row.score,
                    row.tendency,
                    row.leaning.as_str(),
                    row.kind.color(),
                    row.kind.marker(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_step_summaries(&mut self, rows: &[StepSummaryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO step_summaries \
                 (run, step, kind, population, cumulative_score, interactions, births, deaths) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.run,
                    row.step as i64,
                    row.kind.label(),
                    row.population as i64,
                    row.cumulative_score,
                    row.interactions as i64,
                    row.births as i64,
                    row.deaths as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
