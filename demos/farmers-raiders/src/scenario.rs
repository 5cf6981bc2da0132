//! JSON scenario files.
//!
//! ```json
//! {
//!   "runs": 3,
//!   "config": { "seed": 7, "total_steps": 200, "pairing": "unordered" },
//!   "cohorts": [
//!     { "strategy": { "kind": "always_cooperate" }, "count": 50, "speed": 0.01 },
//!     { "strategy": { "kind": "tit_for_tat" }, "count": 50, "speed": 0.01 },
//!     { "strategy": { "kind": "always_defect" }, "count": 100, "speed": 0.02 }
//!   ]
//! }
//! ```
//!
//! Every field is optional; missing ones fall back to the reference run.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use ipd_core::SimConfig;
use ipd_sim::Cohort;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub runs:    u32,
    pub config:  SimConfig,
    pub cohorts: Vec<Cohort>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            runs:    2,
            config:  SimConfig::default(),
            cohorts: Cohort::reference_set(),
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening scenario {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing scenario {}", path.display()))
    }
}
