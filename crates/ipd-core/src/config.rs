//! World-level simulation configuration.
//!
//! Per-strategy settings (population counts, speeds, reactive probabilities)
//! live with the cohorts in `ipd-sim`; everything here applies to the whole
//! population.

use crate::{Field, IpdError, IpdResult, Step};

// ── Pairing ───────────────────────────────────────────────────────────────────

/// How the proximity scan turns proximate agents into encounters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Pairing {
    /// Every ordered pair `(a, b)` with `a != b`.  A proximate unordered pair
    /// therefore plays twice per step, once from each side.
    #[default]
    Ordered,
    /// Every unordered pair once, in shuffled collection order.
    Unordered,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// `Default` reproduces the reference model constants.  Call
/// [`validate`](Self::validate) before building a simulation; `SimBuilder`
/// does this for you.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Field extent along x (`X_LIM`).
    pub field_width: f64,

    /// Field extent along y (`Y_LIM`).
    pub field_height: f64,

    /// Per-axis distance below which two agents interact.
    pub interact_range: f64,

    /// Score above which an agent may reproduce.
    pub reproduce_score: f64,

    /// Capacity constant used as the denominator of the cooperative
    /// reproduction odds.  Not a hard cap on population size.
    pub max_agents: u32,

    /// Score of every newborn and of a parent right after reproducing.
    pub base_score: f64,

    /// Score subtracted from every agent at the end of each step.
    pub upkeep: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Steps executed by `Sim::run`.
    pub total_steps: u64,

    /// Snapshot every N steps (0 disables snapshots).
    pub snapshot_interval: u64,

    /// Encounter pairing policy for the proximity scan.
    pub pairing: Pairing,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width:       0.57,
            field_height:      0.57,
            interact_range:    0.02,
            reproduce_score:   100.0,
            max_agents:        600,
            base_score:        50.0,
            upkeep:            1.0,
            seed:              0,
            total_steps:       100,
            snapshot_interval: 5,
            pairing:           Pairing::Ordered,
        }
    }
}

impl SimConfig {
    /// The toroidal field described by this config.
    #[inline]
    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// The step at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.total_steps)
    }

    /// Reject configurations that would produce nonsensical dynamics.
    pub fn validate(&self) -> IpdResult<()> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("interact_range", self.interact_range)?;
        positive("reproduce_score", self.reproduce_score)?;
        positive("base_score", self.base_score)?;

        if !self.upkeep.is_finite() || self.upkeep < 0.0 {
            return Err(IpdError::OutOfRange {
                what:     "upkeep",
                expected: "finite and >= 0",
                value:    self.upkeep,
            });
        }
        if self.max_agents == 0 {
            return Err(IpdError::Config("max_agents must be at least 1".into()));
        }
        Ok(())
    }
}

fn positive(what: &'static str, value: f64) -> IpdResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(IpdError::OutOfRange { what, expected: "finite and > 0", value })
    }
}
