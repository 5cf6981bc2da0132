//! `ipd-sim` — the population engine.
//!
//! # One step
//!
//! ```text
//! step():
//!   ① Shuffle   — random order for the whole collection.
//!   ② Move      — each agent perturbs x, y by U[-speed, speed], then wraps
//!                 onto the toroidal field.
//!   ③ Interact  — every ordered pair (a, b), a ≠ b, with both axis
//!                 distances < interact_range plays one encounter.
//!                 (Pairing::Unordered plays each such pair once instead.)
//!   ④ Classify  — count agents whose tendency is ≤ 0.5 ("farmers").
//!   ⑤ Settle    — per agent: score -= upkeep; score < 0 → dies;
//!                 score > reproduce_score → reproduces with probability 1
//!                 (aggressive) or 1 − farmers / max_agents (cooperative),
//!                 else score is capped at reproduce_score.
//! ```
//!
//! Deaths and births of step ⑤ are collected during the pass and applied
//! after it, so newborns neither pay upkeep nor reproduce in the step they
//! are born.
//!
//! # Quick-start
//!
//! ```rust
//! use ipd_core::SimConfig;
//! use ipd_sim::{Cohort, NoopObserver, SimBuilder};
//!
//! let config = SimConfig { seed: 7, total_steps: 10, ..SimConfig::default() };
//! let mut sim = SimBuilder::new(config)
//!     .cohorts(Cohort::reference_set())
//!     .build()
//!     .unwrap();
//! sim.run(&mut NoopObserver).unwrap();
//! assert_eq!(sim.ledger().steps(), 10);
//! ```

pub mod builder;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::{Cohort, SimBuilder};
pub use error::{SimError, SimResult};
pub use ledger::{Ledger, StepReport};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{cooperative_reproduction_odds, Sim};
pub use snapshot::AgentView;
