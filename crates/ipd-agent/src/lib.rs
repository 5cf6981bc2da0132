//! `ipd-agent` — agent state and population storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`history`]   | `History` — paired per-opponent move records                  |
//! | [`tendency`]  | `Tendency` running mean, `Leaning` classification             |
//! | [`agent`]     | `Agent` — position, speed, score, strategy, history, tendency |
//! | [`store`]     | `Population` — live agents plus the run's `IdAllocator`       |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                       |
//! |-----------|--------------------------------------------------------------|
//! | `fx-hash` | History maps use `FxHashMap` instead of SipHash `HashMap`.   |
//! | `serde`   | Derives `Serialize`/`Deserialize` on all public types.       |
//!
//! Histories grow with every encounter and are never pruned, even after the
//! opponent dies.  That is fine for runs of a few hundred steps; very long
//! runs with high turnover will see memory grow with total encounters.

pub mod agent;
pub mod history;
pub mod store;
pub mod tendency;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use history::History;
pub use store::Population;
pub use tendency::{Leaning, Tendency};
