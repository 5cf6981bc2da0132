//! `ipd-core` — foundational types for the spatial iterated prisoner's
//! dilemma workspace.
//!
//! This crate is a dependency of every other `ipd-*` crate.  It has no `ipd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `IdAllocator`                              |
//! | [`moves`]       | `Move` (`Cooperate` / `Defect`)                       |
//! | [`field`]       | `Position`, `Field` (toroidal wraparound)             |
//! | [`step`]        | `Step` counter                                        |
//! | [`config`]      | `SimConfig`, `Pairing`                                |
//! | [`rng`]         | `SimRng` (the single random source of a run)          |
//! | [`error`]       | `IpdError`, `IpdResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod field;
pub mod ids;
pub mod moves;
pub mod rng;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Pairing, SimConfig};
pub use error::{IpdError, IpdResult};
pub use field::{Field, Position};
pub use ids::{AgentId, IdAllocator};
pub use moves::Move;
pub use rng::SimRng;
pub use step::Step;
