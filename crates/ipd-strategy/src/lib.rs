//! `ipd-strategy` — decision policies for the spatial iterated prisoner's
//! dilemma.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`strategy`] | `Strategy` enum and its `decide` policy                        |
//! | [`reactive`] | `ReactiveParams` — the three probabilities of the reactive rule |
//! | [`kind`]     | `StrategyKind` tag and the per-kind `KindTable<T>`             |
//! | [`error`]    | `StrategyError`, `StrategyResult<T>`                           |
//!
//! # Design notes
//!
//! A strategy is a pure function of the opponent's recorded moves against the
//! deciding agent.  It holds no per-call state; the history it reads belongs
//! to the agent (`ipd-agent`).  The only side effect is drawing from the
//! simulation's `SimRng`, which only `ProbabilisticReactive` does.

pub mod error;
pub mod kind;
pub mod reactive;
pub mod strategy;


pub use error::{StrategyError, StrategyResult};
pub use kind::{KindTable, StrategyKind};
pub use reactive::ReactiveParams;
pub use strategy::Strategy;
