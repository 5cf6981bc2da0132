//! `ipd-game` — the game itself: payoffs and pairwise encounters.
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`payoff`]      | `PayoffMatrix` — the 2×2 table of score pairs          |
//! | [`interaction`] | `interact()` and the `Encounter` record it returns     |

pub mod interaction;
pub mod payoff;

#[cfg(test)]
mod tests;

pub use interaction::{interact, Encounter};
pub use payoff::PayoffMatrix;
