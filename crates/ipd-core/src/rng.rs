//! The simulation's single random source.
//!
//! Every random draw of a run (initial placement, shuffle order, movement
//! offsets, reactive decisions, reproduction odds) comes from one `SimRng`
//! seeded from `SimConfig::seed`.  Given the same seed and the same sequence
//! of calls, a run is bit-for-bit reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts; the simulation never shares it.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Uniform offset in `[-half_width, half_width]`.
    #[inline]
    pub fn offset(&mut self, half_width: f64) -> f64 {
        self.0.gen_range(-half_width..=half_width)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
