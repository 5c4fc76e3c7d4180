//! Deterministic simulation RNG wrapper.
//!
//! All randomness in the simulation (spawn positions, headings, stay-at-home
//! assignment, outbreak seeding) flows through one `SimRng` seeded from
//! `SimParams::rng_seed`.  The same seed always produces the same initial
//! field, which is what makes the spawn path testable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded simulation-level RNG.
///
/// Used only in single-threaded contexts; the frame loop itself draws no
/// randomness after construction.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
