//! Deterministic RNG wrapper for the enemy's stochastic choices.
//!
//! Sit durations, waypoint picks, and voice-line pools all draw from one
//! `EnemyRng` owned by the agent.  The same seed and the same tick sequence
//! always replay the same behavior.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by the enemy agent.
pub struct EnemyRng(SmallRng);

impl EnemyRng {
    pub fn new(seed: u64) -> Self {
        EnemyRng(SmallRng::seed_from_u64(seed))
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

    /// Uniform `f32` in `[min, max]`.  Returns `min` when the bounds are equal
    /// or inverted instead of panicking.
    #[inline]
    pub fn between(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..=max)
    }

    /// Uniform index in `0..len`, or `None` for an empty range.
    #[inline]
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }
}
