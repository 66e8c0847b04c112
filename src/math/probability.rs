//! Random choices used by procedural generation

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the random decisions made during generation
///
/// Abstracted so generators can be driven by a seeded generator in production
/// and by scripted sequences in tests.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both inclusive
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;

    /// True with probability `percentage / 100`
    fn percent_chance(&mut self, percentage: i32) -> bool;

    /// `value` clamped into `[min, max]`
    fn constrain(&self, value: i32, min: i32, max: i32) -> i32 {
        num_traits::clamp(value, min, max.max(min))
    }
}

/// Seeded random source for reproducible generation
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    fn percent_chance(&mut self, percentage: i32) -> bool {
        if percentage <= 0 {
            return false;
        }
        self.rng.random_range(0..100) < percentage
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        (**self).uniform_int(min, max)
    }

    fn percent_chance(&mut self, percentage: i32) -> bool {
        (**self).percent_chance(percentage)
    }

    fn constrain(&self, value: i32, min: i32, max: i32) -> i32 {
        (**self).constrain(value, min, max)
    }
}
