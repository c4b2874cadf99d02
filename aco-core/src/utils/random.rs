#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;

/// Provides the way to use randomized values in generic way.
///
/// Every stochastic decision of the optimizer goes through an instance of this trait which is
/// owned explicitly by the caller, so that two optimizers never share a random stream.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the half open interval [min, max)
    fn uniform_real(&mut self, min: Float, max: Float) -> Float;

    /// Produces a new seed value from the underlying stream.
    fn next_seed(&mut self) -> u64;

    /// Returns an index drawn from the categorical distribution given by `probabilities`.
    /// Probabilities are expected to be non-negative and to sum up to one: if rounding leaves
    /// the drawn value uncovered, the last index with a positive probability is returned.
    fn weighted(&mut self, probabilities: &[Float]) -> usize {
        assert!(!probabilities.is_empty());

        let threshold = self.uniform_real(0., 1.);
        let mut cumulative = 0.;

        for (idx, &probability) in probabilities.iter().enumerate() {
            cumulative += probability;
            if threshold < cumulative {
                return idx;
            }
        }

        probabilities.iter().rposition(|&probability| probability > 0.).unwrap_or(probabilities.len() - 1)
    }

    /// Returns a uniformly distributed index in [0, size) range.
    fn uniform_index(&mut self, size: usize) -> usize {
        assert!(size > 0);
        self.uniform_int(0, size as i32 - 1) as usize
    }
}

/// A default random implementation backed by a small, fast, seedable generator.
#[derive(Clone, Debug)]
pub struct DefaultRandom {
    rng: SmallRng,
}

impl DefaultRandom {
    /// Creates an instance which produces the same sequence of values for the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Creates an instance with repeatable sequence when seed is specified, random otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::default, Self::new_repeatable)
    }

    /// Derives an independent generator seeded from the current stream.
    pub fn fork(&mut self) -> Self {
        Self::new_repeatable(self.next_seed())
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: SmallRng::from_entropy() }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.gen_range(min..=max)
    }

    fn uniform_real(&mut self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.gen_range(min..max)
    }

    fn next_seed(&mut self) -> u64 {
        self.rng.next_u64()
    }
}
