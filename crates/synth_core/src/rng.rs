//! Seeded random source for series generation.
//!
//! This module provides [`SeriesRng`], a seeded PRNG wrapper offering
//! reproducible Gaussian draws. Every generator in the workspace takes one
//! of these handles explicitly; there is no process-wide random state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Seeded random number source.
///
/// Provides reproducible Gaussian draw sequences: the same seed always
/// yields the same draws, enabling deterministic tests and parallel-safe
/// use (one handle per worker, no synchronisation).
///
/// # Examples
///
/// ```rust
/// use synth_core::rng::SeriesRng;
///
/// let mut rng = SeriesRng::from_seed(42);
///
/// // Single standard normal draw
/// let z = rng.gen_normal();
/// assert!(z.is_finite());
///
/// // A vector of Normal(mean, std_dev) draws
/// let draws = rng.normal(10.0, 2.0, 100);
/// assert_eq!(draws.len(), 100);
/// ```
pub struct SeriesRng {
    inner: StdRng,
    /// The seed used for initialisation, kept for reproducibility tracking.
    seed: u64,
}

impl SeriesRng {
    /// Creates a new source initialised with the given seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use synth_core::rng::SeriesRng;
    ///
    /// let mut rng1 = SeriesRng::from_seed(12345);
    /// let mut rng2 = SeriesRng::from_seed(12345);
    ///
    /// // Same seed produces identical sequences
    /// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new source with a seed drawn from system entropy.
    ///
    /// The chosen seed remains observable through [`SeriesRng::seed`] so a
    /// run can still be reproduced after the fact.
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::from_seed(seed)
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal variate (mean 0, std 1).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Zero-allocation; the buffer must be pre-allocated by the caller.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }

    /// Draws `count` independent values from Normal(`mean`, `std_dev`).
    ///
    /// Draws are produced by scaling standard normals, so `std_dev = 0.0`
    /// yields exactly `mean` for every element (and still advances the
    /// stream by `count` draws, keeping seeded runs aligned across
    /// parameterisations).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use synth_core::rng::SeriesRng;
    ///
    /// let mut rng = SeriesRng::from_seed(7);
    /// let constant = rng.normal(5.0, 0.0, 3);
    /// assert_eq!(constant, vec![5.0, 5.0, 5.0]);
    /// ```
    pub fn normal(&mut self, mean: f64, std_dev: f64, count: usize) -> Vec<f64> {
        (0..count)
            .map(|_| {
                let z: f64 = StandardNormal.sample(&mut self.inner);
                mean + std_dev * z
            })
            .collect()
    }
}

impl std::fmt::Debug for SeriesRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesRng").field("seed", &self.seed).finish()
    }
}
