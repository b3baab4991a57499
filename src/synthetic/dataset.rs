//! Uniform one-decimal dataset generation.

use crate::error::{Result, SembrarError};
use crate::primitives::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lower bound (inclusive) of the raw integer samples.
pub const RAW_LOW: u32 = 1;
/// Upper bound (exclusive) of the raw integer samples.
pub const RAW_HIGH: u32 = 99;
/// Divisor mapping raw samples onto one-decimal values.
pub const SCALE: f32 = 10.0;

/// Source of uniform integers in a half-open range.
///
/// Production code uses [`EntropySampler`]; tests can substitute a fixed
/// sequence to pin generated values.
pub trait IntegerSampler {
    /// Returns the next integer in `[low, high)`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// `StdRng`-backed sampler, seedable for reproducibility.
#[derive(Debug, Clone)]
pub struct EntropySampler {
    rng: StdRng,
}

impl EntropySampler {
    /// Creates a sampler seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a sampler with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IntegerSampler for EntropySampler {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..high)
    }
}

/// Generator for uniform one-decimal datasets.
///
/// Each cell is an independent integer drawn from `[1, 99)` and divided
/// by `10.0`, yielding values in `[0.1, 9.8]`.
///
/// # Examples
///
/// ```
/// use sembrar::synthetic::DatasetGenerator;
///
/// let data = DatasetGenerator::new(3, 2)
///     .with_random_state(42)
///     .generate()
///     .expect("non-zero dimensions");
/// assert_eq!(data.shape(), (3, 2));
/// ```
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    /// Number of rows (samples).
    rows: usize,
    /// Number of columns (features).
    cols: usize,
    /// Random seed for sampling.
    random_state: Option<u64>,
}

impl DatasetGenerator {
    /// Creates a generator for a `rows x cols` dataset.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            random_state: None,
        }
    }

    /// Sets the random seed for reproducible output.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Generates the dataset using the configured randomness source.
    ///
    /// # Errors
    ///
    /// Returns `SembrarError::InvalidDimension` if `rows` or `cols` is zero.
    pub fn generate(&self) -> Result<Matrix<f32>> {
        let mut sampler = match self.random_state {
            Some(seed) => EntropySampler::seeded(seed),
            None => EntropySampler::from_entropy(),
        };
        self.generate_with(&mut sampler)
    }

    /// Generates the dataset from a caller-supplied sampler.
    ///
    /// # Errors
    ///
    /// Returns `SembrarError::InvalidDimension` if `rows` or `cols` is zero.
    pub fn generate_with<S: IntegerSampler>(&self, sampler: &mut S) -> Result<Matrix<f32>> {
        self.validate()?;

        let data: Vec<f32> = (0..self.rows * self.cols)
            .map(|_| sampler.next_in_range(RAW_LOW, RAW_HIGH) as f32 / SCALE)
            .collect();

        Matrix::from_vec(self.rows, self.cols, data).map_err(SembrarError::from)
    }

    fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(SembrarError::invalid_dimension("rows", self.rows));
        }
        if self.cols == 0 {
            return Err(SembrarError::invalid_dimension("cols", self.cols));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "dataset_proptests.rs"]
mod proptests;
