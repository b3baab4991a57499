//! Synthetic dataset generation.
//!
//! Produces matrices of uniform one-decimal values suitable as sample
//! input for clustering exercises. Randomness is abstracted behind the
//! [`IntegerSampler`] trait so tests can substitute a deterministic
//! source and verify shape and formatting without asserting exact values.
//!
//! # Quick Start
//!
//! ```
//! use sembrar::synthetic::DatasetGenerator;
//!
//! let data = DatasetGenerator::new(100, 4)
//!     .generate()
//!     .expect("non-zero dimensions");
//! assert_eq!(data.shape(), (100, 4));
//! ```

mod dataset;

pub use dataset::{DatasetGenerator, EntropySampler, IntegerSampler, RAW_HIGH, RAW_LOW, SCALE};
