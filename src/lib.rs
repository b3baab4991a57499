//! Sembrar: synthetic dataset generation for clustering exercises.
//!
//! Sembrar produces small numeric datasets (matrices of uniform
//! one-decimal values) and writes them as comma-separated text, giving
//! clustering algorithms something realistic to chew on.
//!
//! # Quick Start
//!
//! ```
//! use sembrar::prelude::*;
//!
//! // 3 samples with 2 features each, values in [0.1, 9.8]
//! let data = DatasetGenerator::new(3, 2)
//!     .with_random_state(42)
//!     .generate()
//!     .expect("non-zero dimensions");
//!
//! assert_eq!(data.shape(), (3, 2));
//! assert!(data.as_slice().iter().all(|&v| (0.1..=9.8).contains(&v)));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: core Matrix type
//! - [`synthetic`]: uniform dataset generation
//! - [`serialization`]: delimited-text output
//! - [`error`]: error types

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod serialization;
pub mod synthetic;
