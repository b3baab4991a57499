//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sembrar::prelude::*;
//! ```

pub use crate::error::{Result, SembrarError};
pub use crate::primitives::Matrix;
pub use crate::serialization::DelimitedWriter;
pub use crate::synthetic::{DatasetGenerator, IntegerSampler};
