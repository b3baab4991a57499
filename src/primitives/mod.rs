//! Core numeric primitives.
//!
//! The [`Matrix`] type holds generated datasets in row-major order.

mod matrix;

pub use matrix::Matrix;
