//! Delimited-text serialization of numeric matrices.

use crate::error::Result;
use crate::primitives::Matrix;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a matrix as delimited text, one row per line.
///
/// Defaults match the clustering-exercise format: comma delimiter,
/// one digit after the decimal point, no header.
///
/// # Examples
///
/// ```
/// use sembrar::primitives::Matrix;
/// use sembrar::serialization::DelimitedWriter;
///
/// let m = Matrix::from_vec(1, 2, vec![1.0_f32, 9.8]).expect("1*2=2 elements");
/// let mut buf = Vec::new();
/// DelimitedWriter::new().write_to(&m, &mut buf).expect("in-memory write");
/// assert_eq!(buf, b"1.0,9.8\n");
/// ```
#[derive(Debug, Clone)]
pub struct DelimitedWriter {
    delimiter: char,
    precision: usize,
}

impl Default for DelimitedWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimitedWriter {
    /// Creates a writer with comma delimiter and one-decimal precision.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiter: ',',
            precision: 1,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the number of digits after the decimal point.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Writes `matrix` to `path`, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns `SembrarError::Io` when the file cannot be created or written.
    pub fn write(&self, matrix: &Matrix<f32>, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        self.write_to(matrix, &mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Serializes `matrix` into `out`, one line per row.
    ///
    /// # Errors
    ///
    /// Returns `SembrarError::Io` when the underlying writer fails.
    pub fn write_to<W: Write>(&self, matrix: &Matrix<f32>, out: &mut W) -> Result<()> {
        let delimiter = self.delimiter.to_string();
        for r in 0..matrix.n_rows() {
            let line = matrix
                .row(r)
                .iter()
                .map(|v| format!("{v:.prec$}", prec = self.precision))
                .collect::<Vec<_>>()
                .join(&delimiter);
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "delimited_tests.rs"]
mod tests;
