//! Generate command implementation
//!
//! Samples a rows x cols matrix of uniform one-decimal values and writes
//! it as comma-separated text.

use crate::error::Result;
use crate::output;
use sembrar::serialization::DelimitedWriter;
use sembrar::synthetic::DatasetGenerator;
use std::path::PathBuf;

/// Resolved CLI arguments for a single generation run.
#[derive(Debug, Clone)]
pub(crate) struct GenerateConfig {
    pub rows: usize,
    pub cols: usize,
    pub output: PathBuf,
}

/// Run the generate command
pub(crate) fn run(config: &GenerateConfig) -> Result<()> {
    // Generate before opening the output so a failed run never touches an
    // existing file at the destination.
    let data = DatasetGenerator::new(config.rows, config.cols).generate()?;
    DelimitedWriter::new().write(&data, &config.output)?;

    output::success(&format!(
        "Wrote {} x {} dataset to {}",
        config.rows,
        config.cols,
        config.output.display()
    ));
    Ok(())
}
