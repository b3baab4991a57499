//! smb - Sembrar dataset generation CLI
//!
//! Usage:
//!   smb 100 4 data.csv    # 100 rows, 4 columns, written to data.csv

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;
mod output;

use commands::generate::{self, GenerateConfig};

/// smb - synthetic clustering-dataset generator
///
/// Produces a rows x cols matrix of uniform one-decimal values and writes
/// it as comma-separated text.
#[derive(Parser)]
#[command(name = "smb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of matrix rows
    #[arg(value_name = "ROWS")]
    rows: usize,

    /// Number of matrix columns
    #[arg(value_name = "COLS")]
    cols: usize,

    /// Output file path
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = GenerateConfig {
        rows: cli.rows,
        cols: cli.cols,
        output: cli.output,
    };

    match generate::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
