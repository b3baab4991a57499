//! Error types for smb-cli

use sembrar::error::SembrarError;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Dimension validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sembrar error
    #[error("Sembrar error: {0}")]
    Sembrar(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::ValidationFailed(_) => ExitCode::from(5),
            Self::Io(_) => ExitCode::from(7),
            Self::Sembrar(_) => ExitCode::from(1),
        }
    }
}

impl From<SembrarError> for CliError {
    fn from(e: SembrarError) -> Self {
        match e {
            SembrarError::InvalidDimension { .. } => Self::ValidationFailed(e.to_string()),
            SembrarError::Io(io) => Self::Io(io),
            other => Self::Sembrar(other.to_string()),
        }
    }
}
