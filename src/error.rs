//! Error types for Sembrar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Sembrar operations.
///
/// # Examples
///
/// ```
/// use sembrar::error::SembrarError;
///
/// let err = SembrarError::invalid_dimension("rows", 0);
/// assert!(err.to_string().contains("rows"));
/// ```
#[derive(Debug)]
pub enum SembrarError {
    /// A dataset dimension is outside its allowed range.
    InvalidDimension {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// I/O error (unwritable path, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for SembrarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SembrarError::InvalidDimension {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid dimension: {param} = {value}, expected {constraint}"
                )
            }
            SembrarError::Io(e) => write!(f, "I/O error: {e}"),
            SembrarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SembrarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SembrarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SembrarError {
    fn from(err: std::io::Error) -> Self {
        SembrarError::Io(err)
    }
}

impl From<&str> for SembrarError {
    fn from(msg: &str) -> Self {
        SembrarError::Other(msg.to_string())
    }
}

impl From<String> for SembrarError {
    fn from(msg: String) -> Self {
        SembrarError::Other(msg)
    }
}

impl SembrarError {
    /// Create an invalid dimension error for a non-positive parameter
    #[must_use]
    pub fn invalid_dimension(param: &str, value: usize) -> Self {
        Self::InvalidDimension {
            param: param.to_string(),
            value: value.to_string(),
            constraint: "> 0".to_string(),
        }
    }
}

/// Result type alias for Sembrar operations.
pub type Result<T> = std::result::Result<T, SembrarError>;
