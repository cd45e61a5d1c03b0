//! Error types and context helpers for puzzle construction and terminal I/O

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// A caller-supplied parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Letter matrix is not a square grid
    ///
    /// Raised when the row count differs from a row's length or
    /// when rows have differing lengths.
    InvalidGrid {
        /// Description of what's wrong with the matrix
        reason: String,
    },

    /// Word list or other file could not be read
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Reading from or writing to the terminal failed
    Console {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input ended while a prompt was still waiting for an answer
    InputClosed {
        /// The prompt that went unanswered
        prompt: String,
    },
}

impl SolverError {
    /// Whether this error reports malformed caller input rather than an I/O failure
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. } | Self::InvalidGrid { .. })
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidGrid { reason } => {
                write!(f, "Invalid grid: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Console { operation, source } => {
                write!(f, "Terminal error during {operation}: {source}")
            }
            Self::InputClosed { prompt } => {
                write!(f, "Input closed while waiting for '{}'", prompt.trim_end())
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Console { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Attaches the file involved to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O result into a solver result naming the file and operation
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped as [`SolverError::FileSystem`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| SolverError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::Console {
            operation: "terminal i/o",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid grid error
pub fn invalid_grid(reason: &impl ToString) -> SolverError {
    SolverError::InvalidGrid {
        reason: reason.to_string(),
    }
}
