//! Error types for stream operations
//!
//! Invalid board sizes are not errors: every strategy answers them with
//! an empty solution set. The only failure paths are the streams the
//! driver reads the size from and writes the report to.

use std::fmt;

/// Main error type for driver stream operations
#[derive(Debug)]
pub enum SolverError {
    /// Reading the board size from the input stream failed
    Read {
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing report text to the output stream failed
    Write {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { source } => {
                write!(f, "Failed to read the board size: {source}")
            }
            Self::Write { source } => {
                write!(f, "Failed to write the report: {source}")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source } | Self::Write { source } => Some(source),
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;
