//! Error types for log aggregation.

use std::path::PathBuf;

use thiserror::Error;

use logscope_files::FileError;

/// Errors that can occur while building or querying log aggregates.
#[derive(Debug, Error)]
pub enum LogError {
    /// No log exists for the requested date.
    #[error("log not found for date: {0}")]
    LogNotFound(String),

    /// The log file exists but could not be read.
    #[error("unreadable log file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File discovery failed.
    #[error(transparent)]
    Discovery(#[from] FileError),
}

/// Result type alias for log operations.
pub type Result<T> = std::result::Result<T, LogError>;
