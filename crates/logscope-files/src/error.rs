//! Error types for file discovery.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating log files on disk.
#[derive(Debug, Error)]
pub enum FileError {
    /// The configured storage path does not exist or is not a directory.
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A filename did not match the full pattern when extracting a date.
    #[error("no date found in filename: {0}")]
    NoDateFound(String),

    /// The filename pattern does not compile as a regular expression.
    #[error("invalid filename pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// An I/O error occurred while scanning the storage directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, FileError>;
