//! File discovery for logscope
//!
//! This crate locates dated log files under a storage directory by
//! filename pattern and extracts their date keys.

mod discovery;
mod error;
mod pattern;

pub use discovery::FileDiscovery;
pub use error::{FileError, Result};
pub use pattern::{FilePattern, PATTERN_DATE, PATTERN_EXTENSION, PATTERN_PREFIX};
