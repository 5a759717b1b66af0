//! Log parsing and aggregation for logscope
//!
//! This crate turns discovered log files into parsed, countable,
//! filterable in-memory aggregates behind the [`LogViewer`] facade.

mod collection;
mod error;
mod factory;
mod log;
mod parser;

#[cfg(test)]
mod fixtures;

pub use collection::LogCollection;
pub use error::{LogError, Result};
pub use factory::{DEFAULT_PER_PAGE, LogViewer, Page};
pub use log::Log;
pub use parser::LogParser;

// Re-export types used in our public API
pub use logscope_files::{FileDiscovery, FilePattern};
pub use logscope_types::{
    EntryLevel, Level, LevelCount, LevelFilter, LogEntry, MenuItem, Stats, Translate,
};
