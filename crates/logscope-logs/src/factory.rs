use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use logscope_files::{FileDiscovery, FilePattern};
use logscope_types::{LogEntry, MenuItem, Stats, Translate};

use crate::collection::LogCollection;
use crate::error::Result;
use crate::log::Log;

/// Default number of dates per pagination page.
pub const DEFAULT_PER_PAGE: usize = 30;

/// Facade over discovery, parsing and aggregation.
///
/// The log collection is built lazily on the first query and reused until
/// [`set_path`](Self::set_path) or [`set_pattern`](Self::set_pattern) drops
/// it. Not meant to be shared across threads; give each logical request its
/// own viewer.
pub struct LogViewer {
    discovery: FileDiscovery,
    collection: Option<LogCollection>,
}

impl LogViewer {
    /// Create a viewer over `path` with the default filename pattern.
    ///
    /// # Errors
    ///
    /// Fails if `path` does not exist or is not a directory.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_pattern(path, FilePattern::default())
    }

    /// Create a viewer over `path` with a custom filename pattern.
    pub fn with_pattern(path: impl Into<PathBuf>, pattern: FilePattern) -> Result<Self> {
        Ok(Self {
            discovery: FileDiscovery::new(path, pattern)?,
            collection: None,
        })
    }

    /// Point at a different storage directory, dropping the cached
    /// collection.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.discovery.set_path(path)?;
        self.collection = None;
        Ok(())
    }

    /// Replace pattern components (`None` restores a component's default),
    /// dropping the cached collection.
    pub fn set_pattern(&mut self, prefix: Option<&str>, date: Option<&str>, extension: Option<&str>) {
        self.discovery.pattern_mut().set(prefix, date, extension);
        self.collection = None;
    }

    /// The full filename pattern string.
    pub fn pattern(&self) -> String {
        self.discovery.pattern().pattern()
    }

    /// The configured storage directory.
    pub fn path(&self) -> &Path {
        self.discovery.path()
    }

    /// The log collection, scanned and built on first use after any
    /// reconfiguration.
    pub fn all(&mut self) -> Result<&LogCollection> {
        if self.collection.is_none() {
            let files = self.discovery.list_files()?;
            debug!(files = files.len(), "building log collection");
            self.collection = Some(LogCollection::from_files(files));
        }
        // Filled just above; the default arm is never taken
        Ok(self.collection.get_or_insert_with(LogCollection::default))
    }

    /// The log for a date.
    pub fn get(&mut self, date: &str) -> Result<&Log> {
        self.all()?.get(date)
    }

    /// Entries for a date, filtered by level token.
    pub fn entries(&mut self, date: &str, filter: &str) -> Result<Vec<LogEntry>> {
        self.all()?.entries(date, filter)
    }

    /// Date keys, most recent first.
    pub fn dates(&mut self) -> Result<Vec<String>> {
        Ok(self.all()?.dates())
    }

    /// Number of discovered dates.
    pub fn count(&mut self) -> Result<usize> {
        Ok(self.all()?.count())
    }

    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.all()?.is_empty())
    }

    /// Sum of entry counts across every date for a level filter token.
    pub fn total(&mut self, filter: &str) -> Result<usize> {
        self.all()?.total(filter)
    }

    /// Per-date, per-level counts.
    pub fn stats(&mut self) -> Result<Vec<(String, Stats)>> {
        self.all()?.stats()
    }

    /// Per-date level trees with raw token names.
    pub fn tree(&mut self) -> Result<Vec<(String, Vec<MenuItem>)>> {
        self.all()?.tree()
    }

    /// Per-date level menus with localized names.
    pub fn menu(&mut self, translator: &dyn Translate) -> Result<Vec<(String, Vec<MenuItem>)>> {
        self.all()?.menu(translator)
    }

    /// Slice the date listing into one page.
    pub fn paginate(&mut self, per_page: usize, page: Option<usize>) -> Result<Page> {
        let dates = self.dates()?;
        let per_page = per_page.max(1);
        let total = dates.len();
        let current_page = page.unwrap_or(1).max(1);

        let items = dates
            .into_iter()
            .skip((current_page - 1) * per_page)
            .take(per_page)
            .collect();

        Ok(Page {
            items,
            total,
            per_page,
            last_page: total.div_ceil(per_page),
            current_page,
        })
    }
}

/// One slice of the date listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page {
    /// The dates on this page, most recent first
    pub items: Vec<String>,
    /// Total number of dates across all pages
    pub total: usize,
    pub per_page: usize,
    pub last_page: usize,
    pub current_page: usize,
}
