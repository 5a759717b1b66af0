use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{FileError, Result};
use crate::pattern::FilePattern;

/// Scans a storage directory, non-recursively, for log files whose names
/// match a [`FilePattern`].
#[derive(Clone, Debug)]
pub struct FileDiscovery {
    root: PathBuf,
    pattern: FilePattern,
}

impl FileDiscovery {
    /// Create a discovery rooted at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::DirectoryNotFound`] if `path` does not exist or
    /// is not a directory.
    pub fn new(path: impl Into<PathBuf>, pattern: FilePattern) -> Result<Self> {
        let mut discovery = Self {
            root: PathBuf::new(),
            pattern,
        };
        discovery.set_path(path)?;
        Ok(discovery)
    }

    /// Record a new root directory. Does not scan; the next
    /// [`list_files`](Self::list_files) call does.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        if !path.is_dir() {
            return Err(FileError::DirectoryNotFound(path));
        }
        self.root = path;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn pattern(&self) -> &FilePattern {
        &self.pattern
    }

    pub fn pattern_mut(&mut self) -> &mut FilePattern {
        &mut self.pattern
    }

    /// List matching files keyed by extracted date, most recent date first.
    ///
    /// Names that do not match the full pattern are skipped. Two filenames
    /// mapping to the same date collapse to the one discovered last, with a
    /// warning.
    pub fn list_files(&self) -> Result<Vec<(String, PathBuf)>> {
        // Root can vanish between set_path and the scan
        if !self.root.is_dir() {
            return Err(FileError::DirectoryNotFound(self.root.clone()));
        }

        // read_dir order is platform dependent; sort names so duplicate
        // resolution is deterministic
        let mut names: Vec<(String, PathBuf)> = Vec::new();
        for dir_entry in fs::read_dir(&self.root)? {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type()?.is_file() {
                continue;
            }
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            names.push((name, dir_entry.path()));
        }
        names.sort();

        let mut by_date: BTreeMap<String, PathBuf> = BTreeMap::new();
        for (name, path) in names {
            let date = match self.pattern.extract_date(&name) {
                Ok(date) => date,
                Err(FileError::NoDateFound(_)) => continue,
                Err(e) => return Err(e),
            };
            if let Some(previous) = by_date.insert(date.clone(), path) {
                warn!(
                    date = %date,
                    dropped = %previous.display(),
                    "duplicate date in scan, keeping the last discovered file"
                );
            }
        }

        debug!(
            root = %self.root.display(),
            files = by_date.len(),
            "scanned log storage directory"
        );

        Ok(by_date.into_iter().rev().collect())
    }
}
