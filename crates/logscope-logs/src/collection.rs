use std::path::PathBuf;

use logscope_types::{LogEntry, MenuItem, Stats, Translate};

use crate::error::{LogError, Result};
use crate::log::Log;

/// Date-keyed collection of [`Log`] aggregates, most recent date first.
#[derive(Debug, Default)]
pub struct LogCollection {
    logs: Vec<Log>,
}

impl LogCollection {
    /// Wrap discovery output into logs. Pairs are expected deduplicated and
    /// ordered most recent first, which is what
    /// [`FileDiscovery::list_files`](logscope_files::FileDiscovery::list_files)
    /// produces.
    pub fn from_files(files: Vec<(String, PathBuf)>) -> Self {
        Self {
            logs: files
                .into_iter()
                .map(|(date, path)| Log::new(date, path))
                .collect(),
        }
    }

    /// The log for a date.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LogNotFound`] carrying the requested date when
    /// the date is absent.
    pub fn get(&self, date: &str) -> Result<&Log> {
        self.logs
            .iter()
            .find(|log| log.date() == date)
            .ok_or_else(|| LogError::LogNotFound(date.to_string()))
    }

    /// Entries for a date, filtered by level token.
    pub fn entries(&self, date: &str, filter: &str) -> Result<Vec<LogEntry>> {
        self.get(date)?.entries(filter)
    }

    /// Date keys, most recent first.
    pub fn dates(&self) -> Vec<String> {
        self.logs.iter().map(|log| log.date().to_string()).collect()
    }

    /// Each log's per-level counts, in `dates()` order.
    pub fn stats(&self) -> Result<Vec<(String, Stats)>> {
        self.logs
            .iter()
            .map(|log| Ok((log.date().to_string(), log.stats()?)))
            .collect()
    }

    /// Each log's level tree, in `dates()` order.
    pub fn tree(&self) -> Result<Vec<(String, Vec<MenuItem>)>> {
        self.logs
            .iter()
            .map(|log| Ok((log.date().to_string(), log.tree()?)))
            .collect()
    }

    /// Each log's localized level menu, in `dates()` order.
    pub fn menu(&self, translator: &dyn Translate) -> Result<Vec<(String, Vec<MenuItem>)>> {
        self.logs
            .iter()
            .map(|log| Ok((log.date().to_string(), log.menu(translator)?)))
            .collect()
    }

    /// Sum of per-log counts for a level filter token.
    pub fn total(&self, filter: &str) -> Result<usize> {
        let mut total = 0;
        for log in &self.logs {
            total += log.count(filter)?;
        }
        Ok(total)
    }

    /// Number of dates in the collection.
    pub fn count(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Log> {
        self.logs.iter()
    }
}
