use std::fs;
use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;
use tracing::debug;

use logscope_types::{Level, LevelCount, LevelFilter, LogEntry, MenuItem, Stats, Translate};

use crate::error::{LogError, Result};
use crate::parser::LogParser;

/// One date's log file, parsed on first access and cached for the lifetime
/// of the owning collection.
#[derive(Debug)]
pub struct Log {
    date: String,
    path: PathBuf,
    entries: OnceCell<Vec<LogEntry>>,
}

impl Log {
    pub fn new(date: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            date: date.into(),
            path: path.into(),
            entries: OnceCell::new(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parsed entries, reading the file on first call only. A second call
    /// returns the cached sequence without touching the filesystem.
    fn parsed(&self) -> Result<&[LogEntry]> {
        self.entries
            .get_or_try_init(|| {
                let raw = fs::read_to_string(&self.path).map_err(|source| LogError::Unreadable {
                    path: self.path.clone(),
                    source,
                })?;
                let entries = LogParser::parse(&raw, &self.date);
                debug!(date = %self.date, entries = entries.len(), "parsed log file");
                Ok(entries)
            })
            .map(Vec::as_slice)
    }

    /// Entries matching a level filter token, in file order.
    ///
    /// `"all"` returns every entry; a token outside the taxonomy returns an
    /// empty sequence rather than failing.
    pub fn entries(&self, filter: &str) -> Result<Vec<LogEntry>> {
        let parsed = self.parsed()?;
        Ok(match LevelFilter::parse(filter) {
            Some(filter) => parsed
                .iter()
                .filter(|e| filter.accepts(&e.level))
                .cloned()
                .collect(),
            None => Vec::new(),
        })
    }

    /// Number of entries matching a level filter token.
    pub fn count(&self, filter: &str) -> Result<usize> {
        let parsed = self.parsed()?;
        Ok(match LevelFilter::parse(filter) {
            Some(LevelFilter::All) => parsed.len(),
            Some(filter) => parsed.iter().filter(|e| filter.accepts(&e.level)).count(),
            None => 0,
        })
    }

    /// Per-level counts: the synthetic `all` total first, then every
    /// taxonomy level in order.
    pub fn stats(&self) -> Result<Stats> {
        let parsed = self.parsed()?;

        let mut counts = Vec::with_capacity(Level::TAXONOMY.len() + 1);
        counts.push(LevelCount {
            level: Level::ALL_TOKEN.to_string(),
            count: parsed.len(),
        });
        for level in Level::TAXONOMY {
            counts.push(LevelCount {
                level: level.as_str().to_string(),
                count: parsed.iter().filter(|e| e.level.is(level)).count(),
            });
        }

        Ok(Stats::new(counts))
    }

    /// Stats enriched with display names equal to the level tokens.
    pub fn tree(&self) -> Result<Vec<MenuItem>> {
        Ok(self
            .stats()?
            .iter()
            .map(|c| MenuItem {
                level: c.level.clone(),
                name: c.level.clone(),
                count: c.count,
            })
            .collect())
    }

    /// Stats enriched with localized display names for the translator's
    /// current locale. Unknown keys fall back to the raw level token.
    pub fn menu(&self, translator: &dyn Translate) -> Result<Vec<MenuItem>> {
        let locale = translator.current_locale().to_string();
        Ok(self
            .stats()?
            .iter()
            .map(|c| MenuItem {
                level: c.level.clone(),
                name: translator
                    .translate(&c.level, &locale)
                    .unwrap_or_else(|| c.level.clone()),
                count: c.count,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{TestTranslator, write_log};

    use tempfile::{TempDir, tempdir};

    fn fixture_log(date: &str) -> (TempDir, Log) {
        let dir = tempdir().unwrap();
        write_log(dir.path(), date);
        let path = dir.path().join(format!("laravel-{date}.log"));
        (dir, Log::new(date, path))
    }

    #[test]
    fn test_entries_all() {
        let (_dir, log) = fixture_log("2015-01-01");

        let entries = log.entries("all").unwrap();
        assert_eq!(entries.len(), 8);
        assert!(entries.iter().all(|e| e.date == "2015-01-01"));
    }

    #[test]
    fn test_entries_by_level() {
        let (_dir, log) = fixture_log("2015-01-01");

        for level in Level::TAXONOMY {
            let entries = log.entries(level.as_str()).unwrap();
            assert_eq!(entries.len(), 1, "one entry per level in the fixture");
            assert!(entries[0].level.is(level));
        }
    }

    #[test]
    fn test_entries_unknown_filter_is_empty() {
        let (_dir, log) = fixture_log("2015-01-01");
        assert!(log.entries("verbose").unwrap().is_empty());
        assert_eq!(log.count("verbose").unwrap(), 0);
    }

    #[test]
    fn test_error_entry_keeps_stack_trace_body() {
        let (_dir, log) = fixture_log("2015-01-01");

        let entries = log.entries("error").unwrap();
        assert_eq!(entries[0].body, vec!["Stack trace:", "#0 {main}"]);
    }

    #[test]
    fn test_stats_all_equals_sum_of_levels() {
        let (_dir, log) = fixture_log("2015-01-01");

        let stats = log.stats().unwrap();
        assert_eq!(stats.len(), 9);

        let sum: usize = Level::TAXONOMY
            .iter()
            .map(|l| stats.get(l.as_str()).unwrap())
            .sum();
        assert_eq!(stats.all(), sum);
        assert_eq!(stats.all(), 8);
    }

    #[test]
    fn test_tree_names_are_level_tokens() {
        let (_dir, log) = fixture_log("2015-01-01");

        let tree = log.tree().unwrap();
        assert_eq!(tree.len(), 9);
        assert_eq!(tree[0].level, "all");
        assert_eq!(tree[0].count, 8);
        assert!(tree.iter().all(|item| item.name == item.level));
        assert!(tree.iter().skip(1).all(|item| item.count == 1));
    }

    #[test]
    fn test_menu_translates_names_and_keeps_counts() {
        let (_dir, log) = fixture_log("2015-01-01");
        let translator = TestTranslator::new("fr");

        let tree = log.tree().unwrap();
        let menu = log.menu(&translator).unwrap();

        let error = menu.iter().find(|item| item.level == "error").unwrap();
        assert_eq!(error.name, "Erreur");

        for (tree_item, menu_item) in tree.iter().zip(&menu) {
            assert_eq!(tree_item.level, menu_item.level);
            assert_eq!(tree_item.count, menu_item.count);
        }
    }

    #[test]
    fn test_menu_falls_back_to_token_for_unknown_key() {
        let (_dir, log) = fixture_log("2015-01-01");
        // fr table only carries all/error/warning
        let translator = TestTranslator::new("fr");

        let menu = log.menu(&translator).unwrap();
        let debug = menu.iter().find(|item| item.level == "debug").unwrap();
        assert_eq!(debug.name, "debug");
    }

    #[test]
    fn test_parse_is_memoized() {
        let (dir, log) = fixture_log("2015-01-01");
        assert_eq!(log.count("all").unwrap(), 8);

        // A second query must not re-read the file
        std::fs::remove_file(dir.path().join("laravel-2015-01-01.log")).unwrap();
        assert_eq!(log.count("all").unwrap(), 8);
        assert_eq!(log.entries("error").unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempdir().unwrap();
        let log = Log::new("2015-01-01", dir.path().join("laravel-2015-01-01.log"));

        let err = log.entries("all").unwrap_err();
        assert!(matches!(err, LogError::Unreadable { .. }));
    }

    #[test]
    fn test_empty_file_parses_to_zero_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("laravel-2015-01-01.log");
        std::fs::write(&path, "").unwrap();

        let log = Log::new("2015-01-01", path);
        assert_eq!(log.count("all").unwrap(), 0);
        assert_eq!(log.stats().unwrap().all(), 0);
    }
}
