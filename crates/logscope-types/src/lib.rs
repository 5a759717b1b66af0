//! Shared types for logscope
//!
//! This crate contains data structures used across multiple logscope crates.

use chrono::NaiveDateTime;
use serde::Serialize;

// ============================================================================
// Severity Taxonomy
// ============================================================================

/// Recognized log severity level, ordered most to least severe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl Level {
    /// The fixed taxonomy, in display order
    pub const TAXONOMY: [Level; 8] = [
        Level::Emergency,
        Level::Alert,
        Level::Critical,
        Level::Error,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Debug,
    ];

    /// Token for the synthetic "no filter, full count" pseudo-level.
    /// Never a parsed entry's level; appears only in aggregate outputs.
    pub const ALL_TOKEN: &'static str = "all";

    /// Parse a severity token, case-insensitively
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "emergency" => Some(Self::Emergency),
            "alert" => Some(Self::Alert),
            "critical" => Some(Self::Critical),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "notice" => Some(Self::Notice),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Canonical lowercase spelling of the token
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Key used to look up a localized display name
    pub fn translation_key(&self) -> &'static str {
        self.as_str()
    }

    /// Display order for aggregate outputs: `all` first, then the taxonomy
    pub fn display_order() -> Vec<&'static str> {
        let mut order = vec![Self::ALL_TOKEN];
        order.extend(Self::TAXONOMY.iter().map(Level::as_str));
        order
    }
}

/// A level filter token parsed from caller input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LevelFilter {
    /// No filter, every entry counts
    #[default]
    All,
    /// Only entries tagged with this severity
    Level(Level),
}

impl LevelFilter {
    /// Parse a filter token. Returns `None` for tokens outside the taxonomy
    /// that are not `all`; callers treat that as an empty match set.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case(Level::ALL_TOKEN) {
            return Some(Self::All);
        }
        Level::from_token(token).map(Self::Level)
    }

    /// Whether an entry-side level passes this filter
    pub fn accepts(&self, level: &EntryLevel) -> bool {
        match self {
            Self::All => true,
            Self::Level(wanted) => level.is(*wanted),
        }
    }
}

/// Severity tag carried by a parsed entry. Tokens outside the taxonomy are
/// kept verbatim so the entry still counts toward totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryLevel {
    Known(Level),
    Other(String),
}

impl EntryLevel {
    /// Normalize a raw token against the taxonomy, case-insensitively
    pub fn from_token(raw: &str) -> Self {
        match Level::from_token(raw) {
            Some(level) => Self::Known(level),
            None => Self::Other(raw.to_string()),
        }
    }

    /// The token, canonical for recognized levels and raw otherwise
    pub fn token(&self) -> &str {
        match self {
            Self::Known(level) => level.as_str(),
            Self::Other(raw) => raw,
        }
    }

    /// Whether this tag is the given recognized severity
    pub fn is(&self, level: Level) -> bool {
        matches!(self, Self::Known(own) if *own == level)
    }
}

// ============================================================================
// Log Entries
// ============================================================================

/// A single parsed log record
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LogEntry {
    /// Date key of the owning log file (e.g. `2015-01-01`)
    pub date: String,

    /// Detected severity
    pub level: EntryLevel,

    /// The line that opened this record
    pub header: String,

    /// Lines following the header, verbatim (stack traces, context dumps)
    pub body: Vec<String>,

    /// Timestamp parsed from the header bracket (if well formed)
    pub timestamp: Option<NaiveDateTime>,
}

impl LogEntry {
    /// Create an entry with an empty body
    pub fn new(date: impl Into<String>, level: EntryLevel, header: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            level,
            header: header.into(),
            body: Vec::new(),
            timestamp: None,
        }
    }

    /// Whether any body lines followed the header
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

// ============================================================================
// Derived Aggregates
// ============================================================================

/// Entry count for one level token
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LevelCount {
    pub level: String,
    pub count: usize,
}

/// Per-level counts for one log, in display order with `all` first
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Stats {
    counts: Vec<LevelCount>,
}

impl Stats {
    pub fn new(counts: Vec<LevelCount>) -> Self {
        Self { counts }
    }

    /// Count for a level token, `None` if the token is absent
    pub fn get(&self, token: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|c| c.level == token)
            .map(|c| c.count)
    }

    /// The synthetic `all` total
    pub fn all(&self) -> usize {
        self.get(Level::ALL_TOKEN).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelCount> {
        self.counts.iter()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// One per-level node of a tree or menu: a display name plus a count
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub level: String,
    pub name: String,
    pub count: usize,
}

// ============================================================================
// Collaborators
// ============================================================================

/// Display-name lookup used when building localized menus.
///
/// Implemented outside the core (the CLI ships a TOML-backed table); the
/// aggregation layer only ever calls through this trait.
pub trait Translate {
    /// Localized display name for a level token, `None` when the key is
    /// unknown to the given locale
    fn translate(&self, key: &str, locale: &str) -> Option<String>;

    /// The locale menus are currently built for
    fn current_locale(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_token_case_insensitive() {
        assert_eq!(Level::from_token("ERROR"), Some(Level::Error));
        assert_eq!(Level::from_token("error"), Some(Level::Error));
        assert_eq!(Level::from_token("Warning"), Some(Level::Warning));
        assert_eq!(Level::from_token("verbose"), None);
    }

    #[test]
    fn test_taxonomy_order() {
        let tokens: Vec<_> = Level::TAXONOMY.iter().map(Level::as_str).collect();
        assert_eq!(
            tokens,
            vec![
                "emergency",
                "alert",
                "critical",
                "error",
                "warning",
                "notice",
                "info",
                "debug"
            ]
        );
    }

    #[test]
    fn test_display_order_has_all_first() {
        let order = Level::display_order();
        assert_eq!(order.len(), 9);
        assert_eq!(order[0], "all");
        assert_eq!(order[1], "emergency");
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(LevelFilter::parse("all"), Some(LevelFilter::All));
        assert_eq!(LevelFilter::parse("ALL"), Some(LevelFilter::All));
        assert_eq!(
            LevelFilter::parse("debug"),
            Some(LevelFilter::Level(Level::Debug))
        );
        assert_eq!(LevelFilter::parse("verbose"), None);
    }

    #[test]
    fn test_entry_level_keeps_unrecognized_token() {
        let level = EntryLevel::from_token("VERBOSE");
        assert_eq!(level, EntryLevel::Other("VERBOSE".to_string()));
        assert_eq!(level.token(), "VERBOSE");
        assert!(!level.is(Level::Error));
    }

    #[test]
    fn test_entry_level_normalizes_recognized_token() {
        let level = EntryLevel::from_token("ERROR");
        assert_eq!(level, EntryLevel::Known(Level::Error));
        assert_eq!(level.token(), "error");
        assert!(level.is(Level::Error));
    }

    #[test]
    fn test_filter_accepts() {
        let error = EntryLevel::from_token("error");
        let other = EntryLevel::from_token("verbose");

        assert!(LevelFilter::All.accepts(&error));
        assert!(LevelFilter::All.accepts(&other));
        assert!(LevelFilter::Level(Level::Error).accepts(&error));
        assert!(!LevelFilter::Level(Level::Error).accepts(&other));
    }

    #[test]
    fn test_stats_lookup() {
        let stats = Stats::new(vec![
            LevelCount {
                level: "all".to_string(),
                count: 3,
            },
            LevelCount {
                level: "error".to_string(),
                count: 3,
            },
        ]);

        assert_eq!(stats.all(), 3);
        assert_eq!(stats.get("error"), Some(3));
        assert_eq!(stats.get("debug"), None);
    }
}
