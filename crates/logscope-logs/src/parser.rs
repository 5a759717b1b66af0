use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use logscope_types::{EntryLevel, LogEntry};

/// The line that opens a log record: a bracketed timestamp followed by a
/// dotted `channel.LEVEL` token and a colon, e.g.
/// `[2015-01-01 00:00:00] production.ERROR: something broke`.
static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})(?:\.\d+)?\]\s+[\w-]+\.(\w+):")
        .expect("header marker regex is valid")
});

/// Log parser for segmenting raw file contents into records
pub struct LogParser;

impl LogParser {
    /// Parse raw file contents into an ordered sequence of entries.
    ///
    /// A header line opens a new entry; every following non-header line is
    /// appended verbatim to the open entry's body. Lines before the first
    /// header have no entry to attach to and are discarded. Empty input
    /// yields an empty sequence.
    pub fn parse(raw: &str, date: &str) -> Vec<LogEntry> {
        let mut entries = Vec::new();

        for line in raw.lines() {
            if let Some((timestamp, level)) = Self::match_header(line) {
                let mut entry = LogEntry::new(date, level, line);
                entry.timestamp = timestamp;
                entries.push(entry);
            } else if let Some(open) = entries.last_mut() {
                open.body.push(line.to_string());
            }
        }

        entries
    }

    /// Check a line against the header marker, returning the bracketed
    /// timestamp and the level token on a match. Level tokens outside the
    /// taxonomy are kept verbatim; the entry is still produced.
    fn match_header(line: &str) -> Option<(Option<NaiveDateTime>, EntryLevel)> {
        let caps = HEADER_RE.captures(line)?;
        let timestamp = caps
            .get(1)
            .and_then(|m| NaiveDateTime::parse_from_str(m.as_str(), "%Y-%m-%d %H:%M:%S").ok());
        let level = EntryLevel::from_token(caps.get(2)?.as_str());
        Some((timestamp, level))
    }
}
