use regex::Regex;

use crate::error::{FileError, Result};

/// Default filename prefix component.
pub const PATTERN_PREFIX: &str = "laravel-";

/// Default date component, a `YYYY-MM-DD` regex.
pub const PATTERN_DATE: &str = "[0-9]{4}-[0-9]{2}-[0-9]{2}";

/// Default filename extension component.
pub const PATTERN_EXTENSION: &str = ".log";

/// Three-part filename pattern (prefix, date regex, extension) used to
/// discover log files and extract their date keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePattern {
    prefix: String,
    date: String,
    extension: String,
}

impl Default for FilePattern {
    fn default() -> Self {
        Self::new(PATTERN_PREFIX, PATTERN_DATE, PATTERN_EXTENSION)
    }
}

impl FilePattern {
    pub fn new(
        prefix: impl Into<String>,
        date: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            date: date.into(),
            extension: extension.into(),
        }
    }

    /// Update any subset of the components; a `None` component is restored
    /// to its default. Returns `&mut Self` for chaining.
    pub fn set(
        &mut self,
        prefix: Option<&str>,
        date: Option<&str>,
        extension: Option<&str>,
    ) -> &mut Self {
        self.prefix = prefix.unwrap_or(PATTERN_PREFIX).to_string();
        self.date = date.unwrap_or(PATTERN_DATE).to_string();
        self.extension = extension.unwrap_or(PATTERN_EXTENSION).to_string();
        self
    }

    /// The full pattern string: the verbatim concatenation of the three
    /// components, with no normalization. This string is also the matching
    /// regular expression.
    pub fn pattern(&self) -> String {
        format!("{}{}{}", self.prefix, self.date, self.extension)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether a filename matches the full pattern.
    pub fn matches(&self, filename: &str) -> Result<bool> {
        Ok(self.compile()?.is_match(filename))
    }

    /// Extract the date key from a filename: the substring matched by the
    /// date component. Fails with [`FileError::NoDateFound`] when the
    /// filename does not match the full pattern.
    pub fn extract_date(&self, filename: &str) -> Result<String> {
        let caps = self
            .compile()?
            .captures(filename)
            .ok_or_else(|| FileError::NoDateFound(filename.to_string()))?;

        Ok(caps
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default())
    }

    /// The full pattern anchored to a whole filename, with the date
    /// component in the first capture group.
    fn compile(&self) -> Result<Regex> {
        Regex::new(&format!(
            "^{}({}){}$",
            self.prefix, self.date, self.extension
        ))
        .map_err(Into::into)
    }
}
