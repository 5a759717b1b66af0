//! On-disk fixtures shared by the aggregate tests.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use logscope_types::Level;

/// Raw log content for one date: one entry per taxonomy level, in taxonomy
/// order, with a stack-trace body on the error entry.
pub fn sample_content(date: &str) -> String {
    let mut raw = String::new();
    for (hour, level) in Level::TAXONOMY.iter().enumerate() {
        let token = level.as_str().to_uppercase();
        raw.push_str(&format!(
            "[{date} {hour:02}:00:00] production.{token}: {token} message on {date}\n"
        ));
        if *level == Level::Error {
            raw.push_str("Stack trace:\n#0 {main}\n");
        }
    }
    raw
}

/// Write `laravel-<date>.log` with [`sample_content`] into `dir`.
pub fn write_log(dir: &Path, date: &str) {
    let mut file = File::create(dir.join(format!("laravel-{date}.log"))).unwrap();
    file.write_all(sample_content(date).as_bytes()).unwrap();
}

/// A fixed-table translator for menu tests.
pub struct TestTranslator {
    locale: String,
}

impl TestTranslator {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }
}

impl logscope_types::Translate for TestTranslator {
    fn translate(&self, key: &str, locale: &str) -> Option<String> {
        match (locale, key) {
            ("fr", "all") => Some("Tous".to_string()),
            ("fr", "error") => Some("Erreur".to_string()),
            ("fr", "warning") => Some("Avertissement".to_string()),
            ("en", token) => Some(format!("{}{}", token[..1].to_uppercase(), &token[1..])),
            _ => None,
        }
    }

    fn current_locale(&self) -> &str {
        &self.locale
    }
}
