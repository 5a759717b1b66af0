use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use logscope_logs::Translate;

/// Built-in locale tables. A `--locales` file replaces these wholesale.
const BUILTIN_LOCALES: &str = r#"
[en]
all = "All"
emergency = "Emergency"
alert = "Alert"
critical = "Critical"
error = "Error"
warning = "Warning"
notice = "Notice"
info = "Info"
debug = "Debug"

[fr]
all = "Tous"
emergency = "Urgence"
alert = "Alerte"
critical = "Critique"
error = "Erreur"
warning = "Avertissement"
notice = "Avis"
info = "Info"
debug = "Débogage"
"#;

/// Level display names keyed by locale, loaded from TOML tables of the
/// shape `[locale]` / `token = "Name"`.
pub struct LocaleTable {
    tables: HashMap<String, HashMap<String, String>>,
    locale: String,
}

impl LocaleTable {
    /// The built-in English and French tables.
    pub fn builtin(locale: &str) -> Self {
        // The embedded table is known-good TOML
        let tables = toml::from_str(BUILTIN_LOCALES).unwrap_or_default();
        Self {
            tables,
            locale: locale.to_string(),
        }
    }

    /// Load locale tables from a TOML file.
    pub fn from_file(path: &Path, locale: &str) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading locale file {}", path.display()))?;
        let tables = toml::from_str(&raw)
            .with_context(|| format!("parsing locale file {}", path.display()))?;
        Ok(Self {
            tables,
            locale: locale.to_string(),
        })
    }
}

impl Translate for LocaleTable {
    fn translate(&self, key: &str, locale: &str) -> Option<String> {
        self.tables.get(locale)?.get(key).cloned()
    }

    fn current_locale(&self) -> &str {
        &self.locale
    }
}
