//! Bundled translation tables.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use regex::{Captures, Regex};
use serde_json::{Map, Value};

use super::lookup_path;
use crate::error::Result;
use crate::model::Language;

/// Named values substituted into `{{name}}` placeholders.
pub type TranslationParams<'a> = &'a [(&'a str, &'a str)];

fn bundled_source(lang: Language) -> &'static str {
    match lang {
        Language::En => include_str!("../../locales/en.json"),
        Language::Es => include_str!("../../locales/es.json"),
        Language::Fr => include_str!("../../locales/fr.json"),
        Language::De => include_str!("../../locales/de.json"),
        Language::Pt => include_str!("../../locales/pt.json"),
    }
}

type Tables = HashMap<Language, Value>;

fn bundled_tables() -> &'static Arc<Tables> {
    static TABLES: OnceLock<Arc<Tables>> = OnceLock::new();
    TABLES.get_or_init(|| {
        let tables = Language::ALL
            .iter()
            .map(|&lang| {
                let table = serde_json::from_str(bundled_source(lang)).unwrap_or_else(|e| {
                    log::error!("Bundled {} translations are invalid: {}", lang, e);
                    Value::Object(Map::new())
                });
                (lang, table)
            })
            .collect();
        Arc::new(tables)
    })
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap())
}

/// Static translation lookup for the current language.
///
/// Keys resolve against the current language, then the default language,
/// then fall back to the key itself. Clones share the tables until one of
/// them loads overrides.
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    tables: Arc<Tables>,
}

impl Translator {
    /// Create a translator using the bundled tables.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            tables: Arc::clone(bundled_tables()),
        }
    }

    /// Create a translator from explicit tables (one JSON object per language).
    pub fn from_tables(language: Language, tables: HashMap<Language, Value>) -> Self {
        Self {
            language,
            tables: Arc::new(tables),
        }
    }

    /// Check if this translator shares its tables with `other`.
    pub fn shares_tables(&self, other: &Translator) -> bool {
        Arc::ptr_eq(&self.tables, &other.tables)
    }

    /// Merge `<dir>/<lang>.json` files over the bundled tables.
    ///
    /// Missing files are skipped; unreadable or malformed ones are logged
    /// and skipped.
    pub fn with_overrides(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        for lang in Language::ALL {
            let path = dir.join(format!("{}.json", lang.code()));
            if !path.is_file() {
                continue;
            }
            match load_table(&path) {
                Ok(overrides) => {
                    let table = Arc::make_mut(&mut self.tables)
                        .entry(lang)
                        .or_insert_with(|| Value::Object(Map::new()));
                    merge(table, overrides);
                    log::debug!("Loaded {} translation overrides from {}", lang, path.display());
                }
                Err(e) => {
                    log::warn!("Ignoring translation overrides {}: {}", path.display(), e);
                }
            }
        }
        self
    }

    /// Current language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the current language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Check if `key` has a translation in the current or default language.
    pub fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Translate a dotted key. Untranslated keys return the key itself.
    pub fn t(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(text) => text.to_string(),
            None => {
                log::trace!("Missing translation for {:?} ({})", key, self.language);
                key.to_string()
            }
        }
    }

    /// Translate a dotted key and fill `{{name}}` placeholders.
    ///
    /// Placeholders without a matching parameter are left as written.
    pub fn t_with(&self, key: &str, params: TranslationParams<'_>) -> String {
        let text = self.t(key);
        placeholder_regex()
            .replace_all(&text, |caps: &Captures| {
                let name = &caps[1];
                params
                    .iter()
                    .find(|(k, _)| *k == name)
                    .map(|(_, v)| v.to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// Get the object at a dotted path, e.g. a page's static content.
    pub fn subtree(&self, path: &str) -> Option<&Map<String, Value>> {
        self.languages()
            .find_map(|lang| object_at(self.tables.get(&lang)?, path))
    }

    /// Get the object at a dotted path in one language's table only.
    pub fn subtree_in(&self, language: Language, path: &str) -> Option<&Map<String, Value>> {
        object_at(self.tables.get(&language)?, path)
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.languages()
            .find_map(|lang| lookup_path(self.tables.get(&lang), key))
    }

    /// Current language, then the default one if different.
    fn languages(&self) -> impl Iterator<Item = Language> {
        let current = self.language;
        let default = Language::default();
        std::iter::once(current).chain((current != default).then_some(default))
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

fn load_table(path: &Path) -> Result<Value> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn object_at<'a>(root: &'a Value, path: &str) -> Option<&'a Map<String, Value>> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    current.as_object()
}

/// Deep-merge `overrides` into `base`; objects merge, everything else replaces.
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}
