//! Parsing options and configuration.

use super::keys;
use crate::model::DocumentType;

/// Default key holding the page title.
pub const DEFAULT_TITLE_KEY: &str = "title";

/// Options for parsing localized content into sections.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Recognized top-level keys in priority order
    pub keys: Vec<String>,

    /// Key holding the page title (never emitted as a section when it is a string)
    pub title_key: String,
}

impl ParseOptions {
    /// Create new parse options with the generic key list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with the built-in key list for a document type.
    pub fn for_document(doc_type: &DocumentType) -> Self {
        Self::default().with_keys(keys::for_document_type(doc_type.as_str()).iter().copied())
    }

    /// Replace the recognized key list.
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the title key.
    pub fn with_title_key(mut self, key: impl Into<String>) -> Self {
        self.title_key = key.into();
        self
    }

    /// Check if `key` is the designated title key.
    pub fn is_title_key(&self, key: &str) -> bool {
        self.title_key == key
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            keys: keys::GENERIC.iter().map(|k| k.to_string()).collect(),
            title_key: DEFAULT_TITLE_KEY.to_string(),
        }
    }
}
