//! Document-level types.

use super::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a static page's content document (e.g. `cookie-policy`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentType(String);

impl DocumentType {
    /// Cookie policy page.
    pub const COOKIE_POLICY: &'static str = "cookie-policy";
    /// Privacy policy page.
    pub const PRIVACY_POLICY: &'static str = "privacy-policy";
    /// Terms of service page.
    pub const TERMS: &'static str = "terms";
    /// Frequently asked questions page.
    pub const FAQ: &'static str = "faq";

    /// Create a document type from an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Cookie policy document type.
    pub fn cookie_policy() -> Self {
        Self::new(Self::COOKIE_POLICY)
    }

    /// Get the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Translation namespace for this page's static strings.
    ///
    /// `cookie-policy` maps to `cookiePolicy`.
    pub fn namespace(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut upper = false;
        for c in self.0.chars() {
            if c == '-' || c == '_' {
                upper = true;
            } else if upper {
                out.extend(c.to_uppercase());
                upper = false;
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentType {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Key a localized document is fetched by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentKey {
    /// Page identifier
    pub doc_type: DocumentType,

    /// Content language
    pub language: Language,
}

impl DocumentKey {
    /// Create a new document key.
    pub fn new(doc_type: impl Into<DocumentType>, language: Language) -> Self {
        Self {
            doc_type: doc_type.into(),
            language,
        }
    }
}

/// Where a document was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentOrigin {
    /// Content API
    Api,
    /// Local content directory
    File,
    /// In-memory source
    #[default]
    Memory,
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Where the document came from
    pub origin: DocumentOrigin,

    /// When the document was fetched
    pub fetched_at: Option<DateTime<Utc>>,
}

impl DocumentMetadata {
    /// Metadata for a document fetched now from `origin`.
    pub fn fetched_now(origin: DocumentOrigin) -> Self {
        Self {
            origin,
            fetched_at: Some(Utc::now()),
        }
    }
}

/// Server-supplied, language-specific structured content for a static page.
///
/// Values under each top-level key are kept as raw JSON; the section parser
/// decides what is usable. Documents are read-only once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedDocument {
    /// Page and language this document belongs to
    pub key: DocumentKey,

    /// Section key to string or nested object
    pub content: Map<String, Value>,

    /// Load metadata
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

impl LocalizedDocument {
    /// Create a document from a content map.
    pub fn new(key: DocumentKey, content: Map<String, Value>) -> Self {
        Self {
            key,
            content,
            metadata: DocumentMetadata::default(),
        }
    }

    /// Create a document from an arbitrary JSON value.
    ///
    /// Anything other than an object yields `None`.
    pub fn from_value(key: DocumentKey, value: Value) -> Option<Self> {
        match value {
            Value::Object(content) => Some(Self::new(key, content)),
            _ => None,
        }
    }

    /// Set load metadata.
    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Document language.
    pub fn language(&self) -> Language {
        self.key.language
    }

    /// Check if the document has no content keys.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get a top-level content value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.content.get(key)
    }
}
