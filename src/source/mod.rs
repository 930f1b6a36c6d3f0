//! Document sources.
//!
//! A [`DocumentSource`] fetches the localized document for a page. Sources
//! report failures as errors; callers that render pages go through
//! [`fetch_or_absent`], which turns every failure into "no document".

mod file;
#[cfg(feature = "http")]
mod http;
mod memory;

pub use file::FileSource;
#[cfg(feature = "http")]
pub use http::HttpSource;
pub use memory::MemorySource;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::model::{DocumentType, Language, LocalizedDocument};

/// Something that can fetch localized page documents.
pub trait DocumentSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetch the document for a page in a language.
    ///
    /// `Ok(None)` means the source has no document for that key.
    fn fetch(&self, doc_type: &DocumentType, language: Language)
        -> Result<Option<LocalizedDocument>>;
}

/// Fetch a document, treating any failure as an absent document.
pub fn fetch_or_absent(
    source: &dyn DocumentSource,
    doc_type: &DocumentType,
    language: Language,
) -> Option<LocalizedDocument> {
    match source.fetch(doc_type, language) {
        Ok(document) => document,
        Err(e) => {
            log::warn!(
                "Failed to fetch {} ({}) from {}: {}",
                doc_type,
                language,
                source.name(),
                e
            );
            None
        }
    }
}

/// Extract the content object from an API payload.
///
/// Accepts `{"content": {...}}`. A missing, null, or non-object `content`
/// means the document is absent.
pub fn content_from_payload(payload: Value) -> Option<Map<String, Value>> {
    match payload {
        Value::Object(mut envelope) => match envelope.remove("content") {
            Some(Value::Object(content)) => Some(content),
            _ => None,
        },
        _ => None,
    }
}
