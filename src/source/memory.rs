//! In-memory document source.

use std::collections::HashMap;

use serde_json::Value;

use super::DocumentSource;
use crate::error::Result;
use crate::model::{
    DocumentKey, DocumentMetadata, DocumentOrigin, DocumentType, Language, LocalizedDocument,
};

/// Documents held in memory, keyed by page and language.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<DocumentKey, LocalizedDocument>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document.
    pub fn insert(&mut self, document: LocalizedDocument) {
        self.documents.insert(document.key.clone(), document);
    }

    /// Add a document from a JSON value. Non-object values are ignored.
    pub fn with_json(
        mut self,
        doc_type: impl Into<DocumentType>,
        language: Language,
        value: Value,
    ) -> Self {
        let doc_type = doc_type.into();
        let key = DocumentKey::new(doc_type.clone(), language);
        match LocalizedDocument::from_value(key, value) {
            Some(document) => self.insert(document),
            None => log::warn!("Ignoring non-object document for {} ({})", doc_type, language),
        }
        self
    }

    /// Number of documents held.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the source holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn fetch(
        &self,
        doc_type: &DocumentType,
        language: Language,
    ) -> Result<Option<LocalizedDocument>> {
        let key = DocumentKey::new(doc_type.clone(), language);
        Ok(self.documents.get(&key).map(|doc| {
            doc.clone()
                .with_metadata(DocumentMetadata::fetched_now(DocumentOrigin::Memory))
        }))
    }
}
