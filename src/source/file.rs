//! Local content directory source.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::DocumentSource;
use crate::error::{Error, Result};
use crate::model::{
    DocumentKey, DocumentMetadata, DocumentOrigin, DocumentType, Language, LocalizedDocument,
};

/// Documents stored as `<root>/<doc_type>/<lang>.json`.
///
/// Each file holds the content object itself, without an envelope.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Content directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding a document.
    pub fn path_for(&self, doc_type: &DocumentType, language: Language) -> PathBuf {
        self.root
            .join(doc_type.as_str())
            .join(format!("{}.json", language.code()))
    }
}

impl DocumentSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch(
        &self,
        doc_type: &DocumentType,
        language: Language,
    ) -> Result<Option<LocalizedDocument>> {
        let path = self.path_for(doc_type, language);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No content file at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let value: Value = serde_json::from_str(&data)?;
        let key = DocumentKey::new(doc_type.clone(), language);
        let document = LocalizedDocument::from_value(key, value).ok_or_else(|| {
            Error::Other(format!("{} does not hold a JSON object", path.display()))
        })?;

        Ok(Some(document.with_metadata(DocumentMetadata::fetched_now(
            DocumentOrigin::File,
        ))))
    }
}
