//! Resolved page content.

use serde::{Deserialize, Serialize};

use crate::model::{DocumentType, Language, Section};

/// Where the rendered sections came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentOrigin {
    /// Sections derived from the fetched document
    Dynamic,
    /// Sections derived from bundled translation strings
    Fallback,
}

impl ContentOrigin {
    /// Lowercase name used in frontmatter and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentOrigin::Dynamic => "dynamic",
            ContentOrigin::Fallback => "fallback",
        }
    }
}

/// Renderable content for one static page in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page identifier
    pub doc_type: DocumentType,

    /// Display language
    pub language: Language,

    /// Page title
    pub title: String,

    /// Sections in display order
    pub sections: Vec<Section>,

    /// Source of the sections
    pub origin: ContentOrigin,
}

impl PageContent {
    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the content came from bundled strings.
    pub fn is_fallback(&self) -> bool {
        self.origin == ContentOrigin::Fallback
    }

    /// Total number of paragraphs across sections.
    pub fn paragraph_count(&self) -> usize {
        self.sections.iter().map(|s| s.paragraphs.len()).sum()
    }

    /// Get plain text content of the page.
    pub fn plain_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.sections.len() + 1);
        if !self.title.is_empty() {
            parts.push(self.title.clone());
        }
        parts.extend(
            self.sections
                .iter()
                .filter(|s| !s.is_empty())
                .map(|s| s.plain_text()),
        );
        parts.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_text() {
        let page = PageContent {
            doc_type: DocumentType::new("faq"),
            language: Language::En,
            title: "FAQ".into(),
            sections: vec![
                Section::new("General", vec!["A".into(), "B".into()]),
                Section::paragraph("C"),
            ],
            origin: ContentOrigin::Dynamic,
        };

        assert_eq!(page.section_count(), 2);
        assert_eq!(page.paragraph_count(), 3);
        assert!(!page.is_fallback());
        assert_eq!(page.plain_text(), "FAQ\n\nGeneral\n\nA\n\nB\n\nC");
    }
}
