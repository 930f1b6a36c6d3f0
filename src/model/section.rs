//! Section type derived from a localized document.

use serde::{Deserialize, Serialize};

/// A titled group of paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading, empty for untitled sections
    pub title: String,

    /// Paragraphs in display order
    pub paragraphs: Vec<String>,
}

impl Section {
    /// Create a section with a title and paragraphs.
    pub fn new(title: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs,
        }
    }

    /// Create an untitled section holding a single paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            paragraphs: vec![text.into()],
        }
    }

    /// Check if the section has a heading.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Check if the section has nothing to render.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.paragraphs.is_empty()
    }

    /// Get plain text content of the section.
    pub fn plain_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.paragraphs.len() + 1);
        if self.has_title() {
            parts.push(self.title.as_str());
        }
        parts.extend(self.paragraphs.iter().map(String::as_str));
        parts.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_paragraph() {
        let section = Section::paragraph("We use cookies.");
        assert!(!section.has_title());
        assert!(!section.is_empty());
        assert_eq!(section.plain_text(), "We use cookies.");
    }

    #[test]
    fn test_plain_text_with_title() {
        let section = Section::new("Cookies", vec!["One.".into(), "Two.".into()]);
        assert_eq!(section.plain_text(), "Cookies\n\nOne.\n\nTwo.");
    }

    #[test]
    fn test_empty() {
        assert!(Section::default().is_empty());
    }
}
