//! # pagecontent
//!
//! Localized structured-content rendering for static pages.
//!
//! Legal and help pages (cookie policy, privacy policy, terms, FAQ) are
//! authored as loosely structured JSON in a CMS and fetched per language.
//! This library turns those documents into an ordered list of sections and
//! decides whether the fetched content is complete enough to show, falling
//! back to bundled translations when it is not.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagecontent::{FileSource, Language, PageBuilder};
//!
//! fn main() -> pagecontent::Result<()> {
//!     let source = FileSource::new("./content");
//!
//!     let page = PageBuilder::new("cookie-policy")
//!         .language(Language::Es)
//!         .with_frontmatter()
//!         .load(&source);
//!
//!     println!("{}", page.to_markdown()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Section derivation**: fixed priority key lists, numeric paragraph order
//! - **Fallback content**: bundled translations when fetched content is thin
//! - **Multiple output formats**: Markdown, plain text, JSON
//! - **Background loading**: stale and post-unmount results are discarded
//! - **Parallel processing**: Uses Rayon to resolve many languages at once
//! - **HTTP source**: optional `http` feature backed by reqwest

pub mod content;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod loader;
pub mod model;
pub mod paging;
pub mod parser;
pub mod render;
pub mod session;
pub mod source;

// Re-export commonly used types
pub use content::{
    is_full_content, render_languages, ContentOrigin, ContentResolver, PageContent,
    FULL_CONTENT_MIN_SECTIONS,
};
pub use error::{Error, Result};
pub use forms::{validate_email, validate_required, FieldError};
pub use i18n::{lookup_path, resolve_text, Translator};
pub use loader::ContentLoader;
pub use model::{
    DocumentKey, DocumentMetadata, DocumentOrigin, DocumentType, Language, LocalizedDocument,
    Section,
};
pub use paging::Pagination;
pub use parser::{parse_sections, ParseOptions, SectionParser};
pub use render::{CleanupOptions, CleanupPreset, JsonFormat, RenderOptions, RenderResult};
pub use session::{CurrentUser, SessionSource, SessionState};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{DocumentSource, FileSource, MemorySource};

use std::path::PathBuf;

use serde_json::Value;

/// Resolve a page in a language from a source.
///
/// Fetch failures resolve to fallback content, never to an error.
///
/// # Example
///
/// ```no_run
/// use pagecontent::{load_page, FileSource, Language};
///
/// let source = FileSource::new("./content");
/// let page = load_page(&source, "terms", Language::En);
/// println!("{} sections", page.section_count());
/// ```
pub fn load_page(
    source: &dyn DocumentSource,
    doc_type: impl Into<DocumentType>,
    language: Language,
) -> PageContent {
    ContentResolver::new(doc_type, Translator::new(language)).load(source)
}

/// Resolve a page from an already-fetched JSON value.
///
/// Non-object values count as an absent document.
///
/// # Example
///
/// ```
/// use pagecontent::{resolve_json, ContentOrigin, Language};
/// use serde_json::json;
///
/// let page = resolve_json("cookie-policy", Language::En, json!({"title": "Cookies"}));
/// assert_eq!(page.origin, ContentOrigin::Fallback);
/// ```
pub fn resolve_json(
    doc_type: impl Into<DocumentType>,
    language: Language,
    value: Value,
) -> PageContent {
    let doc_type = doc_type.into();
    let document = LocalizedDocument::from_value(DocumentKey::new(doc_type.clone(), language), value);
    ContentResolver::new(doc_type, Translator::new(language)).resolve(document.as_ref())
}

/// Resolve a page from a source and render it to Markdown.
pub fn to_markdown(
    source: &dyn DocumentSource,
    doc_type: impl Into<DocumentType>,
    language: Language,
) -> Result<String> {
    let page = load_page(source, doc_type, language);
    render::to_markdown(&page, &RenderOptions::default())
}

/// Resolve a page from a source and render it to Markdown with custom options.
///
/// # Example
///
/// ```no_run
/// use pagecontent::{to_markdown_with_options, FileSource, Language, RenderOptions};
///
/// let options = RenderOptions::new().with_frontmatter(true);
/// let source = FileSource::new("./content");
/// let markdown = to_markdown_with_options(&source, "faq", Language::Fr, &options).unwrap();
/// ```
pub fn to_markdown_with_options(
    source: &dyn DocumentSource,
    doc_type: impl Into<DocumentType>,
    language: Language,
    options: &RenderOptions,
) -> Result<String> {
    let page = load_page(source, doc_type, language);
    render::to_markdown(&page, options)
}

/// Resolve a page from a source and render it to plain text.
pub fn to_text(
    source: &dyn DocumentSource,
    doc_type: impl Into<DocumentType>,
    language: Language,
    options: &RenderOptions,
) -> Result<String> {
    let page = load_page(source, doc_type, language);
    render::to_text(&page, options)
}

/// Resolve a page from a source and render it to JSON.
pub fn to_json(
    source: &dyn DocumentSource,
    doc_type: impl Into<DocumentType>,
    language: Language,
    format: JsonFormat,
) -> Result<String> {
    let page = load_page(source, doc_type, language);
    render::to_json(&page, format)
}

/// Builder for resolving and rendering a page.
///
/// # Example
///
/// ```no_run
/// use pagecontent::{CleanupPreset, FileSource, Language, PageBuilder};
///
/// let markdown = PageBuilder::new("privacy-policy")
///     .language(Language::De)
///     .with_locales_dir("./locales")
///     .with_frontmatter()
///     .with_cleanup(CleanupPreset::Standard)
///     .load(&FileSource::new("./content"))
///     .to_markdown()?;
/// # Ok::<(), pagecontent::Error>(())
/// ```
pub struct PageBuilder {
    doc_type: DocumentType,
    language: Language,
    locales_dir: Option<PathBuf>,
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl PageBuilder {
    /// Create a builder for a page in the default language.
    pub fn new(doc_type: impl Into<DocumentType>) -> Self {
        let doc_type = doc_type.into();
        Self {
            parse_options: ParseOptions::for_document(&doc_type),
            doc_type,
            language: Language::default(),
            locales_dir: None,
            render_options: RenderOptions::default(),
        }
    }

    /// Set the display language.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Merge translation overrides from a directory of `<lang>.json` files.
    pub fn with_locales_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.locales_dir = Some(dir.into());
        self
    }

    /// Replace the priority key list.
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse_options = self.parse_options.with_keys(keys);
        self
    }

    /// Enable frontmatter in output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.render_options = self.render_options.with_cleanup_preset(preset);
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Build the resolver this builder describes.
    pub fn resolver(&self) -> ContentResolver {
        let mut translator = Translator::new(self.language);
        if let Some(ref dir) = self.locales_dir {
            translator = translator.with_overrides(dir);
        }
        ContentResolver::new(self.doc_type.clone(), translator)
            .with_parse_options(self.parse_options.clone())
    }

    /// Fetch from a source and resolve.
    pub fn load(self, source: &dyn DocumentSource) -> PageResult {
        let page = self.resolver().load(source);
        PageResult {
            page,
            render_options: self.render_options,
        }
    }

    /// Resolve an already-fetched document, or fallback content for `None`.
    pub fn resolve(self, document: Option<&LocalizedDocument>) -> PageResult {
        let page = self.resolver().resolve(document);
        PageResult {
            page,
            render_options: self.render_options,
        }
    }
}

/// A resolved page ready to render.
pub struct PageResult {
    /// The resolved page
    pub page: PageContent,
    /// Render options to use
    render_options: RenderOptions,
}

impl PageResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.page, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.page, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.page, format)
    }

    /// Get plain text without cleanup.
    pub fn plain_text(&self) -> String {
        self.page.plain_text()
    }

    /// Get the page.
    pub fn page(&self) -> &PageContent {
        &self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_builder() {
        let builder = PageBuilder::new("faq")
            .language(Language::Pt)
            .with_frontmatter()
            .with_cleanup(CleanupPreset::Minimal);

        assert_eq!(builder.language, Language::Pt);
        assert!(builder.render_options.include_frontmatter);
        assert_eq!(builder.resolver().namespace(), "faq");
    }

    #[test]
    fn test_builder_custom_keys() {
        let content = json!({
            "title": "Custom",
            "a": "one", "b": "two", "c": "three",
            "d": "four", "e": "five", "f": "six"
        });
        let doc = LocalizedDocument::from_value(DocumentKey::new("faq", Language::En), content);

        let result = PageBuilder::new("faq")
            .with_keys(["title", "a", "b", "c", "d", "e", "f"])
            .resolve(doc.as_ref());

        assert_eq!(result.page().origin, ContentOrigin::Dynamic);
        assert_eq!(result.page().title, "Custom");
        assert!(result.plain_text().starts_with("Custom\n\none"));
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_resolve_json_non_object() {
        let page = resolve_json("cookie-policy", Language::En, json!([1, 2, 3]));
        assert!(page.is_fallback());
    }

    #[test]
    fn test_load_page_empty_source() {
        let page = load_page(&MemorySource::new(), "cookie-policy", Language::Es);
        assert!(page.is_fallback());
        assert_eq!(page.language, Language::Es);
    }

    #[test]
    fn test_to_markdown_with_options() {
        let options = RenderOptions::new().with_frontmatter(true);
        let md = to_markdown_with_options(&MemorySource::new(), "faq", Language::En, &options)
            .unwrap();
        assert!(md.starts_with("---\ntitle: "));
        assert!(md.contains("page: \"faq\""));
        assert!(md.contains("origin: \"fallback\""));

        let plain = to_markdown(&MemorySource::new(), "faq", Language::En).unwrap();
        assert!(!plain.starts_with("---"));
        assert!(md.ends_with(&plain));
    }

    #[test]
    fn test_to_markdown_unknown_page() {
        // No document and no translations: title is the raw key, no sections
        let md = to_markdown(&MemorySource::new(), "shipping", Language::En).unwrap();
        assert_eq!(md, "# shipping.title");
    }
}
