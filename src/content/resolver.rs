//! Richness classification and fallback resolution.

use rayon::prelude::*;

use super::{ContentOrigin, PageContent};
use crate::i18n::{resolve_document_text, Translator};
use crate::model::{DocumentType, Language, LocalizedDocument, Section};
use crate::parser::{ParseOptions, SectionParser};
use crate::source::{fetch_or_absent, DocumentSource};

/// Fewest sections a document needs to be shown instead of fallback text.
pub const FULL_CONTENT_MIN_SECTIONS: usize = 6;

/// Check if derived sections are rich enough to display.
pub fn is_full_content(sections: &[Section]) -> bool {
    sections.len() >= FULL_CONTENT_MIN_SECTIONS
}

/// Resolves page content for one document type.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    doc_type: DocumentType,
    namespace: String,
    parser: SectionParser,
    translator: Translator,
}

impl ContentResolver {
    /// Create a resolver with the built-in key list for `doc_type`.
    pub fn new(doc_type: impl Into<DocumentType>, translator: Translator) -> Self {
        let doc_type = doc_type.into();
        Self {
            namespace: doc_type.namespace(),
            parser: SectionParser::new(ParseOptions::for_document(&doc_type)),
            doc_type,
            translator,
        }
    }

    /// Override the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parser = SectionParser::new(options);
        self
    }

    /// Override the translation namespace used for fallback strings.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Page identifier.
    pub fn doc_type(&self) -> &DocumentType {
        &self.doc_type
    }

    /// Translation namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Current display language.
    pub fn language(&self) -> Language {
        self.translator.language()
    }

    /// Switch display language.
    pub fn set_language(&mut self, language: Language) {
        self.translator.set_language(language);
    }

    /// Get the translator.
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Resolve content from an optional fetched document.
    ///
    /// An absent document and a document with too few sections both yield
    /// fallback content.
    pub fn resolve(&self, document: Option<&LocalizedDocument>) -> PageContent {
        let sections = document
            .map(|doc| self.parser.parse(&doc.content))
            .unwrap_or_default();

        if is_full_content(&sections) {
            log::debug!(
                "{} ({}): {} sections, using fetched content",
                self.doc_type,
                self.language(),
                sections.len()
            );
            return self.page(document, sections, ContentOrigin::Dynamic);
        }

        log::debug!(
            "{} ({}): {} sections, using fallback content",
            self.doc_type,
            self.language(),
            sections.len()
        );
        self.page(document, self.fallback_sections(), ContentOrigin::Fallback)
    }

    /// Resolve content with no document at all.
    pub fn fallback(&self) -> PageContent {
        self.resolve(None)
    }

    /// Fetch the document for the current language and resolve it.
    ///
    /// Fetch failures resolve exactly like an absent document.
    pub fn load(&self, source: &dyn DocumentSource) -> PageContent {
        let document = fetch_or_absent(source, &self.doc_type, self.language());
        self.resolve(document.as_ref())
    }

    fn page(
        &self,
        document: Option<&LocalizedDocument>,
        sections: Vec<Section>,
        origin: ContentOrigin,
    ) -> PageContent {
        let title = match origin {
            ContentOrigin::Dynamic => resolve_document_text(
                document,
                &self.parser.options().title_key,
                &self.translator,
                &self.namespace,
            ),
            ContentOrigin::Fallback => self
                .translator
                .t(&format!("{}.{}", self.namespace, self.parser.options().title_key)),
        };

        PageContent {
            doc_type: self.doc_type.clone(),
            language: self.language(),
            title,
            sections,
            origin,
        }
    }

    /// Sections from the current language's static strings, or the default
    /// language's when the current one has none.
    fn fallback_sections(&self) -> Vec<Section> {
        let current = self.language();
        let sections = self
            .translator
            .subtree_in(current, &self.namespace)
            .map(|table| self.parser.parse(table))
            .unwrap_or_default();

        if !sections.is_empty() || current == Language::default() {
            return sections;
        }

        self.translator
            .subtree_in(Language::default(), &self.namespace)
            .map(|table| self.parser.parse(table))
            .unwrap_or_default()
    }
}

/// Resolve one page in several languages in parallel.
///
/// Results keep the order of `languages`.
pub fn render_languages(
    source: &dyn DocumentSource,
    resolver: &ContentResolver,
    languages: &[Language],
) -> Vec<PageContent> {
    languages
        .par_iter()
        .map(|&lang| {
            let mut resolver = resolver.clone();
            resolver.set_language(lang);
            resolver.load(source)
        })
        .collect()
}
