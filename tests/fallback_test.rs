//! Integration tests for richness classification and fallback content.

use pagecontent::error::{Error, Result};
use pagecontent::i18n::{lookup_path, resolve_text};
use pagecontent::{
    load_page, render_languages, ContentOrigin, ContentResolver, DocumentKey, DocumentSource,
    DocumentType, Language, LocalizedDocument, MemorySource, Translator,
};
use serde_json::{json, Value};

/// Source whose every fetch fails.
struct BrokenSource;

impl DocumentSource for BrokenSource {
    fn name(&self) -> &str {
        "broken"
    }

    fn fetch(&self, _: &DocumentType, _: Language) -> Result<Option<LocalizedDocument>> {
        Err(Error::Http {
            status: 503,
            url: "https://api.example.com/content/cookie-policy".into(),
        })
    }
}

fn rich_cookie_policy() -> Value {
    json!({
        "title": "Cookies at the Market",
        "lastUpdated": "Updated March 2024",
        "introduction": {"title": "Introduction", "p1": "Hello."},
        "whatAreCookies": {"title": "What are cookies?", "p1": "Small files."},
        "howWeUseCookies": {"title": "How we use them", "p1": "Sessions.", "p2": "Carts."},
        "essentialCookies": {"title": "Essential", "p1": "Needed to log in."},
        "contactUs": {"title": "Contact", "p1": "privacy@example.com"}
    })
}

#[test]
fn test_rich_document_is_shown() {
    let source = MemorySource::new().with_json("cookie-policy", Language::En, rich_cookie_policy());
    let page = load_page(&source, "cookie-policy", Language::En);

    assert_eq!(page.origin, ContentOrigin::Dynamic);
    assert_eq!(page.title, "Cookies at the Market");
    assert_eq!(page.section_count(), 6);
    assert_eq!(page.sections[3].paragraphs, vec!["Sessions.", "Carts."]);
}

#[test]
fn test_sparse_document_uses_fallback() {
    let mut content = rich_cookie_policy();
    content.as_object_mut().unwrap().remove("contactUs");

    let source = MemorySource::new().with_json("cookie-policy", Language::En, content);
    let page = load_page(&source, "cookie-policy", Language::En);

    assert_eq!(page.origin, ContentOrigin::Fallback);
    assert_eq!(page.title, "Cookie Policy");
}

#[test]
fn test_failed_fetch_matches_empty_document() {
    let resolver = ContentResolver::new("cookie-policy", Translator::new(Language::Es));

    let failed = resolver.load(&BrokenSource);
    let missing = resolver.load(&MemorySource::new());
    let empty = resolver.resolve(Some(&LocalizedDocument::new(
        DocumentKey::new("cookie-policy", Language::Es),
        Default::default(),
    )));

    assert_eq!(failed, missing);
    assert_eq!(failed, empty);
    assert!(failed.is_fallback());
    assert_eq!(failed.language, Language::Es);
}

#[test]
fn test_spanish_fallback_is_localized() {
    let page = load_page(&MemorySource::new(), "cookie-policy", Language::Es);
    let english = load_page(&MemorySource::new(), "cookie-policy", Language::En);

    assert!(page.section_count() > 0);
    assert_ne!(page.title, english.title);
    assert_ne!(page.sections, english.sections);
}

#[test]
fn test_render_languages_keeps_order() {
    let source = MemorySource::new().with_json("cookie-policy", Language::De, rich_cookie_policy());
    let resolver = ContentResolver::new("cookie-policy", Translator::default());

    let pages = render_languages(&source, &resolver, &Language::ALL);

    assert_eq!(pages.len(), Language::ALL.len());
    for (page, language) in pages.iter().zip(Language::ALL) {
        assert_eq!(page.language, language);
        let expected = if language == Language::De {
            ContentOrigin::Dynamic
        } else {
            ContentOrigin::Fallback
        };
        assert_eq!(page.origin, expected);
    }
}

#[test]
fn test_dotted_lookup() {
    let root = json!({"a": {"b": "x"}});
    let translator = Translator::default();

    assert_eq!(lookup_path(Some(&root), "a.b"), Some("x"));
    assert_eq!(lookup_path(Some(&root), "a.c"), None);
    assert_eq!(lookup_path(Some(&root), "a.b.c"), None);
    assert_eq!(lookup_path(None, "a.b"), None);

    assert_eq!(resolve_text(Some(&root), "a.b", &translator, "x"), "x");
    assert_eq!(
        resolve_text(Some(&root), "title", &translator, "cookiePolicy"),
        "Cookie Policy"
    );
    assert_eq!(resolve_text(Some(&root), "a.c", &translator, "ns"), "ns.a.c");
}
