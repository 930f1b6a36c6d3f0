//! Integration tests for document sources.

use std::fs;

use pagecontent::source::fetch_or_absent;
use pagecontent::{
    ContentOrigin, DocumentOrigin, DocumentSource, DocumentType, Error, FileSource, Language,
    PageBuilder,
};
use tempfile::TempDir;

fn content_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let terms = dir.path().join("terms");
    fs::create_dir_all(&terms).unwrap();
    fs::write(
        terms.join("en.json"),
        r#"{
            "title": "Terms of Service",
            "acceptance": {"title": "Acceptance", "p1": "By using the site you agree."},
            "eligibility": {"title": "Eligibility", "p1": "You must be 18."},
            "accounts": {"title": "Accounts", "p1": "Keep your password safe."},
            "listings": {"title": "Listings", "p1": "Be honest."},
            "payments": {"title": "Payments", "p2": "Refunds.", "p1": "Fees."},
            "termination": {"title": "Termination", "p1": "We may close accounts."}
        }"#,
    )
    .unwrap();
    fs::write(terms.join("es.json"), "{ not json").unwrap();
    fs::write(terms.join("fr.json"), "[1, 2]").unwrap();
    dir
}

#[test]
fn test_file_source_reads_document() {
    let dir = content_dir();
    let source = FileSource::new(dir.path());

    let doc = source
        .fetch(&DocumentType::new("terms"), Language::En)
        .unwrap()
        .unwrap();

    assert_eq!(doc.language(), Language::En);
    assert_eq!(doc.metadata.origin, DocumentOrigin::File);
    assert!(doc.metadata.fetched_at.is_some());
}

#[test]
fn test_file_source_missing_is_absent() {
    let dir = content_dir();
    let source = FileSource::new(dir.path());

    assert!(source
        .fetch(&DocumentType::new("terms"), Language::De)
        .unwrap()
        .is_none());
    assert!(source
        .fetch(&DocumentType::new("faq"), Language::En)
        .unwrap()
        .is_none());
}

#[test]
fn test_file_source_malformed_is_error() {
    let dir = content_dir();
    let source = FileSource::new(dir.path());
    let terms = DocumentType::new("terms");

    assert!(matches!(
        source.fetch(&terms, Language::Es),
        Err(Error::Json(_))
    ));
    assert!(source.fetch(&terms, Language::Fr).is_err());
    assert!(fetch_or_absent(&source, &terms, Language::Es).is_none());
}

#[test]
fn test_builder_end_to_end() {
    let dir = content_dir();
    let source = FileSource::new(dir.path());

    let result = PageBuilder::new("terms").with_frontmatter().load(&source);
    assert_eq!(result.page().origin, ContentOrigin::Dynamic);
    assert_eq!(result.page().sections[4].paragraphs, vec!["Fees.", "Refunds."]);

    let markdown = result.to_markdown().unwrap();
    assert!(markdown.starts_with("---\n"));
    assert!(markdown.contains("# Terms of Service\n"));
    assert!(markdown.contains("## Payments\n\nFees.\n\nRefunds."));

    // Malformed Spanish file degrades to bundled text
    let result = PageBuilder::new("terms")
        .language(Language::Es)
        .load(&source);
    assert!(result.page().is_fallback());
}

#[test]
fn test_locales_dir_overrides() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("en.json"),
        r#"{"cookiePolicy": {"title": "Our Cookie Rules"}}"#,
    )
    .unwrap();

    let result = PageBuilder::new("cookie-policy")
        .with_locales_dir(dir.path())
        .resolve(None);

    assert_eq!(result.page().title, "Our Cookie Rules");
    assert!(result.page().section_count() > 0);
}
