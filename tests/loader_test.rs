//! Integration tests for background content loading.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pagecontent::error::Result;
use pagecontent::{
    ContentLoader, ContentOrigin, ContentResolver, DocumentKey, DocumentSource, DocumentType,
    Language, LocalizedDocument, Translator,
};
use serde_json::json;

/// Source that answers slowly for English and instantly otherwise.
struct SlowEnglishSource {
    delay: Duration,
    fetches: AtomicUsize,
}

impl DocumentSource for SlowEnglishSource {
    fn name(&self) -> &str {
        "slow"
    }

    fn fetch(
        &self,
        doc_type: &DocumentType,
        language: Language,
    ) -> Result<Option<LocalizedDocument>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if language == Language::En {
            thread::sleep(self.delay);
        }

        let mut content = serde_json::Map::new();
        content.insert("title".into(), json!(format!("Title {}", language)));
        for key in [
            "introduction",
            "whatAreCookies",
            "howWeUseCookies",
            "typesOfCookies",
            "essentialCookies",
            "contactUs",
        ] {
            content.insert(key.into(), json!({"title": key, "p1": language.code()}));
        }
        Ok(Some(LocalizedDocument::new(
            DocumentKey::new(doc_type.clone(), language),
            content,
        )))
    }
}

fn loader(delay: Duration) -> (ContentLoader, Arc<SlowEnglishSource>) {
    let source = Arc::new(SlowEnglishSource {
        delay,
        fetches: AtomicUsize::new(0),
    });
    let resolver = ContentResolver::new("cookie-policy", Translator::default());
    (ContentLoader::new(source.clone(), resolver), source)
}

#[test]
fn test_latest_request_wins() {
    let (mut loader, source) = loader(Duration::from_millis(300));

    loader.request(Language::En);
    let latest = loader.request(Language::Fr);
    assert_eq!(latest, 2);

    let content = loader.wait(Duration::from_secs(5)).unwrap().clone();
    assert_eq!(content.language, Language::Fr);
    assert_eq!(content.title, "Title fr");
    assert_eq!(content.origin, ContentOrigin::Dynamic);

    // The slow English result arrives later and must be ignored
    thread::sleep(Duration::from_millis(500));
    let content = loader.poll().unwrap();
    assert_eq!(content.language, Language::Fr);
    assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
}

#[test]
fn test_unmount_discards_pending_result() {
    let (mut loader, _) = loader(Duration::from_millis(200));

    loader.request(Language::En);
    assert!(loader.is_loading());
    loader.unmount();

    thread::sleep(Duration::from_millis(400));
    assert!(loader.poll().is_none());
    assert!(loader.content().is_none());
    assert!(!loader.is_loading());
}

#[test]
fn test_language_switch_refetches() {
    let (mut loader, source) = loader(Duration::ZERO);

    loader.request(Language::Es);
    let first = loader.wait(Duration::from_secs(5)).unwrap().clone();
    loader.request(Language::De);
    let second = loader.wait(Duration::from_secs(5)).unwrap().clone();

    assert_eq!(first.language, Language::Es);
    assert_eq!(second.language, Language::De);
    assert_eq!(loader.language(), Language::De);
    assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
}
