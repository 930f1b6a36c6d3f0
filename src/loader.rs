//! Background content loading for a single view.
//!
//! Each language request runs on a worker thread. Results come back over a
//! channel tagged with the request generation; only the latest generation is
//! applied, and nothing is applied once the view is unmounted. In-flight
//! requests are never cancelled, their results are just ignored.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};

use crate::content::{ContentResolver, PageContent};
use crate::model::{Language, LocalizedDocument};
use crate::source::{fetch_or_absent, DocumentSource};

/// A finished fetch.
#[derive(Debug)]
struct LoadResult {
    generation: u64,
    language: Language,
    document: Option<LocalizedDocument>,
}

/// Loads page content off-thread and keeps the latest result.
pub struct ContentLoader {
    source: Arc<dyn DocumentSource>,
    resolver: ContentResolver,
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
    generation: u64,
    mounted: Arc<AtomicBool>,
    loading: bool,
    content: Option<PageContent>,
}

impl ContentLoader {
    /// Create a mounted loader with no content yet.
    pub fn new(source: Arc<dyn DocumentSource>, resolver: ContentResolver) -> Self {
        let (tx, rx) = unbounded();
        Self {
            source,
            resolver,
            tx,
            rx,
            generation: 0,
            mounted: Arc::new(AtomicBool::new(true)),
            loading: false,
            content: None,
        }
    }

    /// Start loading content in `language`, superseding any pending request.
    ///
    /// Returns the generation of the new request. An unmounted loader starts
    /// nothing and returns the current generation.
    pub fn request(&mut self, language: Language) -> u64 {
        if !self.is_mounted() {
            log::debug!("Ignoring {} request: unmounted", language);
            return self.generation;
        }

        self.generation += 1;
        self.loading = true;
        self.resolver.set_language(language);

        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let doc_type = self.resolver.doc_type().clone();
        let mounted = Arc::clone(&self.mounted);
        let tx = self.tx.clone();

        log::debug!("Loading {} ({}) as generation {}", doc_type, language, generation);

        thread::spawn(move || {
            let document = fetch_or_absent(source.as_ref(), &doc_type, language);
            if !mounted.load(Ordering::Acquire) {
                return;
            }
            // The receiver lives as long as the loader; a closed channel
            // only means the loader was dropped.
            let _ = tx.send(LoadResult {
                generation,
                language,
                document,
            });
        });

        generation
    }

    /// Apply any finished results without blocking.
    pub fn poll(&mut self) -> Option<&PageContent> {
        while let Ok(result) = self.rx.try_recv() {
            self.apply(result);
        }
        self.content.as_ref()
    }

    /// Block until the latest request resolves or `timeout` elapses.
    pub fn wait(&mut self, timeout: Duration) -> Option<&PageContent> {
        let deadline = Instant::now() + timeout;

        while self.loading && self.is_mounted() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(result) => self.apply(result),
                Err(RecvTimeoutError::Timeout) => {
                    log::debug!("Timed out waiting for generation {}", self.generation);
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        self.content.as_ref()
    }

    /// Tear down the view. Later results are discarded.
    pub fn unmount(&mut self) {
        self.mounted.store(false, Ordering::Release);
        self.loading = false;
    }

    /// Check if the view is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Check if the latest request is still pending.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Generation of the latest request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Latest applied content.
    pub fn content(&self) -> Option<&PageContent> {
        self.content.as_ref()
    }

    /// Current display language.
    pub fn language(&self) -> Language {
        self.resolver.language()
    }

    fn apply(&mut self, result: LoadResult) {
        if !self.is_mounted() {
            log::debug!("Dropping generation {}: unmounted", result.generation);
            return;
        }
        if result.generation != self.generation {
            log::debug!(
                "Dropping stale generation {} (latest {})",
                result.generation,
                self.generation
            );
            return;
        }

        let mut resolver = self.resolver.clone();
        resolver.set_language(result.language);
        self.content = Some(resolver.resolve(result.document.as_ref()));
        self.loading = false;
    }
}
