//! Translation tables and dotted-path lookups.
//!
//! Static page strings are bundled per language and addressed by dotted
//! keys such as `cookiePolicy.title`. The same path syntax is used to read
//! values out of fetched content documents, with the bundled table as the
//! fallback when the document does not have them.

mod path;
mod translator;

pub use path::{lookup_document, lookup_path, resolve_document_text, resolve_text};
pub use translator::{TranslationParams, Translator};
