//! Content model types for localized static pages.
//!
//! A [`LocalizedDocument`] is the loosely-typed JSON the content API serves
//! for one page in one language. [`Section`] is the normalized shape the
//! renderers work with.

mod document;
mod language;
mod section;

pub use document::{DocumentKey, DocumentMetadata, DocumentOrigin, DocumentType, LocalizedDocument};
pub use language::Language;
pub use section::Section;
