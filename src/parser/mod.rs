//! Structured-content parsing module.
//!
//! Turns a loosely-typed content map into an ordered list of [`Section`]s.
//! Parsing is a pure transformation: unrecognized keys and values of the
//! wrong shape are skipped, never reported.
//!
//! [`Section`]: crate::model::Section

pub mod keys;
mod options;
mod sections;

pub use options::ParseOptions;
pub use sections::{document_title, order_paragraph_keys, parse_sections, SectionParser};
