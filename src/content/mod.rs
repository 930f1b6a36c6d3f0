//! Page content resolution with static fallback.
//!
//! A fetched document is only shown when it is rich enough; otherwise the
//! page renders the bundled translation strings for its namespace.

mod page;
mod resolver;

pub use page::{ContentOrigin, PageContent};
pub use resolver::{is_full_content, render_languages, ContentResolver, FULL_CONTENT_MIN_SECTIONS};
