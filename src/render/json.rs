//! JSON rendering for page content.

use crate::content::PageContent;
use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert page content to JSON.
pub fn to_json(page: &PageContent, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(page),
        JsonFormat::Compact => serde_json::to_string(page),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
