//! Plain text rendering for page content.

use crate::content::PageContent;
use crate::error::Result;

use super::{CleanupPipeline, RenderOptions};

/// Convert page content to plain text.
pub fn to_text(page: &PageContent, options: &RenderOptions) -> Result<String> {
    let mut output = page.plain_text();

    if let Some(ref cleanup_options) = options.cleanup {
        let pipeline = CleanupPipeline::new(cleanup_options.clone());
        output = pipeline.process(&output);
    }

    Ok(output.trim().to_string())
}
