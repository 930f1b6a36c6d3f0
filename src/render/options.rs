//! Rendering options and configuration.

use super::{CleanupOptions, CleanupPreset};

/// Options for rendering page content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Heading level for section titles (1-6); the page title is one level up
    pub section_heading_level: u8,

    /// Include YAML frontmatter with page metadata
    pub include_frontmatter: bool,

    /// Escape special Markdown characters
    pub escape_special_chars: bool,

    /// Text cleanup options
    pub cleanup: Option<CleanupOptions>,

    /// Collect statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section heading level.
    pub fn with_section_heading(mut self, level: u8) -> Self {
        self.section_heading_level = level.clamp(1, 6);
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Heading level for the page title.
    pub fn title_heading_level(&self) -> u8 {
        self.section_heading_level.saturating_sub(1).max(1)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            section_heading_level: 2,
            include_frontmatter: false,
            escape_special_chars: true,
            cleanup: None,
            collect_stats: false,
        }
    }
}
