//! Markdown rendering for page content.

use crate::content::PageContent;
use crate::error::Result;
use crate::model::Section;

use super::{CleanupPipeline, RenderOptions, RenderResult, RenderStats};

/// Convert page content to Markdown.
pub fn to_markdown(page: &PageContent, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(page)
}

/// Convert page content to Markdown with statistics.
pub fn to_markdown_with_stats(page: &PageContent, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(page)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render page content to Markdown.
    pub fn render(mut self, page: &PageContent) -> Result<String> {
        self.render_internal(page)
    }

    /// Render page content to Markdown with statistics.
    pub fn render_with_stats(mut self, page: &PageContent) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(page)?;

        self.stats.count_text(&content);

        Ok(RenderResult::new(content, page.origin, self.stats))
    }

    fn render_internal(&mut self, page: &PageContent) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&frontmatter(page));
        }

        if !page.title.is_empty() {
            self.push_heading(&mut output, self.options.title_heading_level(), &page.title);
        }

        for section in &page.sections {
            self.render_section(&mut output, section);
        }

        if let Some(ref cleanup_options) = self.options.cleanup {
            let pipeline = CleanupPipeline::new(cleanup_options.clone());
            output = pipeline.process(&output);
        }

        Ok(output.trim().to_string())
    }

    fn render_section(&mut self, output: &mut String, section: &Section) {
        if section.is_empty() {
            return;
        }
        if self.options.collect_stats {
            self.stats.add_section();
        }

        if section.has_title() {
            if self.options.collect_stats {
                self.stats.add_heading();
            }
            self.push_heading(output, self.options.section_heading_level, &section.title);
        }

        for paragraph in &section.paragraphs {
            if paragraph.trim().is_empty() {
                continue;
            }
            if self.options.collect_stats {
                self.stats.add_paragraph();
            }
            output.push_str(&self.escape(paragraph));
            output.push_str("\n\n");
        }
    }

    fn push_heading(&self, output: &mut String, level: u8, text: &str) {
        output.push_str(&"#".repeat(level as usize));
        output.push(' ');
        output.push_str(&self.escape(text));
        output.push_str("\n\n");
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

/// Escape characters that would otherwise start Markdown formatting.
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '>' => {
                out.push('\\');
                out.push(c);
            }
            '#' if i == 0 => out.push_str("\\#"),
            _ => out.push(c),
        }
    }
    out
}

/// YAML frontmatter describing the page.
fn frontmatter(page: &PageContent) -> String {
    let lines = [
        "---".to_string(),
        format!("title: \"{}\"", escape_yaml(&page.title)),
        format!("page: \"{}\"", escape_yaml(page.doc_type.as_str())),
        format!("language: \"{}\"", page.language),
        format!("origin: \"{}\"", page.origin.as_str()),
        format!("sections: {}", page.section_count()),
        "---".to_string(),
        String::new(),
    ];
    lines.join("\n")
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentOrigin;
    use crate::model::{DocumentType, Language};

    fn page() -> PageContent {
        PageContent {
            doc_type: DocumentType::cookie_policy(),
            language: Language::En,
            title: "Cookie Policy".into(),
            sections: vec![
                Section::paragraph("Last updated: 2024"),
                Section::new(
                    "What are cookies?",
                    vec!["Small files.".into(), "They remember you.".into()],
                ),
                Section::new("Empty heading", vec![]),
            ],
            origin: ContentOrigin::Dynamic,
        }
    }

    #[test]
    fn test_markdown_structure() {
        let md = to_markdown(&page(), &RenderOptions::default()).unwrap();
        assert_eq!(
            md,
            "# Cookie Policy\n\nLast updated: 2024\n\n## What are cookies?\n\n\
             Small files.\n\nThey remember you.\n\n## Empty heading"
        );
    }

    #[test]
    fn test_markdown_frontmatter() {
        let options = RenderOptions::new().with_frontmatter(true);
        let md = to_markdown(&page(), &options).unwrap();
        assert!(md.starts_with("---\ntitle: \"Cookie Policy\"\n"));
        assert!(md.contains("language: \"en\""));
        assert!(md.contains("origin: \"dynamic\""));
        assert!(md.contains("sections: 3"));
    }

    #[test]
    fn test_frontmatter_escapes_page_id() {
        let mut page = page();
        page.doc_type = DocumentType::new("faq\"\nx");

        let md = to_markdown(&page, &RenderOptions::new().with_frontmatter(true)).unwrap();
        assert!(md.contains("page: \"faq\\\"\\nx\"\n"));
    }

    #[test]
    fn test_markdown_heading_level() {
        let options = RenderOptions::new().with_section_heading(3);
        let md = to_markdown(&page(), &options).unwrap();
        assert!(md.starts_with("## Cookie Policy"));
        assert!(md.contains("\n### What are cookies?\n"));
    }

    #[test]
    fn test_markdown_escaping() {
        let mut page = page();
        page.sections = vec![Section::paragraph("#1 rule: *never* share_keys")];

        let md = to_markdown(&page, &RenderOptions::default()).unwrap();
        assert!(md.ends_with("\\#1 rule: \\*never\\* share\\_keys"));

        let md = to_markdown(&page, &RenderOptions::new().with_escaping(false)).unwrap();
        assert!(md.ends_with("#1 rule: *never* share_keys"));
    }

    #[test]
    fn test_markdown_with_stats() {
        let result = to_markdown_with_stats(&page(), &RenderOptions::default()).unwrap();
        assert_eq!(result.stats.section_count, 3);
        assert_eq!(result.stats.heading_count, 2);
        assert_eq!(result.stats.paragraph_count, 3);
        assert_eq!(result.origin, ContentOrigin::Dynamic);
        assert!(result.stats.word_count > 0);
    }

    #[test]
    fn test_escape_yaml() {
        assert_eq!(escape_yaml("a \"b\"\nc"), "a \\\"b\\\"\\nc");
    }
}
