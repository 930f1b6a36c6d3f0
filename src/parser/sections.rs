//! Section extraction from localized content maps.

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::ParseOptions;
use crate::model::Section;

/// Sub-field of a nested section that holds its heading.
const SECTION_TITLE_FIELD: &str = "title";

/// Parse a content map into sections using `options`.
pub fn parse_sections(content: &Map<String, Value>, options: &ParseOptions) -> Vec<Section> {
    SectionParser::new(options.clone()).parse(content)
}

/// Get the page title stored under the title key, if it is a string.
pub fn document_title(content: &Map<String, Value>, options: &ParseOptions) -> Option<String> {
    content
        .get(&options.title_key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Order paragraph keys: numerically by suffix when every key is `p<N>`,
/// lexically otherwise.
pub fn order_paragraph_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    sort_paragraph_keys(paragraph_key_regex(), keys.into_iter().collect())
}

fn sort_paragraph_keys<'a>(re: &Regex, mut keys: Vec<&'a str>) -> Vec<&'a str> {
    let numbers: Option<Vec<u64>> = keys.iter().map(|k| paragraph_number(re, k)).collect();

    match numbers {
        Some(numbers) => {
            let mut pairs: Vec<(u64, &str)> = numbers.into_iter().zip(keys).collect();
            pairs.sort_by(|a, b| match a.0.cmp(&b.0) {
                Ordering::Equal => a.1.cmp(b.1),
                other => other,
            });
            pairs.into_iter().map(|(_, k)| k).collect()
        }
        None => {
            keys.sort_unstable();
            keys
        }
    }
}

fn paragraph_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^p(\d+)$").unwrap())
}

/// Suffix of a `p<N>` key. Suffixes that overflow `u64` do not count as numbered.
fn paragraph_number(re: &Regex, key: &str) -> Option<u64> {
    re.captures(key)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Section parser holding the recognized key list.
#[derive(Debug, Clone)]
pub struct SectionParser {
    options: ParseOptions,
    paragraph_key: &'static Regex,
}

impl SectionParser {
    /// Create a new section parser.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            paragraph_key: paragraph_key_regex(),
        }
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a content map into sections.
    ///
    /// Keys are visited in the order of the recognized key list; keys
    /// absent from `content` are skipped.
    pub fn parse(&self, content: &Map<String, Value>) -> Vec<Section> {
        let mut sections = Vec::new();

        for key in &self.options.keys {
            let Some(value) = content.get(key) else {
                continue;
            };

            match value {
                Value::String(text) => {
                    if self.options.is_title_key(key) {
                        continue;
                    }
                    sections.push(Section::paragraph(text.clone()));
                }
                Value::Object(fields) => {
                    if let Some(section) = self.parse_nested(fields) {
                        sections.push(section);
                    } else {
                        log::trace!("Skipping empty section {:?}", key);
                    }
                }
                other => {
                    log::trace!("Skipping {:?}: unsupported value {}", key, type_name(other));
                }
            }
        }

        log::debug!(
            "Parsed {} sections from {} content keys",
            sections.len(),
            content.len()
        );
        sections
    }

    fn parse_nested(&self, fields: &Map<String, Value>) -> Option<Section> {
        let title = fields
            .get(SECTION_TITLE_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let candidates = fields
            .keys()
            .map(String::as_str)
            .filter(|k| *k != SECTION_TITLE_FIELD);

        let ordered = sort_paragraph_keys(self.paragraph_key, candidates.collect());
        let paragraphs: Vec<String> = ordered
            .into_iter()
            .filter_map(|k| fields.get(k).and_then(Value::as_str))
            .map(str::to_string)
            .collect();

        let section = Section::new(title, paragraphs);
        (!section.is_empty()).then_some(section)
    }
}

impl Default for SectionParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test content must be an object"),
        }
    }

    fn options(keys: &[&str]) -> ParseOptions {
        ParseOptions::new().with_keys(keys.iter().copied())
    }

    #[test]
    fn test_string_value_becomes_untitled_section() {
        let map = content(json!({"intro": "Welcome."}));
        let sections = parse_sections(&map, &options(&["intro"]));
        assert_eq!(sections, vec![Section::paragraph("Welcome.")]);
    }

    #[test]
    fn test_string_title_key_is_skipped() {
        let map = content(json!({"title": "Cookie Policy", "intro": "Hi"}));
        let sections = parse_sections(&map, &options(&["title", "intro"]));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].paragraphs, vec!["Hi"]);
    }

    #[test]
    fn test_numeric_paragraph_order() {
        let map = content(json!({
            "body": {"p10": "ten", "p2": "two", "p1": "one", "title": "Body"}
        }));
        let sections = parse_sections(&map, &options(&["body"]));
        assert_eq!(sections[0].title, "Body");
        assert_eq!(sections[0].paragraphs, vec!["one", "two", "ten"]);
    }

    #[test]
    fn test_lexical_order_for_mixed_keys() {
        let map = content(json!({"body": {"summary": "S", "intro": "I"}}));
        let sections = parse_sections(&map, &options(&["body"]));
        assert_eq!(sections[0].paragraphs, vec!["I", "S"]);
    }

    #[test]
    fn test_one_unnumbered_key_forces_lexical() {
        let map = content(json!({"body": {"p10": "ten", "p2": "two", "note": "n"}}));
        let sections = parse_sections(&map, &options(&["body"]));
        assert_eq!(sections[0].paragraphs, vec!["n", "ten", "two"]);
    }

    #[test]
    fn test_non_string_sub_values_discarded() {
        let map = content(json!({
            "body": {"p1": "one", "p2": 42, "p3": {"deep": "x"}, "p4": null}
        }));
        let sections = parse_sections(&map, &options(&["body"]));
        assert_eq!(sections[0].paragraphs, vec!["one"]);
    }

    #[test]
    fn test_empty_nested_section_not_emitted() {
        let map = content(json!({"a": {}, "b": {"title": ""}, "c": {"p1": 1}}));
        let sections = parse_sections(&map, &options(&["a", "b", "c"]));
        assert!(sections.is_empty());
    }

    #[test]
    fn test_title_only_section_emitted() {
        let map = content(json!({"a": {"title": "Heading"}}));
        let sections = parse_sections(&map, &options(&["a"]));
        assert_eq!(sections, vec![Section::new("Heading", vec![])]);
    }

    #[test]
    fn test_non_string_title_defaults_to_empty() {
        let map = content(json!({"a": {"title": 7, "p1": "one"}}));
        let sections = parse_sections(&map, &options(&["a"]));
        assert_eq!(sections[0].title, "");
        assert_eq!(sections[0].paragraphs, vec!["one"]);
    }

    #[test]
    fn test_key_list_order_wins_over_document_order() {
        let map = content(json!({"second": "2", "first": "1"}));
        let sections = parse_sections(&map, &options(&["first", "second"]));
        assert_eq!(sections[0].paragraphs, vec!["1"]);
        assert_eq!(sections[1].paragraphs, vec!["2"]);
    }

    #[test]
    fn test_unrecognized_and_malformed_values_skipped() {
        let map = content(json!({
            "unknown": "ignored",
            "list": ["a", "b"],
            "flag": true,
            "count": 3,
            "missing": null
        }));
        let sections = parse_sections(&map, &options(&["list", "flag", "count", "missing"]));
        assert!(sections.is_empty());
    }

    #[test]
    fn test_document_title() {
        let map = content(json!({"title": "Terms"}));
        assert_eq!(
            document_title(&map, &ParseOptions::default()),
            Some("Terms".to_string())
        );

        let map = content(json!({"title": {"p1": "x"}}));
        assert_eq!(document_title(&map, &ParseOptions::default()), None);
    }

    #[test]
    fn test_order_paragraph_keys() {
        assert_eq!(order_paragraph_keys(["p3", "p1", "p20"]), vec!["p1", "p3", "p20"]);
        assert_eq!(order_paragraph_keys(["p3", "x", "p1"]), vec!["p1", "p3", "x"]);
        assert!(order_paragraph_keys(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_overflowing_suffix_is_not_numbered() {
        assert_eq!(
            order_paragraph_keys(["p2", "p99999999999999999999999"]),
            vec!["p2", "p99999999999999999999999"]
        );
        assert_eq!(
            order_paragraph_keys(["p10", "p99999999999999999999999"]),
            vec!["p10", "p99999999999999999999999"]
        );
    }
}
