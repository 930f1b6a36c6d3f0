//! Dotted-path lookup with translation fallback.

use serde_json::Value;

use super::Translator;
use crate::model::LocalizedDocument;

/// Resolve a string at a dotted path inside an optional JSON value.
///
/// Traversal stops with `None` as soon as the current value is missing,
/// null, or not an object. The final value must be a string.
pub fn lookup_path<'a>(root: Option<&'a Value>, path: &str) -> Option<&'a str> {
    let mut current = root?;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            _ => return None,
        };
    }
    current.as_str()
}

/// Resolve a string at a dotted path inside an optional document.
pub fn lookup_document<'a>(doc: Option<&'a LocalizedDocument>, path: &str) -> Option<&'a str> {
    let doc = doc?;
    match path.split_once('.') {
        Some((head, rest)) => lookup_path(doc.get(head), rest),
        None => doc.get(path).and_then(Value::as_str),
    }
}

/// Resolve a string at `path`, or the translation of `<namespace>.<path>`.
///
/// Missing paths are expected and never reported.
pub fn resolve_text(
    root: Option<&Value>,
    path: &str,
    translator: &Translator,
    namespace: &str,
) -> String {
    match lookup_path(root, path) {
        Some(text) => text.to_string(),
        None => translator.t(&namespaced(namespace, path)),
    }
}

/// Like [`resolve_text`], reading from a fetched document.
pub fn resolve_document_text(
    doc: Option<&LocalizedDocument>,
    path: &str,
    translator: &Translator,
    namespace: &str,
) -> String {
    match lookup_document(doc, path) {
        Some(text) => text.to_string(),
        None => translator.t(&namespaced(namespace, path)),
    }
}

fn namespaced(namespace: &str, path: &str) -> String {
    if namespace.is_empty() {
        path.to_string()
    } else {
        format!("{}.{}", namespace, path)
    }
}
