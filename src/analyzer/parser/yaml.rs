//! YAML parsing for manifest streams.

use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;

/// Parse a string containing zero or more `---`-separated YAML documents.
///
/// Documents are returned in stream order, including empty ones; use
/// [`non_empty_documents`] to drop those. Syntax errors are returned as-is.
pub fn parse_documents(content: &str) -> Result<Vec<Value>, serde_yaml::Error> {
    serde_yaml::Deserializer::from_str(content)
        .map(Value::deserialize)
        .collect()
}

/// Parse a manifest file.
pub fn parse_file(path: &Path) -> crate::Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_documents(&content)?)
}

/// Whether a parsed document is empty or falsy (`null`, `false`, `0`, `""`,
/// `[]`, `{}`). Such documents are skipped entirely by the analyzer.
pub fn is_empty_document(document: &Value) -> bool {
    match document {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(tagged) => is_empty_document(&tagged.value),
    }
}

/// Drop empty documents, keeping the order of the rest.
pub fn non_empty_documents(documents: &[Value]) -> Vec<&Value> {
    let total = documents.len();
    let kept: Vec<&Value> = documents
        .iter()
        .filter(|doc| !is_empty_document(doc))
        .collect();
    if kept.len() < total {
        log::trace!("skipped {} empty document(s)", total - kept.len());
    }
    kept
}
