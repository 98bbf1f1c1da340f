//! Locate and parse the YAML front-matter block

use crate::error::ExtractorError;
use crate::types::HeaderBlock;
use docket_domain::{FieldValue, Fields};
use regex::Regex;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Opening marker at offset zero, lazily matched content, first closing marker line.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---\r?\n").expect("header pattern is valid")
});

/// Find the header block at the start of `text`
///
/// Returns `None` when the text does not start with a marker line or the
/// block is never closed.
pub fn split_header(text: &str) -> Option<HeaderBlock<'_>> {
    let captures = HEADER_RE.captures(text)?;
    let whole = captures.get(0)?;
    let content = captures.get(1)?;
    Some(HeaderBlock {
        content: content.as_str(),
        body_start: whole.end(),
    })
}

/// Parse header content into fields
///
/// Empty content (or a document that is just `null`) yields no fields.
pub fn parse_header(content: &str) -> Result<Fields, ExtractorError> {
    if content.trim().is_empty() {
        return Ok(Fields::new());
    }

    let value: Value = serde_yaml::from_str(content)?;
    match untag(value) {
        Value::Null => Ok(Fields::new()),
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| key_to_string(key).map(|key| (key, convert_value(value))))
            .collect(),
        other => Err(ExtractorError::NotAMapping(yaml_type_name(&other))),
    }
}

/// Strip YAML tags (`!foo value`) down to the tagged value
fn untag(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => untag(tagged.value),
        other => other,
    }
}

fn key_to_string(key: Value) -> Result<String, ExtractorError> {
    match untag(key) {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_string()),
        other => Err(ExtractorError::UnsupportedKey(yaml_type_name(&other).to_string())),
    }
}

/// Convert a YAML value into the domain value model
fn convert_value(value: Value) -> FieldValue {
    match untag(value) {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => FieldValue::Integer(i),
            None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => FieldValue::String(s),
        Value::Sequence(items) => FieldValue::List(items.into_iter().map(convert_value).collect()),
        Value::Mapping(mapping) => {
            // Nested mappings keep whatever keys they can render; complex keys are dropped.
            let map: BTreeMap<String, FieldValue> = mapping
                .into_iter()
                .filter_map(|(k, v)| key_to_string(k).ok().map(|k| (k, convert_value(v))))
                .collect();
            FieldValue::Map(map)
        }
        Value::Tagged(tagged) => convert_value(tagged.value),
    }
}

fn yaml_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lf_header() {
        let text = "---\ntitle: A\n---\nbody\n";
        let block = split_header(text).unwrap();
        assert_eq!(block.content, "title: A");
        assert_eq!(&text[block.body_start..], "body\n");
    }

    #[test]
    fn test_split_crlf_header() {
        let text = "---\r\ntitle: A\r\n---\r\nbody\r\n";
        let block = split_header(text).unwrap();
        assert_eq!(block.content, "title: A");
        assert_eq!(&text[block.body_start..], "body\r\n");
    }

    #[test]
    fn test_split_stops_at_first_closing_marker() {
        let text = "---\na: 1\n---\nbody\n---\nmore\n";
        let block = split_header(text).unwrap();
        assert_eq!(block.content, "a: 1");
        assert_eq!(&text[block.body_start..], "body\n---\nmore\n");
    }

    #[test]
    fn test_split_requires_marker_at_offset_zero() {
        assert!(split_header(" ---\na: 1\n---\n").is_none());
        assert!(split_header("\n---\na: 1\n---\n").is_none());
    }

    #[test]
    fn test_split_requires_newline_after_closing_marker() {
        assert!(split_header("---\na: 1\n---").is_none());
    }

    #[test]
    fn test_parse_scalars() {
        let fields = parse_header("canonical: true\ncount: 3\nratio: 0.5\ntitle: Inventory").unwrap();
        assert_eq!(fields.get("canonical"), Some(&FieldValue::Bool(true)));
        assert_eq!(fields.get("count"), Some(&FieldValue::Integer(3)));
        assert_eq!(fields.get("ratio"), Some(&FieldValue::Float(0.5)));
        assert_eq!(fields.get("title"), Some(&FieldValue::String("Inventory".into())));
    }

    #[test]
    fn test_parse_sequence_field() {
        let fields = parse_header("tags: [a, b]").unwrap();
        assert_eq!(
            fields.get("tags"),
            Some(&FieldValue::List(vec![FieldValue::String("a".into()), FieldValue::String("b".into())]))
        );
    }

    #[test]
    fn test_parse_empty_header() {
        assert!(parse_header("").unwrap().is_empty());
        assert!(parse_header("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        assert_eq!(parse_header("- a\n- b"), Err(ExtractorError::NotAMapping("sequence")));
        assert_eq!(parse_header("just words"), Err(ExtractorError::NotAMapping("string")));
    }

    #[test]
    fn test_parse_rejects_invalid_yaml() {
        let result = parse_header("title: [unclosed");
        assert!(matches!(result, Err(ExtractorError::Yaml(_))));
    }

    #[test]
    fn test_parse_stringifies_scalar_keys() {
        let fields = parse_header("1: one").unwrap();
        assert_eq!(fields.get("1"), Some(&FieldValue::String("one".into())));
    }
}
