//! Front-matter metadata model

use std::collections::BTreeMap;
use std::fmt;

/// Well-known front-matter field names
pub mod fields {
    /// Stable document identifier
    pub const DOC_ID: &str = "doc_id";
    /// Human-readable title; the grouping key for canonical uniqueness
    pub const TITLE: &str = "title";
    /// Declared [`DocType`](crate::DocType)
    pub const DOC_TYPE: &str = "doc_type";
    /// Declared [`Status`](crate::Status)
    pub const STATUS: &str = "status";
    /// Whether this is the authoritative document for its title
    pub const CANONICAL: &str = "canonical";
    /// Creation date
    pub const CREATED: &str = "created";
    /// Free-form tags
    pub const TAGS: &str = "tags";
    /// One-paragraph summary
    pub const SUMMARY: &str = "summary";

    /// Every field a complete header carries, in schema order
    pub const REQUIRED: [&str; 8] = [DOC_ID, TITLE, DOC_TYPE, STATUS, CANONICAL, CREATED, TAGS, SUMMARY];
}

/// A single front-matter value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Explicit null or empty value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer that fits in i64
    Integer(i64),
    /// Any other number
    Float(f64),
    /// String scalar
    String(String),
    /// Sequence of values
    List(Vec<FieldValue>),
    /// Nested mapping
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Name of the value's type as reported in type-mismatch messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::String(_) => "string",
            FieldValue::List(_) => "sequence",
            FieldValue::Map(_) => "mapping",
        }
    }

    /// Borrow the string contents, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::String(s) => f.write_str(s),
            FieldValue::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            FieldValue::Map(map) => {
                f.write_str("{")?;
                for (idx, (key, value)) in map.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Parsed front-matter fields keyed by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(BTreeMap<String, FieldValue>);

impl Fields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.0.insert(name.into(), value);
    }

    /// Look up a field
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Whether the field is present (a null value still counts as present)
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, FieldValue)> for Fields {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Front-matter state of a document
///
/// "No header" and "bad header" are different observations: the first is an
/// unstructured document, the second is a document whose author tried and
/// failed to declare metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum Metadata {
    /// The document has no header block
    Absent,

    /// A header block exists but is not a valid key-value mapping
    ParseError(String),

    /// A header block parsed into fields
    Present(Fields),
}

impl Metadata {
    /// Get the parsed fields, if any
    pub fn fields(&self) -> Option<&Fields> {
        match self {
            Metadata::Present(fields) => Some(fields),
            _ => None,
        }
    }

    /// Whether a header block parsed successfully
    pub fn is_present(&self) -> bool {
        matches!(self, Metadata::Present(_))
    }

    /// Look up a field on present metadata
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields().and_then(|f| f.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(FieldValue::String("x".into()).type_name(), "string");
        assert_eq!(FieldValue::Integer(1).type_name(), "integer");
        assert_eq!(FieldValue::List(vec![]).type_name(), "sequence");
        assert_eq!(FieldValue::Null.type_name(), "null");
    }

    #[test]
    fn test_display_nested_values() {
        let value = FieldValue::List(vec![
            FieldValue::String("a".into()),
            FieldValue::Integer(2),
        ]);
        assert_eq!(value.to_string(), "[a, 2]");
    }

    #[test]
    fn test_metadata_accessors() {
        let mut map = Fields::new();
        map.insert(fields::TITLE, FieldValue::String("Inventory".into()));
        let metadata = Metadata::Present(map);

        assert!(metadata.is_present());
        assert_eq!(metadata.get("title").and_then(FieldValue::as_str), Some("Inventory"));
        assert!(Metadata::Absent.get("title").is_none());
        assert!(Metadata::ParseError("bad".into()).fields().is_none());
    }

    #[test]
    fn test_null_field_counts_as_present() {
        let fields: Fields = [("summary".to_string(), FieldValue::Null)].into_iter().collect();
        assert!(fields.contains("summary"));
        assert_eq!(fields.len(), 1);
    }
}
