//! Cross-document canonical uniqueness

use docket_domain::{fields, Document, ErrorKind, FieldValue, ValidationError};
use std::collections::HashMap;
use std::path::Path;

/// Title used for canonical documents that declare none
const UNTITLED: &str = "Unknown";

/// Find every canonical document that repeats an earlier canonical title
///
/// Only documents with present metadata and `canonical: true` take part.
/// The first document seen for a title is the original; each later one
/// yields a `DuplicateCanonical` finding. Returned pairs carry the index of
/// the offending document in `docs`, in input order.
pub fn canonical_duplicates(docs: &[Document]) -> Vec<(usize, ValidationError)> {
    let mut originals: HashMap<String, &Path> = HashMap::new();
    let mut duplicates = Vec::new();

    for (idx, doc) in docs.iter().enumerate() {
        if doc.metadata.get(fields::CANONICAL) != Some(&FieldValue::Bool(true)) {
            continue;
        }
        let title = match doc.metadata.get(fields::TITLE) {
            Some(value) => value.to_string(),
            None => UNTITLED.to_string(),
        };

        match originals.get(&title) {
            Some(original) => duplicates.push((
                idx,
                ValidationError::new(
                    &doc.path,
                    ErrorKind::DuplicateCanonical {
                        title,
                        original: original.to_path_buf(),
                    },
                ),
            )),
            None => {
                originals.insert(title, &doc.path);
            }
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_domain::{Fields, Metadata};

    fn canonical(path: &str, title: Option<&str>, flag: FieldValue) -> Document {
        let mut map = Fields::new();
        if let Some(title) = title {
            map.insert(fields::TITLE, FieldValue::String(title.to_string()));
        }
        map.insert(fields::CANONICAL, flag);
        Document::new(path, String::new(), Metadata::Present(map), String::new())
    }

    #[test]
    fn test_three_canonicals_yield_two_duplicates() {
        let docs = vec![
            canonical("docs/specs/a.md", Some("Inventory"), FieldValue::Bool(true)),
            canonical("docs/specs/b.md", Some("Inventory"), FieldValue::Bool(true)),
            canonical("docs/specs/c.md", Some("Other"), FieldValue::Bool(true)),
            canonical("docs/specs/d.md", Some("Inventory"), FieldValue::Bool(true)),
        ];

        let duplicates = canonical_duplicates(&docs);

        assert_eq!(duplicates.len(), 2);
        assert_eq!(duplicates[0].0, 1);
        assert_eq!(duplicates[1].0, 3);
        for (_, error) in &duplicates {
            match &error.kind {
                ErrorKind::DuplicateCanonical { title, original } => {
                    assert_eq!(title, "Inventory");
                    assert_eq!(original, Path::new("docs/specs/a.md"));
                }
                other => panic!("Expected DuplicateCanonical, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_canonical_documents_are_ignored() {
        let docs = vec![
            canonical("a.md", Some("Inventory"), FieldValue::Bool(true)),
            canonical("b.md", Some("Inventory"), FieldValue::Bool(false)),
            canonical("c.md", Some("Inventory"), FieldValue::String("true".into())),
        ];
        assert!(canonical_duplicates(&docs).is_empty());
    }

    #[test]
    fn test_untitled_canonicals_share_a_group() {
        let docs = vec![
            canonical("a.md", None, FieldValue::Bool(true)),
            canonical("b.md", None, FieldValue::Bool(true)),
        ];
        let duplicates = canonical_duplicates(&docs);
        assert_eq!(duplicates.len(), 1);
        assert!(duplicates[0].1.message().contains("'Unknown'"));
    }
}
