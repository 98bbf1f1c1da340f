//! Behavioural tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{extract, Extractor};
    use docket_domain::{FieldValue, Metadata};
    use proptest::prelude::*;

    const FULL_HEADER: &str = "---\n\
doc_id: SPEC-001\n\
title: Inventory System\n\
doc_type: spec\n\
status: draft\n\
canonical: true\n\
created: 2024-05-01\n\
tags: [inventory, gameplay]\n\
summary: Item storage and stacking rules\n\
---\n\
# Inventory\n\nBody text.\n";

    #[test]
    fn test_full_header() {
        let extraction = extract(FULL_HEADER);
        let fields = extraction.metadata.fields().expect("header should parse");

        assert_eq!(fields.len(), 8);
        assert_eq!(fields.get("doc_type"), Some(&FieldValue::String("spec".into())));
        assert_eq!(fields.get("canonical"), Some(&FieldValue::Bool(true)));
        assert_eq!(fields.get("created"), Some(&FieldValue::String("2024-05-01".into())));
        assert_eq!(extraction.body, "# Inventory\n\nBody text.\n");
    }

    #[test]
    fn test_crlf_document() {
        let text = "---\r\ntitle: Windows\r\ndoc_type: guide\r\n---\r\nline one\r\nline two\r\n";
        let extraction = extract(text);

        assert_eq!(extraction.metadata.get("doc_type").and_then(FieldValue::as_str), Some("guide"));
        assert_eq!(extraction.body, "line one\r\nline two\r\n");
    }

    #[test]
    fn test_no_header_is_absent() {
        let text = "# Notes\n\nNo front-matter here.\n";
        let extraction = extract(text);

        assert_eq!(extraction.metadata, Metadata::Absent);
        assert_eq!(extraction.body, text);
    }

    #[test]
    fn test_unclosed_header_is_absent() {
        let text = "---\ntitle: Never closed\n\nbody\n";
        let extraction = extract(text);

        assert_eq!(extraction.metadata, Metadata::Absent);
        assert_eq!(extraction.body, text);
    }

    #[test]
    fn test_invalid_yaml_keeps_full_body() {
        let text = "---\ntitle: [unclosed\ndoc_type: spec\n---\n# Body survives\n";
        let extraction = extract(text);

        match &extraction.metadata {
            Metadata::ParseError(msg) => assert!(msg.contains("YAML")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
        assert_eq!(extraction.body, text);
    }

    #[test]
    fn test_non_mapping_header_is_parse_error() {
        let text = "---\n- one\n- two\n---\nbody\n";
        let extraction = extract(text);

        assert!(matches!(extraction.metadata, Metadata::ParseError(_)));
        assert_eq!(extraction.body, text);
    }

    #[test]
    fn test_empty_header_is_present_without_fields() {
        let extraction = extract("---\n\n---\nbody\n");

        assert_eq!(extraction.metadata.fields().map(|f| f.len()), Some(0));
        assert_eq!(extraction.body, "body\n");
    }

    #[test]
    fn test_extract_document_keeps_raw_content() {
        let doc = Extractor::new().extract_document("docs/specs/inventory.md", FULL_HEADER.to_string());

        assert_eq!(doc.path.to_str(), Some("docs/specs/inventory.md"));
        assert_eq!(doc.raw_content, FULL_HEADER);
        assert!(doc.metadata.is_present());
        assert!(doc.body.starts_with("# Inventory"));
    }

    proptest! {
        #[test]
        fn prop_text_without_marker_is_identity(text in "\\PC*") {
            prop_assume!(!text.starts_with("---"));
            let extraction = extract(&text);
            prop_assert_eq!(extraction.metadata, Metadata::Absent);
            prop_assert_eq!(extraction.body, text);
        }

        #[test]
        fn prop_broken_header_never_truncates(body in "[a-zA-Z0-9 #\\n]{0,64}") {
            let text = format!("---\nkey: [broken\n---\n{}", body);
            let extraction = extract(&text);
            prop_assert!(matches!(extraction.metadata, Metadata::ParseError(_)));
            prop_assert_eq!(extraction.body, text);
        }
    }
}
