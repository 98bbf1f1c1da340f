//! Per-document schema checks

use crate::canonical::canonical_duplicates;
use crate::{SchemaConfig, ValidationReport};
use chrono::NaiveDate;
use docket_domain::{fields, DocType, Document, ErrorKind, FieldValue, Fields, Metadata, Status, ValidationError};
use std::path::Path;
use tracing::{debug, info};

/// The SchemaValidator checks front-matter before documents are accepted
pub struct SchemaValidator {
    config: SchemaConfig,
}

impl SchemaValidator {
    /// Create a new SchemaValidator with the given configuration
    pub fn new(config: SchemaConfig) -> Self {
        Self { config }
    }

    /// Create a SchemaValidator with default configuration
    pub fn default_config() -> Self {
        Self::new(SchemaConfig::default())
    }

    /// Validate one document's metadata
    ///
    /// A document without usable metadata yields exactly one finding and no
    /// field-level checks.
    pub fn validate_document(&self, doc: &Document) -> Vec<ValidationError> {
        let path = doc.path.as_path();
        let present = match &doc.metadata {
            Metadata::Absent => return vec![ValidationError::new(path, ErrorKind::MissingHeader)],
            Metadata::ParseError(message) => {
                return vec![ValidationError::new(
                    path,
                    ErrorKind::HeaderParseFailure {
                        message: message.clone(),
                    },
                )]
            }
            Metadata::Present(present) => present,
        };

        let mut errors = Vec::new();

        // 1. Required fields
        for field in &self.config.required_fields {
            if !present.contains(field) {
                errors.push(ValidationError::new(
                    path,
                    ErrorKind::MissingRequiredField { field: field.clone() },
                ));
            }
        }

        // 2. Enumerated fields
        let doc_type = check_enum(path, present, fields::DOC_TYPE, |s| DocType::parse(s).is_some(), DocType::valid_names());
        let status = check_enum(path, present, fields::STATUS, |s| Status::parse(s).is_some(), Status::valid_names());
        errors.extend(doc_type);
        errors.extend(status);

        // 3. canonical must be a boolean
        if let Some(value) = present.get(fields::CANONICAL) {
            if value.as_bool().is_none() {
                errors.push(ValidationError::new(
                    path,
                    ErrorKind::TypeMismatch {
                        field: fields::CANONICAL.to_string(),
                        expected: "boolean".to_string(),
                        actual: value.type_name().to_string(),
                    },
                ));
            }
        }

        // 4. Shape warnings
        if self.config.check_created_date {
            if let Some(value) = present.get(fields::CREATED) {
                if !is_iso_date(value) {
                    errors.push(ValidationError::new(
                        path,
                        ErrorKind::InvalidDate {
                            field: fields::CREATED.to_string(),
                            value: value.to_string(),
                        },
                    ));
                }
            }
        }
        if self.config.check_tags_list {
            if let Some(value) = present.get(fields::TAGS) {
                if !matches!(value, FieldValue::List(_)) {
                    errors.push(ValidationError::new(
                        path,
                        ErrorKind::UnexpectedFieldType {
                            field: fields::TAGS.to_string(),
                            expected: "sequence".to_string(),
                            actual: value.type_name().to_string(),
                        },
                    ));
                }
            }
        }

        debug!("validated {}: {} finding(s)", path.display(), errors.len());
        errors
    }

    /// Per-document findings, with canonical duplicates appended to the
    /// document they concern
    ///
    /// The outer vector is parallel to `docs`.
    pub fn findings_per_document(&self, docs: &[Document]) -> Vec<Vec<ValidationError>> {
        let mut buckets: Vec<Vec<ValidationError>> = docs.iter().map(|doc| self.validate_document(doc)).collect();

        // Needs every document's metadata, so it runs after the per-document pass.
        for (idx, duplicate) in canonical_duplicates(docs) {
            buckets[idx].push(duplicate);
        }

        buckets
    }

    /// Validate a whole document set
    ///
    /// Findings come out in input order; validation never mutates documents.
    pub fn validate_batch(&self, docs: &[Document]) -> ValidationReport {
        let errors: Vec<ValidationError> = self.findings_per_document(docs).into_iter().flatten().collect();
        let report = ValidationReport::new(docs.len(), errors);
        info!("{}", report.summary());
        report
    }
}

/// Check an enumerated string field; absent fields are left to the required-field check
fn check_enum(
    path: &Path,
    present: &Fields,
    field: &str,
    is_valid: impl Fn(&str) -> bool,
    allowed: Vec<&'static str>,
) -> Option<ValidationError> {
    let value = present.get(field)?;
    if value.as_str().is_some_and(|s| is_valid(s)) {
        return None;
    }
    Some(ValidationError::new(
        path,
        ErrorKind::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
            allowed: allowed.into_iter().map(String::from).collect(),
        },
    ))
}

fn is_iso_date(value: &FieldValue) -> bool {
    value
        .as_str()
        .is_some_and(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_fields() -> Fields {
        let mut map = Fields::new();
        map.insert(fields::DOC_ID, FieldValue::String("SPEC-001".into()));
        map.insert(fields::TITLE, FieldValue::String("Inventory".into()));
        map.insert(fields::DOC_TYPE, FieldValue::String("spec".into()));
        map.insert(fields::STATUS, FieldValue::String("draft".into()));
        map.insert(fields::CANONICAL, FieldValue::Bool(true));
        map.insert(fields::CREATED, FieldValue::String("2024-05-01".into()));
        map.insert(fields::TAGS, FieldValue::List(vec![FieldValue::String("inventory".into())]));
        map.insert(fields::SUMMARY, FieldValue::String("Item storage".into()));
        map
    }

    fn doc_with(path: &str, map: Fields) -> Document {
        Document::new(path, String::new(), Metadata::Present(map), String::new())
    }

    #[test]
    fn test_complete_document_passes() {
        let validator = SchemaValidator::default_config();
        let errors = validator.validate_document(&doc_with("docs/specs/a.md", complete_fields()));
        assert!(errors.is_empty(), "unexpected findings: {:?}", errors);
    }

    #[test]
    fn test_missing_summary_only() {
        let validator = SchemaValidator::default_config();
        let map: Fields = complete_fields()
            .iter()
            .filter(|(k, _)| k.as_str() != fields::SUMMARY)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let errors = validator.validate_document(&doc_with("docs/specs/a.md", map));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::MissingRequiredField { field: "summary".into() });
        assert_eq!(errors[0].kind.name(), "MissingRequiredField");
    }

    #[test]
    fn test_missing_fields_follow_schema_order() {
        let validator = SchemaValidator::default_config();
        let errors = validator.validate_document(&doc_with("a.md", Fields::new()));

        let missing: Vec<String> = errors
            .iter()
            .filter_map(|e| match &e.kind {
                ErrorKind::MissingRequiredField { field } => Some(field.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(missing, fields::REQUIRED.to_vec());
    }

    #[test]
    fn test_absent_header_is_single_terminal_error() {
        let validator = SchemaValidator::default_config();
        let doc = Document::new("docs/a.md", String::new(), Metadata::Absent, String::new());

        let errors = validator.validate_document(&doc);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::MissingHeader);
    }

    #[test]
    fn test_parse_error_is_distinct_from_absent() {
        let validator = SchemaValidator::default_config();
        let doc = Document::new("docs/a.md", String::new(), Metadata::ParseError("bad".into()), String::new());

        let errors = validator.validate_document(&doc);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::HeaderParseFailure { message: "bad".into() });
    }

    #[test]
    fn test_invalid_enum_values() {
        let validator = SchemaValidator::default_config();
        let mut map = complete_fields();
        map.insert(fields::DOC_TYPE, FieldValue::String("memo".into()));
        map.insert(fields::STATUS, FieldValue::String("published".into()));

        let errors = validator.validate_document(&doc_with("a.md", map));

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0].message(),
            "Invalid doc_type: memo. Must be one of: spec, rfc, adr, plan, finding, guide, glossary, reference"
        );
        assert_eq!(
            errors[1].message(),
            "Invalid status: published. Must be one of: draft, active, superseded, rejected, archived"
        );
    }

    #[test]
    fn test_canonical_type_mismatch() {
        let validator = SchemaValidator::default_config();
        let mut map = complete_fields();
        map.insert(fields::CANONICAL, FieldValue::String("yes".into()));

        let errors = validator.validate_document(&doc_with("a.md", map));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), "canonical must be boolean, got: string");
    }

    #[test]
    fn test_shape_warnings() {
        let validator = SchemaValidator::default_config();
        let mut map = complete_fields();
        map.insert(fields::CREATED, FieldValue::String("last tuesday".into()));
        map.insert(fields::TAGS, FieldValue::String("a, b".into()));

        let errors = validator.validate_document(&doc_with("a.md", map.clone()));
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| !e.is_error()));

        let quiet = SchemaValidator::new(SchemaConfig::errors_only());
        assert!(quiet.validate_document(&doc_with("a.md", map)).is_empty());
    }

    #[test]
    fn test_batch_interleaves_duplicates_in_input_order() {
        let validator = SchemaValidator::default_config();
        let first = doc_with("docs/specs/a.md", complete_fields());
        let broken = Document::new("docs/b.md", String::new(), Metadata::Absent, String::new());
        let mut dup_fields = complete_fields();
        dup_fields.insert(fields::SUMMARY, FieldValue::Null);
        let second = doc_with("docs/specs/c.md", dup_fields);

        let report = validator.validate_batch(&[first, broken, second]);

        assert_eq!(report.documents_checked, 3);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].kind, ErrorKind::MissingHeader);
        assert_eq!(
            report.errors[1].kind,
            ErrorKind::DuplicateCanonical {
                title: "Inventory".into(),
                original: "docs/specs/a.md".into(),
            }
        );
        assert!(!report.is_success());
    }
}
