//! Aggregated validation results

use docket_domain::{Severity, ValidationError};
use std::collections::BTreeMap;

/// Flat, ordered findings for a batch of documents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Number of documents examined (unreadable files included)
    pub documents_checked: usize,

    /// Findings in traversal order
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Create a report
    pub fn new(documents_checked: usize, errors: Vec<ValidationError>) -> Self {
        Self {
            documents_checked,
            errors,
        }
    }

    /// True when no error-severity finding was recorded
    pub fn is_success(&self) -> bool {
        self.error_count() == 0
    }

    /// Number of error-severity findings
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warning-severity findings
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.errors.iter().filter(|e| e.severity == severity).count()
    }

    /// Finding counts keyed by kind name
    pub fn counts_by_kind(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for error in &self.errors {
            *counts.entry(error.kind.name()).or_insert(0) += 1;
        }
        counts
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} document(s) checked: {} error(s), {} warning(s)",
            self.documents_checked,
            self.error_count(),
            self.warning_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_domain::ErrorKind;

    #[test]
    fn test_warnings_do_not_fail_the_report() {
        let report = ValidationReport::new(
            1,
            vec![ValidationError::new(
                "docs/a.md",
                ErrorKind::UnexpectedFieldType {
                    field: "tags".into(),
                    expected: "sequence".into(),
                    actual: "string".into(),
                },
            )],
        );
        assert!(report.is_success());
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.summary(), "1 document(s) checked: 0 error(s), 1 warning(s)");
    }

    #[test]
    fn test_counts_by_kind() {
        let report = ValidationReport::new(
            2,
            vec![
                ValidationError::new("a.md", ErrorKind::MissingHeader),
                ValidationError::new("b.md", ErrorKind::MissingHeader),
                ValidationError::new("b.md", ErrorKind::MissingRequiredField { field: "tags".into() }),
            ],
        );
        let counts = report.counts_by_kind();
        assert_eq!(counts.get("MissingHeader"), Some(&2));
        assert_eq!(counts.get("MissingRequiredField"), Some(&1));
        assert!(!report.is_success());
    }
}
