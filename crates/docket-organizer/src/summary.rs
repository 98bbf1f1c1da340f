//! Batch statistics for an organize run

use docket_domain::{ClassificationDecision, ClassificationReason, Document};
use std::collections::BTreeMap;
use std::path::Path;

/// Counters collected while planning an organize run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizeSummary {
    /// Candidate files found, including unreadable ones
    pub total_files: usize,

    /// Candidates already under the docs directory
    pub files_in_docs: usize,

    /// Documents whose header parsed
    pub files_with_front_matter: usize,

    /// Documents with at least one metadata problem, plus unreadable files
    pub files_with_issues: usize,

    /// Documents with a pending move
    pub files_to_move: usize,

    /// Pending moves per destination (`to_inbox`, `to_specs`, ...)
    pub moves_by_destination: BTreeMap<String, usize>,

    /// Problem counts per reason label
    pub issues_summary: BTreeMap<String, usize>,
}

impl OrganizeSummary {
    /// Create new empty counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a loaded document
    pub fn record_document(&mut self, doc: &Document, docs_dir: &Path) {
        self.total_files += 1;
        if doc.path.starts_with(docs_dir) {
            self.files_in_docs += 1;
        }
        if doc.metadata.is_present() {
            self.files_with_front_matter += 1;
        }
    }

    /// Record a file that could not be read
    pub fn record_read_failure(&mut self, path: &Path, docs_dir: &Path) {
        self.total_files += 1;
        if path.starts_with(docs_dir) {
            self.files_in_docs += 1;
        }
        self.files_with_issues += 1;
        *self.issues_summary.entry("unreadable".to_string()).or_insert(0) += 1;
    }

    /// Record a classification decision
    pub fn record_decision(&mut self, decision: &ClassificationDecision, staging: &Path) {
        let issues: Vec<&ClassificationReason> = decision.reasons.iter().filter(|r| is_issue(r)).collect();
        if !issues.is_empty() {
            self.files_with_issues += 1;
        }
        for reason in issues {
            *self.issues_summary.entry(reason.label().to_string()).or_insert(0) += 1;
        }

        if let Some(target) = decision.target() {
            self.files_to_move += 1;
            let parent = target.parent().unwrap_or(Path::new(""));
            let key = if parent == staging {
                "to_inbox".to_string()
            } else {
                let name = parent.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                format!("to_{}", name)
            };
            *self.moves_by_destination.entry(key).or_insert(0) += 1;
        }
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Documentation Organization Analysis".to_string(),
            "===================================".to_string(),
            format!("Total markdown files found: {}", self.total_files),
            format!("Files already in docs: {}", self.files_in_docs),
            format!("Files with front-matter: {}", self.files_with_front_matter),
            format!("Files with issues: {}", self.files_with_issues),
            format!("Files needing to be moved: {}", self.files_to_move),
        ];

        if !self.moves_by_destination.is_empty() {
            lines.push(String::new());
            lines.push("Moves by destination:".to_string());
            for (dest, count) in &self.moves_by_destination {
                lines.push(format!("  {}: {} files", dest, count));
            }
        }

        if !self.issues_summary.is_empty() {
            lines.push(String::new());
            lines.push("Common issues:".to_string());
            for (issue, count) in &self.issues_summary {
                lines.push(format!("  {}: {} files", issue, count));
            }
        }

        lines.join("\n")
    }
}

// Placement reasons describe where a file is, not what is wrong with it.
fn is_issue(reason: &ClassificationReason) -> bool {
    !matches!(
        reason,
        ClassificationReason::InStaging | ClassificationReason::WrongDirectory { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_domain::Metadata;
    use std::path::PathBuf;

    #[test]
    fn test_summary_creation() {
        let summary = OrganizeSummary::new();
        assert_eq!(summary.total_files, 0);
        assert!(summary.summary().contains("Files needing to be moved: 0"));
    }

    #[test]
    fn test_record_decisions() {
        let staging = Path::new("docs/_inbox");
        let mut summary = OrganizeSummary::new();

        summary.record_decision(
            &ClassificationDecision::new(
                "a.md",
                Some(PathBuf::from("docs/_inbox/a.md")),
                vec![ClassificationReason::NoHeader],
            ),
            staging,
        );
        summary.record_decision(
            &ClassificationDecision::new(
                "b.md",
                Some(PathBuf::from("docs/specs/b.md")),
                vec![ClassificationReason::WrongDirectory {
                    expected: "specs".to_string(),
                }],
            ),
            staging,
        );

        assert_eq!(summary.files_to_move, 2);
        assert_eq!(summary.files_with_issues, 1);
        assert_eq!(summary.moves_by_destination.get("to_inbox"), Some(&1));
        assert_eq!(summary.moves_by_destination.get("to_specs"), Some(&1));
        assert_eq!(summary.issues_summary.get("no header"), Some(&1));
    }

    #[test]
    fn test_record_documents() {
        let docs_dir = Path::new("docs");
        let mut summary = OrganizeSummary::new();

        summary.record_document(&Document::new("notes.md", String::new(), Metadata::Absent, String::new()), docs_dir);
        summary.record_read_failure(Path::new("docs/bad.md"), docs_dir);

        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.files_in_docs, 1);
        assert_eq!(summary.files_with_front_matter, 0);
        assert_eq!(summary.issues_summary.get("unreadable"), Some(&1));
    }
}
