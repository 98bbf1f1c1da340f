//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use docket_domain::{ClassificationDecision, ValidationError};
use docket_organizer::{ApplyOutcome, OrganizePlan};
use docket_validator::ValidationReport;
use serde_json::{json, Value};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Whether human-oriented status lines should be printed.
    pub fn is_verbose_format(&self) -> bool {
        self.format == OutputFormat::Table
    }

    /// Format an organize run: the plan and, when moves were applied, their outcome.
    pub fn format_organize(&self, plan: &OrganizePlan, outcome: Option<&ApplyOutcome>) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_organize_json(plan, outcome),
            OutputFormat::Table => Ok(self.format_organize_table(plan, outcome)),
            OutputFormat::Quiet => Ok(format_organize_quiet(plan, outcome)),
        }
    }

    /// Format validation results.
    pub fn format_validation(&self, report: &ValidationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "documents_checked": report.documents_checked,
                    "success": report.is_success(),
                    "error_count": report.error_count(),
                    "warning_count": report.warning_count(),
                    "findings": report.errors.iter().map(finding_json).collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut out = Vec::new();
                if !report.errors.is_empty() {
                    out.push(self.findings_table(&report.errors));
                }
                let summary = report.summary();
                out.push(if report.is_success() {
                    self.success(&summary)
                } else {
                    self.error(&summary)
                });
                Ok(out.join("\n"))
            }
            OutputFormat::Quiet => {
                let mut paths: Vec<String> = Vec::new();
                for finding in report.errors.iter().filter(|e| e.is_error()) {
                    let path = display(&finding.path);
                    if !paths.contains(&path) {
                        paths.push(path);
                    }
                }
                Ok(paths.join("\n"))
            }
        }
    }

    fn format_organize_json(&self, plan: &OrganizePlan, outcome: Option<&ApplyOutcome>) -> Result<String> {
        let summary = &plan.summary;
        let mut value = json!({
            "summary": {
                "total_files": summary.total_files,
                "files_in_docs": summary.files_in_docs,
                "files_with_front_matter": summary.files_with_front_matter,
                "files_with_issues": summary.files_with_issues,
                "files_to_move": summary.files_to_move,
                "moves_by_destination": summary.moves_by_destination,
                "issues_summary": summary.issues_summary,
            },
            "decisions": plan.decisions.iter().map(decision_json).collect::<Vec<_>>(),
            "read_failures": plan.read_failures.iter().map(finding_json).collect::<Vec<_>>(),
            "applied": outcome.is_some(),
        });

        if let Some(outcome) = outcome {
            value["moves"] = json!({
                "attempted": outcome.moves.attempted,
                "succeeded": outcome.moves.succeeded(),
                "performed": outcome
                    .moves
                    .performed
                    .iter()
                    .map(|(from, to)| json!({ "from": display(from), "to": display(to) }))
                    .collect::<Vec<_>>(),
                "failures": outcome.moves.failures.iter().map(finding_json).collect::<Vec<_>>(),
                "relinked": outcome.relinked.iter().map(|p| display(p)).collect::<Vec<_>>(),
                "report": outcome.report_path.as_deref().map(display),
            });
        }

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_organize_table(&self, plan: &OrganizePlan, outcome: Option<&ApplyOutcome>) -> String {
        let mut out = vec![plan.summary.summary()];

        if !plan.read_failures.is_empty() {
            out.push(String::new());
            for failure in &plan.read_failures {
                out.push(self.warning(&failure.to_string()));
            }
        }

        out.push(String::new());
        if plan.decisions.is_empty() {
            out.push(self.success("All documents are in place."));
        } else {
            out.push(self.decisions_table(&plan.decisions));
        }

        if let Some(outcome) = outcome {
            out.push(String::new());
            for (from, to) in &outcome.moves.performed {
                out.push(self.success(&format!("Moved: {} → {}", from.display(), to.display())));
            }
            for failure in &outcome.moves.failures {
                out.push(self.error(&failure.to_string()));
            }
            for path in &outcome.relinked {
                out.push(self.info(&format!("Updated links in {}", path.display())));
            }
            out.push(format!(
                "Successfully moved {}/{} files",
                outcome.moves.succeeded(),
                outcome.moves.attempted
            ));
            if let Some(report) = &outcome.report_path {
                out.push(self.info(&format!("Organization report saved to: {}", report.display())));
            }
        }

        out.join("\n")
    }

    fn decisions_table(&self, decisions: &[ClassificationDecision]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Source", "Suggested", "Reasons"]);

        for decision in decisions {
            let suggested = match decision.target() {
                Some(target) => display(target),
                None => "(stays)".to_string(),
            };
            let reasons = decision
                .reasons
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            builder.push_record([display(&decision.source), suggested, reasons]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn findings_table(&self, findings: &[ValidationError]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Severity", "Path", "Kind", "Message"]);

        for finding in findings {
            let severity = if finding.is_error() {
                self.colorize(finding.severity.as_str(), "red")
            } else {
                self.colorize(finding.severity.as_str(), "yellow")
            };
            builder.push_record([
                severity,
                display(&finding.path),
                finding.kind.name().to_string(),
                finding.message(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Quiet mode: one pending (or performed) move per line.
fn format_organize_quiet(plan: &OrganizePlan, outcome: Option<&ApplyOutcome>) -> String {
    match outcome {
        Some(outcome) => outcome
            .moves
            .performed
            .iter()
            .map(|(_, to)| display(to))
            .collect::<Vec<_>>()
            .join("\n"),
        None => plan
            .pending_moves()
            .map(|d| d.describe_move())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn decision_json(decision: &ClassificationDecision) -> Value {
    json!({
        "source": display(&decision.source),
        "suggested": decision.suggested.as_deref().map(display),
        "needs_move": decision.needs_move(),
        "reasons": decision.reasons.iter().map(|r| r.to_string()).collect::<Vec<_>>(),
    })
}

fn finding_json(finding: &ValidationError) -> Value {
    json!({
        "path": display(&finding.path),
        "severity": finding.severity.as_str(),
        "kind": finding.kind.name(),
        "message": finding.message(),
    })
}

/// Render a repository-relative path with forward slashes.
fn display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
