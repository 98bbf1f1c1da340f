//! Organize and validate runs over a repository

use crate::loader::load_document;
use crate::mover::{apply_moves, MoveOutcome};
use crate::relink::update_cross_references;
use crate::report::{render_report, write_report};
use crate::{FsTree, OrganizeSummary, OrganizerConfig, OrganizerError, ScanEntry, ScanResult, Scanner};
use chrono::Utc;
use docket_classifier::{Classifier, ClassifierConfig};
use docket_domain::{ClassificationDecision, Document, ValidationError};
use docket_extractor::Extractor;
use docket_validator::{SchemaConfig, SchemaValidator, ValidationReport};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Everything learned about a repository before any file is touched
#[derive(Debug, Clone, Default)]
pub struct OrganizePlan {
    /// Loaded documents, in traversal order
    pub documents: Vec<Document>,

    /// Files that could not be read or walked
    pub read_failures: Vec<ValidationError>,

    /// Decisions for documents that are flagged
    pub decisions: Vec<ClassificationDecision>,

    /// Batch statistics
    pub summary: OrganizeSummary,
}

impl OrganizePlan {
    /// Decisions that would move a file
    pub fn pending_moves(&self) -> impl Iterator<Item = &ClassificationDecision> {
        self.decisions.iter().filter(|d| d.needs_move())
    }

    /// Whether nothing needs to move
    pub fn is_settled(&self) -> bool {
        self.pending_moves().next().is_none()
    }
}

/// What applying a plan changed on disk
#[derive(Debug, Clone, Default)]
pub struct ApplyOutcome {
    /// Move results
    pub moves: MoveOutcome,

    /// Moved files whose links were rewritten
    pub relinked: Vec<PathBuf>,

    /// Report location, when one was written
    pub report_path: Option<PathBuf>,
}

/// The Organizer drives extraction, classification, validation and moves
pub struct Organizer {
    extractor: Extractor,
    classifier: Classifier,
    validator: SchemaValidator,
    config: OrganizerConfig,
}

impl Organizer {
    /// Create an Organizer, validating every configuration section
    pub fn new(
        layout: ClassifierConfig,
        schema: SchemaConfig,
        config: OrganizerConfig,
    ) -> Result<Self, OrganizerError> {
        layout.validate()?;
        schema.validate()?;
        config.validate()?;

        Ok(Self {
            extractor: Extractor::new(),
            classifier: Classifier::new(layout),
            validator: SchemaValidator::new(schema),
            config,
        })
    }

    /// The repository layout in use
    pub fn layout(&self) -> &ClassifierConfig {
        self.classifier.config()
    }

    /// The organizer settings in use
    pub fn config(&self) -> &OrganizerConfig {
        &self.config
    }

    /// Scan, load and classify the organize scope without changing anything
    pub fn plan(&self, root: &Path) -> Result<OrganizePlan, OrganizerError> {
        check_root(root)?;
        let layout = self.classifier.config();
        let scan = Scanner::new(layout, &self.config).organize_candidates(root);

        let mut plan = OrganizePlan::default();
        for entry in scan.entries {
            let rel_path = match entry {
                ScanEntry::File(rel_path) => rel_path,
                ScanEntry::Failure(failure) => {
                    plan.summary.record_read_failure(&failure.path, &layout.docs_dir);
                    plan.read_failures.push(failure);
                    continue;
                }
            };
            match load_document(root, &rel_path, &self.extractor) {
                Ok(doc) => {
                    plan.summary.record_document(&doc, &layout.docs_dir);
                    plan.documents.push(doc);
                }
                Err(failure) => {
                    plan.summary.record_read_failure(&rel_path, &layout.docs_dir);
                    plan.read_failures.push(failure);
                }
            }
        }

        let tree = FsTree::new(root);
        plan.decisions = self.classifier.classify_all(&plan.documents, Some(&tree));

        let staging = layout.staging_path();
        for decision in &plan.decisions {
            plan.summary.record_decision(decision, &staging);
        }

        info!(
            "planned {} document(s): {} move(s) pending",
            plan.summary.total_files, plan.summary.files_to_move
        );
        Ok(plan)
    }

    /// Apply the plan's moves, then rewrite links and write the report
    ///
    /// The report is written only when at least one move completed.
    pub fn apply(
        &self,
        root: &Path,
        plan: &OrganizePlan,
        update_links: bool,
    ) -> Result<ApplyOutcome, OrganizerError> {
        check_root(root)?;
        let moves = apply_moves(root, &plan.decisions);

        let relinked = if update_links && !moves.performed.is_empty() {
            update_cross_references(root, &moves.performed)
        } else {
            Vec::new()
        };

        let report_path = if moves.performed.is_empty() {
            debug!("no moves performed; skipping report");
            None
        } else {
            let layout = self.classifier.config();
            let contents = render_report(&moves.performed, &layout.staging_path(), Utc::now());
            let path = layout.docs_dir.join(&self.config.report_path);
            Some(write_report(root, &path, &contents)?)
        };

        Ok(ApplyOutcome {
            moves,
            relinked,
            report_path,
        })
    }

    /// Validate the validation scope
    ///
    /// Read and walk failures are reported in traversal order alongside
    /// schema findings.
    pub fn validate(&self, root: &Path) -> Result<ValidationReport, OrganizerError> {
        check_root(root)?;
        let scan = Scanner::new(self.classifier.config(), &self.config).validation_candidates(root);
        let report = self.validate_scan(root, scan);
        info!("{}", report.summary());
        Ok(report)
    }

    fn validate_scan(&self, root: &Path, scan: ScanResult) -> ValidationReport {
        let mut documents = Vec::new();
        let mut checked = 0;
        // Each slot is either a loaded document's index or a read failure.
        let mut order: Vec<Result<usize, ValidationError>> = Vec::new();
        for entry in scan.entries {
            let rel_path = match entry {
                ScanEntry::File(rel_path) => rel_path,
                ScanEntry::Failure(failure) => {
                    order.push(Err(failure));
                    continue;
                }
            };
            checked += 1;
            match load_document(root, &rel_path, &self.extractor) {
                Ok(doc) => {
                    order.push(Ok(documents.len()));
                    documents.push(doc);
                }
                Err(failure) => order.push(Err(failure)),
            }
        }

        let mut buckets = self.validator.findings_per_document(&documents);
        let mut errors = Vec::new();
        for slot in order {
            match slot {
                Ok(idx) => errors.append(&mut buckets[idx]),
                Err(failure) => errors.push(failure),
            }
        }

        ValidationReport::new(checked, errors)
    }
}

fn check_root(root: &Path) -> Result<(), OrganizerError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(OrganizerError::Root(root.to_path_buf()))
    }
}
