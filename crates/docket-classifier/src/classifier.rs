//! Classification logic

use crate::ClassifierConfig;
use docket_domain::{
    fields, ClassificationDecision, ClassificationReason, DocType, Document, DocumentTree, FieldValue, Metadata,
};
use std::path::Path;
use tracing::debug;

/// The Classifier decides where documents belong
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Create a new Classifier with the given configuration
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Create a Classifier with default configuration
    pub fn default_config() -> Self {
        Self::new(ClassifierConfig::default())
    }

    /// Get the active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a document at `path` (relative to the repository root)
    ///
    /// # Arguments
    ///
    /// * `path` - Current location of the document
    /// * `metadata` - Its extracted front-matter
    /// * `tree` - Occupancy view used for conflict detection (optional)
    ///
    /// # Returns
    ///
    /// `None` when the document is excluded or already correctly filed;
    /// otherwise a decision whose `suggested` path may equal `path` when the
    /// document is flagged but stays where it is.
    pub fn classify<T: DocumentTree>(
        &self,
        path: &Path,
        metadata: &Metadata,
        tree: Option<&T>,
    ) -> Option<ClassificationDecision> {
        if self.config.exclusions.is_excluded(path) {
            return None;
        }
        let file_name = path.file_name()?;
        let staging = self.config.staging_path();
        let in_staging = path.starts_with(&staging);

        let (suggested, mut reasons) = match declared_type(metadata) {
            Ok(doc_type) => {
                let expected = self.config.destination_path(doc_type);
                if !in_staging && path.starts_with(&expected) {
                    return None;
                }
                let reason = if in_staging {
                    ClassificationReason::InStaging
                } else {
                    ClassificationReason::WrongDirectory {
                        expected: self.config.destination_for(doc_type).to_string(),
                    }
                };
                (expected.join(file_name), vec![reason])
            }
            Err(reason) => {
                // Already in intake: flag it but leave it in place.
                let suggested = if in_staging {
                    path.to_path_buf()
                } else {
                    staging.join(file_name)
                };
                (suggested, vec![reason])
            }
        };

        if suggested != path {
            if let Some(tree) = tree {
                if tree.is_occupied(&suggested, path) {
                    reasons.push(ClassificationReason::DestinationConflict {
                        target: suggested.clone(),
                    });
                }
            }
        }

        let decision = ClassificationDecision::new(path, Some(suggested), reasons);
        debug!("classified {}: {}", path.display(), decision.describe_move());
        Some(decision)
    }

    /// Classify an extracted document
    pub fn classify_document<T: DocumentTree>(
        &self,
        doc: &Document,
        tree: Option<&T>,
    ) -> Option<ClassificationDecision> {
        self.classify(&doc.path, &doc.metadata, tree)
    }

    /// Classify a batch, keeping input order and dropping no-ops
    pub fn classify_all<T: DocumentTree>(&self, docs: &[Document], tree: Option<&T>) -> Vec<ClassificationDecision> {
        docs.iter()
            .filter_map(|doc| self.classify_document(doc, tree))
            .collect()
    }
}

/// Resolve the declared type, or the reason it cannot be used
fn declared_type(metadata: &Metadata) -> Result<DocType, ClassificationReason> {
    let present = match metadata {
        Metadata::Absent => return Err(ClassificationReason::NoHeader),
        Metadata::ParseError(msg) => return Err(ClassificationReason::MalformedHeader(msg.clone())),
        Metadata::Present(present) => present,
    };

    match present.get(fields::DOC_TYPE) {
        None | Some(FieldValue::Null) => Err(ClassificationReason::NoTypeDeclared),
        Some(value) => value
            .as_str()
            .and_then(DocType::parse)
            .ok_or_else(|| ClassificationReason::UnrecognizedType(value.to_string())),
    }
}
