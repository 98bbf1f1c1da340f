//! Classification decisions produced by the classifier

use std::fmt;
use std::path::{Path, PathBuf};

/// Why a document was flagged for (re)classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationReason {
    /// The document has no header block
    NoHeader,

    /// The header block could not be parsed
    MalformedHeader(String),

    /// The header has no `doc_type`
    NoTypeDeclared,

    /// The `doc_type` is not one of the recognized types
    UnrecognizedType(String),

    /// The document is in the staging area and can now be filed
    InStaging,

    /// The document sits outside the directory its type maps to
    WrongDirectory {
        /// Expected subdirectory, relative to the docs directory
        expected: String,
    },

    /// A different file already occupies the suggested location
    DestinationConflict {
        /// The occupied location, relative to the repository root
        target: PathBuf,
    },
}

impl ClassificationReason {
    /// Short category name, stable across values
    pub fn label(&self) -> &'static str {
        match self {
            ClassificationReason::NoHeader => "no header",
            ClassificationReason::MalformedHeader(_) => "malformed header",
            ClassificationReason::NoTypeDeclared => "no type declared",
            ClassificationReason::UnrecognizedType(_) => "unrecognized type",
            ClassificationReason::InStaging => "in staging",
            ClassificationReason::WrongDirectory { .. } => "wrong directory",
            ClassificationReason::DestinationConflict { .. } => "destination conflict",
        }
    }

    /// Whether this reason blocks the move when it is applied
    pub fn is_conflict(&self) -> bool {
        matches!(self, ClassificationReason::DestinationConflict { .. })
    }
}

impl fmt::Display for ClassificationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationReason::NoHeader => f.write_str("no header"),
            ClassificationReason::MalformedHeader(msg) => write!(f, "malformed header: {}", msg),
            ClassificationReason::NoTypeDeclared => f.write_str("no type declared"),
            ClassificationReason::UnrecognizedType(value) => write!(f, "unrecognized type: {}", value),
            ClassificationReason::InStaging => f.write_str("awaiting classification in staging area"),
            ClassificationReason::WrongDirectory { expected } => {
                write!(f, "should be in {}/ based on doc_type", expected)
            }
            ClassificationReason::DestinationConflict { target } => {
                write!(f, "destination already occupied: {}", target.display())
            }
        }
    }
}

/// Outcome of classifying one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationDecision {
    /// Current location, relative to the repository root
    pub source: PathBuf,

    /// Where the document should live; `None` means "stay"
    pub suggested: Option<PathBuf>,

    /// Ordered reasons behind the decision
    pub reasons: Vec<ClassificationReason>,
}

impl ClassificationDecision {
    /// Create a decision for `source`
    pub fn new(source: impl Into<PathBuf>, suggested: Option<PathBuf>, reasons: Vec<ClassificationReason>) -> Self {
        Self {
            source: source.into(),
            suggested,
            reasons,
        }
    }

    /// Whether the document should move
    ///
    /// A missing suggestion, or one equal to the source, means no move.
    pub fn needs_move(&self) -> bool {
        self.suggested.as_deref().is_some_and(|s| s != self.source)
    }

    /// The move target, when a move is needed
    pub fn target(&self) -> Option<&Path> {
        if self.needs_move() {
            self.suggested.as_deref()
        } else {
            None
        }
    }

    /// Whether the destination is already taken by another file
    pub fn has_conflict(&self) -> bool {
        self.reasons.iter().any(ClassificationReason::is_conflict)
    }

    /// Human-readable `from → to` description
    pub fn describe_move(&self) -> String {
        match self.target() {
            Some(target) => format!("{} → {}", self.source.display(), target.display()),
            None => "No move needed".to_string(),
        }
    }
}
