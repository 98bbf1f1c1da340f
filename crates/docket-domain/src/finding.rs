//! Validation findings

use std::fmt;
use std::path::PathBuf;

/// How serious a finding is
///
/// Only errors fail a batch; warnings are reported and otherwise ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational, does not fail the batch
    Warning,

    /// Fails the batch
    Error,
}

impl Severity {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What was observed about a document
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// The file could not be read or is not valid UTF-8
    ReadFailure {
        /// Underlying cause
        cause: String,
    },

    /// The document has no header block
    MissingHeader,

    /// The header block is not a valid key-value mapping
    HeaderParseFailure {
        /// Parser message
        message: String,
    },

    /// A required field is absent
    MissingRequiredField {
        /// Field name
        field: String,
    },

    /// An enumerated field holds a value outside its set
    InvalidEnumValue {
        /// Field name
        field: String,
        /// Observed value
        value: String,
        /// Accepted values
        allowed: Vec<String>,
    },

    /// A field holds a value of the wrong type
    TypeMismatch {
        /// Field name
        field: String,
        /// Expected type name
        expected: String,
        /// Observed type name
        actual: String,
    },

    /// A second canonical document for the same title
    DuplicateCanonical {
        /// Shared title
        title: String,
        /// First document seen with this title
        original: PathBuf,
    },

    /// The move target is occupied by a different file
    DestinationConflict {
        /// Occupied location
        target: PathBuf,
    },

    /// A filesystem move failed
    MoveFailure {
        /// Intended location
        target: PathBuf,
        /// Underlying cause
        cause: String,
    },

    /// A date field does not hold a `YYYY-MM-DD` date
    InvalidDate {
        /// Field name
        field: String,
        /// Observed value
        value: String,
    },

    /// A field holds a value of an unexpected but tolerated type
    UnexpectedFieldType {
        /// Field name
        field: String,
        /// Expected type name
        expected: String,
        /// Observed type name
        actual: String,
    },
}

impl ErrorKind {
    /// Stable kind name, used in summaries and JSON output
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::ReadFailure { .. } => "ReadFailure",
            ErrorKind::MissingHeader => "MissingHeader",
            ErrorKind::HeaderParseFailure { .. } => "HeaderParseFailure",
            ErrorKind::MissingRequiredField { .. } => "MissingRequiredField",
            ErrorKind::InvalidEnumValue { .. } => "InvalidEnumValue",
            ErrorKind::TypeMismatch { .. } => "TypeMismatch",
            ErrorKind::DuplicateCanonical { .. } => "DuplicateCanonical",
            ErrorKind::DestinationConflict { .. } => "DestinationConflict",
            ErrorKind::MoveFailure { .. } => "MoveFailure",
            ErrorKind::InvalidDate { .. } => "InvalidDate",
            ErrorKind::UnexpectedFieldType { .. } => "UnexpectedFieldType",
        }
    }

    /// Severity this kind is reported with
    pub fn default_severity(&self) -> Severity {
        match self {
            ErrorKind::InvalidDate { .. } | ErrorKind::UnexpectedFieldType { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ReadFailure { cause } => write!(f, "Cannot read file: {}", cause),
            ErrorKind::MissingHeader => f.write_str("Missing YAML front-matter"),
            ErrorKind::HeaderParseFailure { message } => write!(f, "Invalid YAML front-matter: {}", message),
            ErrorKind::MissingRequiredField { field } => write!(f, "Missing required field: {}", field),
            ErrorKind::InvalidEnumValue { field, value, allowed } => {
                write!(f, "Invalid {}: {}. Must be one of: {}", field, value, allowed.join(", "))
            }
            ErrorKind::TypeMismatch { field, expected, actual } => {
                write!(f, "{} must be {}, got: {}", field, expected, actual)
            }
            ErrorKind::DuplicateCanonical { title, original } => {
                write!(f, "Duplicate canonical document for '{}'. Other at: {}", title, original.display())
            }
            ErrorKind::DestinationConflict { target } => {
                write!(f, "Destination already exists: {}", target.display())
            }
            ErrorKind::MoveFailure { target, cause } => {
                write!(f, "Failed to move to {}: {}", target.display(), cause)
            }
            ErrorKind::InvalidDate { field, value } => {
                write!(f, "{} is not a YYYY-MM-DD date: {}", field, value)
            }
            ErrorKind::UnexpectedFieldType { field, expected, actual } => {
                write!(f, "{} should be a {}, got: {}", field, expected, actual)
            }
        }
    }
}

/// One observation about one document
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Document location, relative to the repository root
    pub path: PathBuf,

    /// What was observed
    pub kind: ErrorKind,

    /// How serious it is
    pub severity: Severity,
}

impl ValidationError {
    /// Create a finding with the kind's default severity
    pub fn new(path: impl Into<PathBuf>, kind: ErrorKind) -> Self {
        let severity = kind.default_severity();
        Self {
            path: path.into(),
            kind,
            severity,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Whether this finding fails the batch
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.severity.as_str().to_uppercase(),
            self.path.display(),
            self.kind
        )
    }
}
