//! Error types for Organizer operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for organizer operations
pub type Result<T> = std::result::Result<T, OrganizerError>;

/// Errors that abort an organizer run
///
/// Per-document problems are never reported through this type; they are
/// collected as `ValidationError` values instead.
#[derive(Error, Debug)]
pub enum OrganizerError {
    /// The repository root is missing or not a directory
    #[error("Repository root is not a directory: {0}")]
    Root(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing the organization report failed
    #[error("Failed to write report {path}: {source}")]
    Report {
        /// Report location
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },
}

impl From<docket_classifier::ClassifierError> for OrganizerError {
    fn from(e: docket_classifier::ClassifierError) -> Self {
        OrganizerError::Config(e.to_string())
    }
}

impl From<docket_validator::ValidatorError> for OrganizerError {
    fn from(e: docket_validator::ValidatorError) -> Self {
        OrganizerError::Config(e.to_string())
    }
}
