//! Classifier error types

use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Errors that can occur while setting up the classifier
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
