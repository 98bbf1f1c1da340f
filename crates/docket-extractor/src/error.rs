//! Error types for the Extractor

use thiserror::Error;

/// Result type alias for extractor operations
pub type Result<T> = std::result::Result<T, ExtractorError>;

/// Reasons a header block fails to parse
///
/// These never escape [`Extractor::extract`](crate::Extractor::extract); they
/// are folded into `Metadata::ParseError` there.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractorError {
    /// The header is not valid YAML
    #[error("YAML parse error: {0}")]
    Yaml(String),

    /// The header is valid YAML but not a key-value mapping
    #[error("front-matter must be a mapping, got {0}")]
    NotAMapping(&'static str),

    /// A mapping key is itself a sequence or mapping
    #[error("unsupported front-matter key: {0}")]
    UnsupportedKey(String),
}

impl From<serde_yaml::Error> for ExtractorError {
    fn from(e: serde_yaml::Error) -> Self {
        ExtractorError::Yaml(e.to_string())
    }
}
