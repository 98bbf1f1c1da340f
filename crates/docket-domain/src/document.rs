//! Document module - a text file and its extracted header

use crate::Metadata;
use std::path::{Path, PathBuf};

/// A document read from the repository
///
/// Documents are built fresh on every run; nothing about them is cached
/// between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Location relative to the repository root
    pub path: PathBuf,

    /// File contents exactly as read
    pub raw_content: String,

    /// Extracted front-matter
    pub metadata: Metadata,

    /// Content after the header block (the full text when there is no usable header)
    pub body: String,
}

impl Document {
    /// Create a new document
    pub fn new(path: impl Into<PathBuf>, raw_content: String, metadata: Metadata, body: String) -> Self {
        Self {
            path: path.into(),
            raw_content,
            metadata,
            body,
        }
    }

    /// Final path component, if the path has one
    pub fn file_name(&self) -> Option<&std::ffi::OsStr> {
        self.path.file_name()
    }

    /// Location relative to the repository root
    pub fn path(&self) -> &Path {
        &self.path
    }
}
