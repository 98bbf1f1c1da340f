//! Extraction result types

use docket_domain::Metadata;

/// A located header block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBlock<'a> {
    /// Text between the opening and closing marker lines
    pub content: &'a str,

    /// Byte offset where the body starts (just past the closing marker line)
    pub body_start: usize,
}

/// Result of splitting a document
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Header state
    pub metadata: Metadata,

    /// Body text
    pub body: String,
}
