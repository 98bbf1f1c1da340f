//! Front-matter extraction

use crate::parser::{parse_header, split_header};
use crate::types::Extraction;
use docket_domain::{Document, Metadata};
use std::path::PathBuf;
use tracing::debug;

/// Splits documents into metadata and body
///
/// Stateless; one instance can serve any number of documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor;

impl Extractor {
    /// Create a new Extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract the header from raw text
    ///
    /// A header that fails to parse leaves the body untouched: the body is
    /// the entire original text, so nothing after a broken header is lost.
    pub fn extract(&self, text: &str) -> Extraction {
        let Some(block) = split_header(text) else {
            return Extraction {
                metadata: Metadata::Absent,
                body: text.to_string(),
            };
        };

        match parse_header(block.content) {
            Ok(fields) => Extraction {
                metadata: Metadata::Present(fields),
                body: text[block.body_start..].to_string(),
            },
            Err(e) => {
                debug!("front-matter parse failed: {}", e);
                Extraction {
                    metadata: Metadata::ParseError(e.to_string()),
                    body: text.to_string(),
                }
            }
        }
    }

    /// Build a [`Document`] from its repository-relative path and contents
    pub fn extract_document(&self, path: impl Into<PathBuf>, raw_content: String) -> Document {
        let Extraction { metadata, body } = self.extract(&raw_content);
        Document::new(path, raw_content, metadata, body)
    }
}

/// Extract with a default [`Extractor`]
pub fn extract(text: &str) -> Extraction {
    Extractor::new().extract(text)
}
