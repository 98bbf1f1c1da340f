//! Docket Extractor
//!
//! Splits a markdown document into its YAML front-matter and body.
//!
//! # Overview
//!
//! A header is a block that starts at the very first byte of the text with a
//! `---` line and ends at the next `---` line (LF or CRLF line endings). The
//! result is always one of three states:
//!
//! | Input | Metadata | Body |
//! |-------|----------|------|
//! | No opening marker at offset 0, or no closing marker | `Absent` | full text |
//! | Header is a YAML mapping (or empty) | `Present(fields)` | text after the closing marker |
//! | Header is invalid YAML or not a mapping | `ParseError(message)` | full text |
//!
//! Extraction never fails: a broken header is an observation, not an error.
//!
//! # Example Usage
//!
//! ```
//! use docket_extractor::Extractor;
//! use docket_domain::Metadata;
//!
//! let extractor = Extractor::new();
//! let extraction = extractor.extract("---\ndoc_type: spec\n---\n# Inventory\n");
//!
//! assert!(matches!(extraction.metadata, Metadata::Present(_)));
//! assert_eq!(extraction.body, "# Inventory\n");
//! ```

#![warn(missing_docs)]

mod error;
mod extractor;
mod parser;
mod types;

#[cfg(test)]
mod tests;

pub use error::{ExtractorError, Result};
pub use extractor::{extract, Extractor};
pub use parser::{parse_header, split_header};
pub use types::{Extraction, HeaderBlock};
