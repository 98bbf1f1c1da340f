//! Docket Domain Layer
//!
//! Shared data model for the Docket document organizer and validator.
//! Like every domain crate in this workspace it has ZERO external
//! dependencies: parsing, filesystem access and configuration formats live in
//! the crates that build on it.
//!
//! ## Key Concepts
//!
//! - **Document**: a text file relative to the repository root, split into
//!   front-matter metadata and body
//! - **Metadata**: tri-state header (`Absent`, `ParseError`, `Present`)
//! - **DocType / Status**: the enumerated schema values
//! - **ClassificationDecision**: where a document should live, and why
//! - **ValidationError**: one typed observation about a document

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decision;
pub mod doc_type;
pub mod document;
pub mod finding;
pub mod metadata;
pub mod status;
pub mod traits;

// Re-exports for convenience
pub use decision::{ClassificationDecision, ClassificationReason};
pub use doc_type::DocType;
pub use document::Document;
pub use finding::{ErrorKind, Severity, ValidationError};
pub use metadata::{fields, FieldValue, Fields, Metadata};
pub use status::Status;
pub use traits::DocumentTree;
