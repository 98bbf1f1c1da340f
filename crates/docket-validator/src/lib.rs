//! Docket Validator
//!
//! Checks document front-matter against the documentation schema.
//!
//! The validator provides:
//! - Required field presence
//! - Enumerated values for `doc_type` and `status`
//! - Boolean typing of `canonical`
//! - Date and list shape warnings for `created` and `tags`
//! - Canonical uniqueness per title across a document set
//!
//! # Examples
//!
//! ```
//! use docket_validator::{SchemaValidator, SchemaConfig};
//! use docket_domain::{Document, Metadata};
//!
//! let validator = SchemaValidator::new(SchemaConfig::default());
//! let doc = Document::new("docs/notes.md", String::new(), Metadata::Absent, String::new());
//!
//! let report = validator.validate_batch(&[doc]);
//! assert!(!report.is_success());
//! assert_eq!(report.error_count(), 1);
//! ```

#![warn(missing_docs)]

mod canonical;
mod config;
mod error;
mod report;
mod validator;

pub use canonical::canonical_duplicates;
pub use config::SchemaConfig;
pub use error::{Result, ValidatorError};
pub use report::ValidationReport;
pub use validator::SchemaValidator;
