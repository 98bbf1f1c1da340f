//! Docket Classifier
//!
//! Decides where a document belongs based on its declared `doc_type`.
//!
//! The classifier provides:
//! - Destination lookup (`doc_type` → docs subdirectory)
//! - Staging of documents without usable metadata
//! - Exclusion of protected directories and files
//! - Non-fatal destination conflict detection
//!
//! # Examples
//!
//! ```
//! use docket_classifier::{Classifier, ClassifierConfig};
//! use docket_domain::Metadata;
//! use std::collections::BTreeSet;
//! use std::path::{Path, PathBuf};
//!
//! let classifier = Classifier::new(ClassifierConfig::default());
//! let decision = classifier
//!     .classify::<BTreeSet<PathBuf>>(Path::new("notes.md"), &Metadata::Absent, None)
//!     .unwrap();
//!
//! assert_eq!(decision.suggested.as_deref(), Some(Path::new("docs/_inbox/notes.md")));
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;

pub use classifier::Classifier;
pub use config::{ClassifierConfig, Exclusions};
pub use error::{ClassifierError, Result};
