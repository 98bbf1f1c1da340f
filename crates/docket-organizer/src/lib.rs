//! Docket Organizer
//!
//! Walks a repository, classifies and validates its documents, and files
//! them into place.
//!
//! The organizer provides:
//! - Scoped traversal honouring the exclusion lists
//! - Planning (extraction + classification) without side effects
//! - Sequential move execution with per-item conflict stops
//! - Relative link rewriting in moved documents
//! - The organization report artifact
//!
//! # Examples
//!
//! ```no_run
//! use docket_classifier::ClassifierConfig;
//! use docket_organizer::{Organizer, OrganizerConfig};
//! use docket_validator::SchemaConfig;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), docket_organizer::OrganizerError> {
//! let organizer = Organizer::new(
//!     ClassifierConfig::default(),
//!     SchemaConfig::default(),
//!     OrganizerConfig::default(),
//! )?;
//!
//! let plan = organizer.plan(Path::new("."))?;
//! for decision in plan.pending_moves() {
//!     println!("{}", decision.describe_move());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod mover;
mod organizer;
mod relink;
mod report;
mod scan;
mod summary;
mod tree;

pub use config::OrganizerConfig;
pub use error::{OrganizerError, Result};
pub use loader::load_document;
pub use mover::{apply_moves, MoveOutcome};
pub use organizer::{ApplyOutcome, OrganizePlan, Organizer};
pub use relink::{rewrite_links, update_cross_references};
pub use report::{render_report, write_report};
pub use scan::{ScanEntry, ScanResult, Scanner};
pub use summary::OrganizeSummary;
pub use tree::FsTree;
