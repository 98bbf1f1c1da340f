//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! The filesystem-backed implementation lives in docket-organizer.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Read-only view of which document locations are taken
///
/// Paths are relative to the repository root.
pub trait DocumentTree {
    /// Whether a file distinct from `source` already exists at `target`
    fn is_occupied(&self, target: &Path, source: &Path) -> bool;
}

/// In-memory tree: a set of occupied paths
impl DocumentTree for BTreeSet<PathBuf> {
    fn is_occupied(&self, target: &Path, source: &Path) -> bool {
        target != source && self.contains(target)
    }
}
