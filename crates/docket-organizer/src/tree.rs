//! Filesystem-backed occupancy checks

use docket_domain::DocumentTree;
use std::fs;
use std::path::{Path, PathBuf};

/// A repository on disk
#[derive(Debug, Clone)]
pub struct FsTree {
    root: PathBuf,
}

impl FsTree {
    /// Create a tree rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentTree for FsTree {
    fn is_occupied(&self, target: &Path, source: &Path) -> bool {
        let target = self.root.join(target);
        if !target.exists() {
            return false;
        }
        // Case-insensitive filesystems can report the source under another spelling.
        match (fs::canonicalize(&target), fs::canonicalize(self.root.join(source))) {
            (Ok(t), Ok(s)) => t != s,
            _ => true,
        }
    }
}
