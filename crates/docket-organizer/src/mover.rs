//! Sequential move execution

use crate::FsTree;
use docket_domain::{ClassificationDecision, DocumentTree, ErrorKind, ValidationError};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of applying a batch of moves
#[derive(Debug, Clone, Default)]
pub struct MoveOutcome {
    /// Completed moves as `(prior, new)` repository-relative pairs
    pub performed: Vec<(PathBuf, PathBuf)>,

    /// Per-item failures (conflicts and filesystem errors)
    pub failures: Vec<ValidationError>,

    /// Moves attempted
    pub attempted: usize,
}

impl MoveOutcome {
    /// Number of moves that completed
    pub fn succeeded(&self) -> usize {
        self.performed.len()
    }

    /// Whether every attempted move completed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Apply every pending move in `decisions`, in order
///
/// A destination already on disk, or claimed by an earlier item of this
/// batch, stops that single item. Completed moves are never rolled back.
pub fn apply_moves(root: &Path, decisions: &[ClassificationDecision]) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    let mut claimed: HashSet<PathBuf> = HashSet::new();
    let tree = FsTree::new(root);

    for decision in decisions {
        let Some(target) = decision.target() else {
            continue;
        };
        outcome.attempted += 1;

        if claimed.contains(target) || tree.is_occupied(target, &decision.source) {
            warn!("not moving {}: {} is taken", decision.source.display(), target.display());
            outcome.failures.push(ValidationError::new(
                &decision.source,
                ErrorKind::DestinationConflict {
                    target: target.to_path_buf(),
                },
            ));
            continue;
        }
        claimed.insert(target.to_path_buf());

        match move_file(root, &decision.source, target) {
            Ok(()) => {
                info!("moved {}", decision.describe_move());
                outcome.performed.push((decision.source.clone(), target.to_path_buf()));
            }
            Err(e) => {
                warn!("failed to move {}: {}", decision.source.display(), e);
                outcome.failures.push(ValidationError::new(
                    &decision.source,
                    ErrorKind::MoveFailure {
                        target: target.to_path_buf(),
                        cause: e.to_string(),
                    },
                ));
            }
        }
    }

    info!("moved {}/{} files", outcome.succeeded(), outcome.attempted);
    outcome
}

fn move_file(root: &Path, source: &Path, target: &Path) -> std::io::Result<()> {
    let to = root.join(target);
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::rename(root.join(source), to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_domain::ClassificationReason;
    use tempfile::TempDir;

    fn decision(source: &str, target: &str) -> ClassificationDecision {
        ClassificationDecision::new(source, Some(PathBuf::from(target)), vec![ClassificationReason::NoHeader])
    }

    #[test]
    fn test_moves_create_directories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), "a").unwrap();

        let outcome = apply_moves(dir.path(), &[decision("a.md", "docs/_inbox/a.md")]);

        assert!(outcome.is_complete());
        assert_eq!(outcome.succeeded(), 1);
        assert!(dir.path().join("docs/_inbox/a.md").is_file());
        assert!(!dir.path().join("a.md").exists());
    }

    #[test]
    fn test_claimed_destination_stops_second_item_only() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("a.md"), "first").unwrap();
        fs::write(dir.path().join("docs/a.md"), "second").unwrap();
        fs::write(dir.path().join("b.md"), "third").unwrap();

        let outcome = apply_moves(
            dir.path(),
            &[
                decision("a.md", "docs/_inbox/a.md"),
                decision("docs/a.md", "docs/_inbox/a.md"),
                decision("b.md", "docs/_inbox/b.md"),
            ],
        );

        assert_eq!(outcome.attempted, 3);
        assert_eq!(outcome.succeeded(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert!(matches!(outcome.failures[0].kind, ErrorKind::DestinationConflict { .. }));
        assert_eq!(fs::read_to_string(dir.path().join("docs/_inbox/a.md")).unwrap(), "first");
        assert!(dir.path().join("docs/a.md").exists());
    }

    #[test]
    fn test_missing_source_is_move_failure() {
        let dir = TempDir::new().unwrap();

        let outcome = apply_moves(dir.path(), &[decision("gone.md", "docs/gone.md")]);

        assert_eq!(outcome.attempted, 1);
        assert!(matches!(outcome.failures[0].kind, ErrorKind::MoveFailure { .. }));
    }

    #[test]
    fn test_decisions_without_move_are_skipped() {
        let dir = TempDir::new().unwrap();
        let stay = ClassificationDecision::new("docs/_inbox/x.md", Some(PathBuf::from("docs/_inbox/x.md")), vec![]);

        let outcome = apply_moves(dir.path(), &[stay]);

        assert_eq!(outcome.attempted, 0);
        assert!(outcome.is_complete());
    }
}
