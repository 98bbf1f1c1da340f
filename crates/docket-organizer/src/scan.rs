//! Repository traversal

use crate::OrganizerConfig;
use docket_classifier::ClassifierConfig;
use docket_domain::{ErrorKind, ValidationError};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// One step of a traversal
#[derive(Debug, Clone)]
pub enum ScanEntry {
    /// A candidate document, relative to the repository root
    File(PathBuf),

    /// A directory entry that could not be read
    Failure(ValidationError),
}

/// Files found by a scan, interleaved with walk failures in traversal order
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Entries in traversal order
    pub entries: Vec<ScanEntry>,
}

impl ScanResult {
    /// Candidate documents, in traversal order
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter().filter_map(|e| match e {
            ScanEntry::File(path) => Some(path),
            ScanEntry::Failure(_) => None,
        })
    }

    /// Walk failures, in traversal order
    pub fn failures(&self) -> impl Iterator<Item = &ValidationError> {
        self.entries.iter().filter_map(|e| match e {
            ScanEntry::Failure(failure) => Some(failure),
            ScanEntry::File(_) => None,
        })
    }
}

/// Finds candidate documents under a repository root
pub struct Scanner<'a> {
    layout: &'a ClassifierConfig,
    config: &'a OrganizerConfig,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over the given layout
    pub fn new(layout: &'a ClassifierConfig, config: &'a OrganizerConfig) -> Self {
        Self { layout, config }
    }

    /// Documents the organizer considers: root-level files plus the docs tree,
    /// minus the archive-like directories in `organize_skip_dirs`
    ///
    /// The generated organization report is never a candidate.
    pub fn organize_candidates(&self, root: &Path) -> ScanResult {
        let report = self.layout.docs_dir.join(&self.config.report_path);
        let skip = self.docs_subdirs(&self.config.organize_skip_dirs);
        let mut result = ScanResult::default();
        let mut seen = HashSet::new();

        self.walk(root, Path::new(""), Some(1), &skip, &mut result, &mut seen);
        self.walk(root, &self.layout.docs_dir, None, &skip, &mut result, &mut seen);

        result
            .entries
            .retain(|e| !matches!(e, ScanEntry::File(f) if *f == report));
        result
    }

    /// Documents the validator checks: the docs tree minus archive-like and staging directories
    pub fn validation_candidates(&self, root: &Path) -> ScanResult {
        let mut skip = self.docs_subdirs(&self.config.validation_skip_dirs);
        skip.insert(self.layout.staging_path());

        let mut result = ScanResult::default();
        let mut seen = HashSet::new();
        self.walk(root, &self.layout.docs_dir, None, &skip, &mut result, &mut seen);
        result
    }

    fn docs_subdirs(&self, names: &BTreeSet<String>) -> HashSet<PathBuf> {
        names.iter().map(|d| self.layout.docs_dir.join(d)).collect()
    }

    fn walk(
        &self,
        root: &Path,
        start: &Path,
        max_depth: Option<usize>,
        skip: &HashSet<PathBuf>,
        result: &mut ScanResult,
        seen: &mut HashSet<PathBuf>,
    ) {
        let base = root.join(start);
        if !base.is_dir() {
            return;
        }

        let mut walker = WalkDir::new(&base)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();
        if let Some(depth) = max_depth {
            walker = walker.max_depth(depth);
        }

        let entries = walker
            .into_iter()
            .filter_entry(|entry| self.keep_dir(root, entry, skip));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(|p| relative_to(root, p)).unwrap_or_else(|| start.to_path_buf());
                    warn!("failed to walk {}: {}", path.display(), e);
                    result.entries.push(ScanEntry::Failure(ValidationError::new(
                        path,
                        ErrorKind::ReadFailure { cause: e.to_string() },
                    )));
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.has_document_extension(entry.path()) {
                continue;
            }
            let rel = relative_to(root, entry.path());
            if self.layout.exclusions.is_excluded(&rel) {
                continue;
            }
            if seen.insert(rel.clone()) {
                result.entries.push(ScanEntry::File(rel));
            }
        }
    }

    /// Prune excluded and skipped directories before descending into them
    fn keep_dir(&self, root: &Path, entry: &DirEntry, skip: &HashSet<PathBuf>) -> bool {
        if !entry.file_type().is_dir() {
            return true;
        }
        let excluded = entry
            .file_name()
            .to_str()
            .is_some_and(|name| self.layout.exclusions.is_excluded_dir(name));
        !excluded && !skip.contains(&relative_to(root, entry.path()))
    }

    fn has_document_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.config.extensions.iter().any(|allowed| allowed == ext))
    }
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
