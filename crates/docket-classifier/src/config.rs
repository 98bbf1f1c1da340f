//! Classifier configuration

use crate::ClassifierError;
use docket_domain::DocType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

const DEFAULT_EXCLUDED_DIRS: [&str; 19] = [
    ".git",
    ".agent",
    ".kiro",
    "node_modules",
    "build",
    "_artifacts",
    "bin",
    "obj",
    "packages",
    "dist",
    "coverage",
    "test-results",
    "logs",
    "ref-projects",
    ".vs",
    ".vscode",
    ".idea",
    "TestResults",
    "BenchmarkDotNet.Artifacts",
];

const DEFAULT_EXCLUDED_FILES: [&str; 10] = [
    "README.md",
    "CHANGELOG.md",
    "CHANGES.md",
    "HISTORY.md",
    "LICENSE.md",
    "COPYING.md",
    "CONTRIBUTING.md",
    // Agent pointer files are generated elsewhere.
    "AGENTS.md",
    "CLAUDE.md",
    "KIRO.md",
];

/// Directories and files that are never scanned or moved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exclusions {
    /// Directory names excluded at any depth
    pub dirs: BTreeSet<String>,

    /// File names excluded at any depth
    pub files: BTreeSet<String>,
}

impl Default for Exclusions {
    fn default() -> Self {
        Self {
            dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            files: DEFAULT_EXCLUDED_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Exclusions {
    /// Whether a directory with this name is skipped entirely
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    /// Whether a repository-relative file path is out of bounds
    ///
    /// Absolute paths and paths that climb out of the root are always
    /// excluded, as is anything below an excluded directory or carrying an
    /// excluded file name.
    pub fn is_excluded(&self, rel_path: &Path) -> bool {
        if !is_inside_root(rel_path) {
            return true;
        }

        let mut components = rel_path.components().peekable();
        while let Some(component) = components.next() {
            let Component::Normal(name) = component else {
                continue;
            };
            let name = name.to_string_lossy();
            let is_last = components.peek().is_none();
            if is_last {
                return self.files.contains(name.as_ref());
            }
            if self.dirs.contains(name.as_ref()) {
                return true;
            }
        }
        false
    }
}

/// Whether a relative path stays within the directory it is relative to
fn is_inside_root(rel_path: &Path) -> bool {
    rel_path
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Configuration for document classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Documentation tree, relative to the repository root (empty for the root itself)
    pub docs_dir: PathBuf,

    /// Intake area for unclassified documents, relative to `docs_dir`
    pub staging_dir: PathBuf,

    /// Subdirectory of `docs_dir` per `doc_type` name
    pub destinations: BTreeMap<String, String>,

    /// Never-considered directories and files
    pub exclusions: Exclusions,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            staging_dir: PathBuf::from("_inbox"),
            destinations: DocType::ALL
                .iter()
                .map(|t| (t.as_str().to_string(), t.default_directory().to_string()))
                .collect(),
            exclusions: Exclusions::default(),
        }
    }
}

impl ClassifierConfig {
    /// Subdirectory (relative to `docs_dir`) for a document type
    pub fn destination_for(&self, doc_type: DocType) -> &str {
        self.destinations
            .get(doc_type.as_str())
            .map(String::as_str)
            .unwrap_or_else(|| doc_type.default_directory())
    }

    /// Staging area, relative to the repository root
    pub fn staging_path(&self) -> PathBuf {
        self.docs_dir.join(&self.staging_dir)
    }

    /// Destination directory for a type, relative to the repository root
    pub fn destination_path(&self, doc_type: DocType) -> PathBuf {
        self.docs_dir.join(self.destination_for(doc_type))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if !is_inside_root(&self.docs_dir) {
            return Err(ClassifierError::Config(format!(
                "docs_dir must be a relative path inside the repository: {}",
                self.docs_dir.display()
            )));
        }
        if self.staging_dir.as_os_str().is_empty() || !is_inside_root(&self.staging_dir) {
            return Err(ClassifierError::Config(format!(
                "staging_dir must be a non-empty relative path: {}",
                self.staging_dir.display()
            )));
        }
        for (name, dir) in &self.destinations {
            if DocType::parse(name).is_none() {
                return Err(ClassifierError::Config(format!("unknown doc_type in destinations: {}", name)));
            }
            if dir.is_empty() || !is_inside_root(Path::new(dir)) {
                return Err(ClassifierError::Config(format!(
                    "destination for {} must be a non-empty relative path: {:?}",
                    name, dir
                )));
            }
            if Path::new(dir) == self.staging_dir {
                return Err(ClassifierError::Config(format!(
                    "destination for {} cannot be the staging directory",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ClassifierError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ClassifierError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ClassifierError> {
        toml::to_string_pretty(self)
            .map_err(|e| ClassifierError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
