//! Configuration for Organizer operations
//!
//! Controls what gets scanned, where the report goes, and whether moved
//! files get their relative links rewritten.

use crate::OrganizerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Component, PathBuf};

/// Configuration for the Organizer
///
/// # Examples
///
/// ```
/// use docket_organizer::OrganizerConfig;
///
/// let config = OrganizerConfig::default();
/// assert_eq!(config.extensions, vec!["md".to_string()]);
/// assert!(config.update_cross_references);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizerConfig {
    /// File extensions treated as documents (without the dot)
    pub extensions: Vec<String>,

    /// Directory names under the docs tree that organize never scans or moves
    pub organize_skip_dirs: BTreeSet<String>,

    /// Directory names under the docs tree that validation skips
    /// (the staging directory is always skipped)
    pub validation_skip_dirs: BTreeSet<String>,

    /// Organization report location, relative to the docs directory
    pub report_path: PathBuf,

    /// Rewrite relative links inside moved documents
    pub update_cross_references: bool,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            organize_skip_dirs: archival_dirs(),
            validation_skip_dirs: archival_dirs(),
            report_path: PathBuf::from("index/organization-report.md"),
            update_cross_references: true,
        }
    }
}

fn archival_dirs() -> BTreeSet<String> {
    ["archive", "index"].iter().map(|s| s.to_string()).collect()
}

impl OrganizerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), OrganizerError> {
        if self.extensions.is_empty() {
            return Err(OrganizerError::Config("extensions must not be empty".to_string()));
        }
        if self.extensions.iter().any(|e| e.is_empty() || e.starts_with('.')) {
            return Err(OrganizerError::Config(
                "extensions must be non-empty and given without a leading dot".to_string(),
            ));
        }
        let report_ok = self.report_path.file_name().is_some()
            && self.report_path.components().all(|c| matches!(c, Component::Normal(_)));
        if !report_ok {
            return Err(OrganizerError::Config(format!(
                "report_path must be a relative file path: {}",
                self.report_path.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = OrganizerConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.validation_skip_dirs.contains("archive"));
        assert_eq!(config.organize_skip_dirs, config.validation_skip_dirs);
    }

    #[test]
    fn test_dotted_extension_is_rejected() {
        let config = OrganizerConfig {
            extensions: vec![".md".to_string()],
            ..OrganizerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_escaping_report_path_is_rejected() {
        let config = OrganizerConfig {
            report_path: PathBuf::from("../report.md"),
            ..OrganizerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
