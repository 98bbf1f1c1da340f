//! Configuration management for the CLI.
//!
//! One TOML file carries every section. It is looked up as `--config PATH`,
//! then `<root>/docket.toml`, then `~/.docket/config.toml`; with none of
//! those present the built-in defaults apply.

use crate::error::{CliError, Result};
use docket_classifier::ClassifierConfig;
use docket_organizer::OrganizerConfig;
use docket_validator::SchemaConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Repository-local configuration file name
pub const LOCAL_CONFIG_FILE: &str = "docket.toml";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global settings
    pub settings: Settings,

    /// Repository layout and exclusions
    pub classifier: ClassifierConfig,

    /// Schema checks
    pub schema: SchemaConfig,

    /// Traversal, links and report
    pub organizer: OrganizerConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the per-user configuration file path.
    pub fn user_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".docket").join("config.toml"))
    }

    /// Locate the configuration file to use, if any.
    pub fn locate(explicit: Option<&Path>, root: &Path) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(CliError::ConfigNotFound(path.to_path_buf()));
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = root.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Ok(Some(local));
        }

        Ok(Self::user_path().filter(|p| p.is_file()))
    }

    /// Load configuration following the lookup chain.
    ///
    /// Returns the configuration together with the file it came from.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::locate(explicit, root)? {
            Some(path) => {
                debug!("loading configuration from {}", path.display());
                let config = Self::from_file(&path)?;
                Ok((config, Some(path)))
            }
            None => {
                debug!("no configuration file found; using defaults");
                Ok((Self::default(), None))
            }
        }
    }

    /// Load and validate a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.classifier
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        self.schema.validate().map_err(|e| CliError::Config(e.to_string()))?;
        self.organizer
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
