//! Config command implementation.

use super::CommandStatus;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Print the effective configuration as TOML.
pub fn execute_config(config: &Config, source: Option<&Path>, formatter: &Formatter) -> Result<CommandStatus> {
    if formatter.is_verbose_format() {
        let origin = match source {
            Some(path) => format!("# Loaded from {}", path.display()),
            None => "# Built-in defaults".to_string(),
        };
        println!("{}", origin);
    }
    print!("{}", config.to_toml()?);
    Ok(CommandStatus::Clean)
}
