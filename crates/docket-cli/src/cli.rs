//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Docket - Classify, file and validate markdown documentation.
#[derive(Debug, Parser)]
#[command(name = "docket")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "DOCKET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Repository root
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find misplaced documents and optionally move them
    Organize(OrganizeArgs),

    /// Check front-matter of filed documents against the schema
    Validate,

    /// Print the effective configuration
    Config,
}

/// Arguments for the organize command.
#[derive(Debug, Parser)]
pub struct OrganizeArgs {
    /// Only report what would move (the default; cannot be combined with --auto-move)
    #[arg(long, conflicts_with = "auto_move")]
    pub dry_run: bool,

    /// Apply the suggested moves
    #[arg(long)]
    pub auto_move: bool,

    /// Leave links inside moved files untouched
    #[arg(long)]
    pub no_cross_ref_update: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
