//! Docket CLI - classify, file and validate markdown documentation.

use anyhow::Context;
use clap::Parser;
use docket_cli::{commands, Cli, Command, CommandStatus, Config, Formatter};
use docket_organizer::Organizer;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<CommandStatus> {
    let (config, source) = Config::load(cli.config.as_deref(), &cli.root).context("failed to load configuration")?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let status = match cli.command {
        Command::Config => commands::execute_config(&config, source.as_deref(), &formatter)?,
        Command::Organize(args) => {
            let organizer = build_organizer(config)?;
            commands::execute_organize(args, &cli.root, &organizer, &formatter)?
        }
        Command::Validate => {
            let organizer = build_organizer(config)?;
            commands::execute_validate(&cli.root, &organizer, &formatter)?
        }
    };

    Ok(status)
}

fn build_organizer(config: Config) -> docket_organizer::Result<Organizer> {
    Organizer::new(config.classifier, config.schema, config.organizer)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
