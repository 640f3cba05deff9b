//! vbscout command line entry point.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vbscout::cli::{Cli, Commands, ConfigCommands};
use vbscout::theme::current_theme;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "VBSCOUT_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(current_theme().enabled)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => commands::analyze::handle(args)?,
        Commands::Preprocess(args) => commands::preprocess::handle(args)?,
        Commands::Validate { file } => return commands::validate::handle(&file),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show()?,
            ConfigCommands::Path => commands::config::handle_path()?,
            ConfigCommands::Init { force } => commands::config::handle_init(force)?,
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
    Ok(ExitCode::SUCCESS)
}
