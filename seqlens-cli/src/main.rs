use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use seqlens_core::{SeqlensError, ValidationError};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(exit_code(&e));
    }
}

/// RUST_LOG wins, then SEQLENS_LOG, then the level implied by `-v`
fn init_logging(verbose: u8) {
    let fallback = std::env::var("SEQLENS_LOG").unwrap_or_else(|_| {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<ValidationError>().is_some() {
        return 5;
    }

    match error.downcast_ref::<SeqlensError>() {
        Some(SeqlensError::Configuration(_)) => 2,
        Some(SeqlensError::Io(_)) => 3,
        Some(SeqlensError::Parse(_)) => 4,
        Some(SeqlensError::Validation(_)) | Some(SeqlensError::InvalidInput(_)) => 5,
        Some(SeqlensError::NotFound(_)) => 6,
        _ => 1,
    }
}

fn is_forced_init(command: &Commands) -> bool {
    use crate::cli::commands::config::ConfigCommand;
    matches!(
        command,
        Commands::Config(args) if matches!(args.command, ConfigCommand::Init { force: true })
    )
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_file = cli
        .config
        .clone()
        .unwrap_or_else(seqlens_core::config_path);
    let config = match seqlens_core::load_config_or_default(&config_file) {
        Ok(config) => config,
        // A broken file must not block rewriting it
        Err(e) if is_forced_init(&cli.command) => {
            tracing::warn!("Ignoring unreadable config: {}", e);
            seqlens_core::default_config()
        }
        Err(e) => return Err(e.into()),
    };

    if !config.display.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Stats(args) => crate::cli::commands::stats::run(args, &config),
        Commands::View(args) => crate::cli::commands::view::run(args, &config),
        Commands::Distance(args) => crate::cli::commands::distance::run(args, &config),
        Commands::Motif(args) => crate::cli::commands::motif::run(args, &config),
        Commands::Align(args) => crate::cli::commands::align::run(args, &config),
        Commands::Matrix(args) => crate::cli::commands::matrix::run(args, &config),
        Commands::Export(args) => crate::cli::commands::export::run(args, &config),
        Commands::Pairs(args) => crate::cli::commands::pairs::run(args, &config),
        Commands::Config(args) => crate::cli::commands::config::run(args, &config, &config_file),
    }
}
