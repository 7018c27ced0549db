use crate::cli::output::*;
use clap::{Args, Subcommand};
use seqlens_core::{default_config, save_config, Config, SeqlensError};
use std::path::Path;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: ConfigArgs, config: &Config, path: &Path) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let source = if path.exists() {
                path.display().to_string()
            } else {
                format!("defaults ({} not found)", path.display())
            };
            println!("# {}", source);
            print!("{}", toml::to_string_pretty(config)?);
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                return Err(SeqlensError::Configuration(format!(
                    "{} already exists; use --force to overwrite",
                    path.display()
                ))
                .into());
            }
            save_config(path, &default_config())?;
            success(&format!("Wrote default configuration to {}", path.display()));
        }
    }

    Ok(())
}
