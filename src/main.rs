mod cli;
mod config;
mod convert;
mod correct_cmd;
mod logging;
mod stats_cmd;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::NereusConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Correct(args) => correct_cmd::run(args),
        Command::Stats(args) => stats_cmd::run(args),
    }
}

/// Loads the TOML configuration, or the defaults if `path` does not exist.
fn load_config(path: &Path) -> Result<NereusConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "config file not found, using defaults");
        return Ok(NereusConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
