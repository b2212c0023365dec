use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nereus wave statistics toolkit.
#[derive(Parser)]
#[command(
    name = "nereus",
    version,
    about = "Wave statistics from pressure-derived sea-surface records"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Apply the depth-attenuation correction to a record.
    Correct(CorrectArgs),
    /// Compute spectral and zero-crossing statistics for one or more records.
    Stats(StatsArgs),
}

/// Arguments for the `correct` subcommand.
#[derive(clap::Args)]
pub struct CorrectArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nereus.toml")]
    pub config: PathBuf,

    /// Path to input Parquet record.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for corrected output Parquet record.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Override sensor height above the bed (m) from config.
    #[arg(long)]
    pub zpt: Option<f64>,
}

/// Arguments for the `stats` subcommand.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "nereus.toml")]
    pub config: PathBuf,

    /// Input Parquet records.
    #[arg(short, long, num_args = 1.., required = true)]
    pub input: Vec<PathBuf>,

    /// Path for the JSON report (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory to write each record's spectrum into.
    #[arg(long)]
    pub spectrum_dir: Option<PathBuf>,

    /// Analyse the records as given, without attenuation correction.
    #[arg(long)]
    pub no_correct: bool,

    /// Override sensor height above the bed (m) from config.
    #[arg(long)]
    pub zpt: Option<f64>,
}
