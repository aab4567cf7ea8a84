//! Command-line interface definitions.

pub mod check;
pub mod demo;
pub mod output;
pub mod rates;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Blend - simulated cross-chain yield aggregation engine.
#[derive(Parser, Debug)]
#[command(name = "blend")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the rate simulator until Ctrl-C
    Run(RunArgs),

    /// Show the seeded rate table and best quotes
    Rates(RatesArgs),

    /// Play a scripted session against the engine
    Demo(DemoArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `blend check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Override the simulator tick interval in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,
}

/// Arguments for the `rates` subcommand.
#[derive(Parser, Debug)]
pub struct RatesArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `demo` subcommand.
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Number of simulator ticks to apply
    #[arg(long, default_value = "3")]
    pub ticks: u32,

    /// RNG seed, overriding the configured one
    #[arg(long)]
    pub seed: Option<u64>,
}
