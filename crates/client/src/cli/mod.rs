//! CLI command definitions.

pub mod games;
pub mod health;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the gamehaven API.
#[derive(Debug, Parser)]
#[command(name = "gamehaven-client")]
#[command(about = "CLI client for the gamehaven API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "GAMEHAVEN_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse and publish games.
    Games(games::GamesCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
