//! Top-level command-line definition

use crate::commands::Commands;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "memrank")]
#[command(about = "Rank memory records by importance and recency", long_about = None)]
#[command(version = memrank::VERSION)]
pub struct Cli {
    /// Configuration file (toml, yaml or json)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json) - use json for tool integration
    #[arg(long, short, default_value = "table", global = true)]
    pub output: String,

    /// Use machine-readable output (alias for --output json)
    #[arg(long, global = true)]
    pub machine: bool,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress all logging output)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output format after applying `--machine` and `MEMRANK_OUTPUT`.
    ///
    /// Priority: machine flag > env var > cli arg > default
    pub fn output_format(&self) -> String {
        if self.machine {
            "json".to_string()
        } else if let Ok(env_output) = std::env::var("MEMRANK_OUTPUT") {
            env_output
        } else {
            self.output.clone()
        }
    }

    /// Subscriber level from `--quiet`, `--machine`, `--verbose` and `MEMRANK_QUIET`.
    ///
    /// Machine mode keeps stdout clean for JSON, so it logs errors only.
    pub fn log_level(&self) -> Level {
        let is_quiet = self.quiet
            || std::env::var("MEMRANK_QUIET")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false);

        if is_quiet || self.machine {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}
