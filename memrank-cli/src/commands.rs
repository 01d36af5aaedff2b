use crate::args::*;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Rank records and print the top results
    #[command(visible_alias = "search")]
    Rank(RankArgs),

    /// Decode records and report how many are usable
    Check(CheckArgs),

    /// Show version information
    Version,

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}
