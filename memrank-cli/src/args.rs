use clap::Args;
use memrank::ranking::TieBreak;

#[derive(Args, Clone, Debug, Default)]
pub struct RankArgs {
    /// JSON file holding an array of records ("-" or omitted reads stdin)
    #[arg(long, short)]
    pub records: Option<String>,

    /// Only keep records with exactly this topic
    #[arg(long, short)]
    pub topic: Option<String>,

    /// Minimum importance a record needs to be kept
    #[arg(long, short = 'i', allow_negative_numbers = true)]
    pub importance_min: Option<i32>,

    /// Maximum number of records to return (negative returns nothing)
    #[arg(long, short, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Fail on the first malformed record instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Ordering among records with equal scores (input, id)
    #[arg(long)]
    pub tie_break: Option<TieBreak>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CheckArgs {
    /// JSON file holding an array of records ("-" or omitted reads stdin)
    #[arg(long, short)]
    pub records: Option<String>,

    /// Fail on the first malformed record instead of counting it
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Clone, Debug)]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
