use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::Level;

/// Store a list of lowercase words and query it by prefix.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Newline separated word list, `-` reads from stdin.
    #[arg(short, long, env = "LETTERTRIE_WORDS", default_value = "-")]
    pub words: clio::Input,

    #[command(flatten)]
    pub verbosity: Verbosity,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Check whether each key was in the word list.
    Contains(OptsKeys),
    /// Check whether any word begins with each prefix.
    StartsWith(OptsKeys),
    /// List every word beginning with a prefix.
    Complete(OptsComplete),
    /// Display statistics about the word list.
    Stats(OptsStats),
}

#[derive(Debug, Args)]
pub struct OptsKeys {
    /// Keys to look up.
    #[arg(required = true)]
    pub keys: Vec<String>,
}

#[derive(Debug, Args)]
pub struct OptsComplete {
    /// Prefix to complete.
    pub prefix: String,
    /// Stop after N words.
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Print the words as a JSON array.
    #[arg(short, long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct OptsStats {
    #[arg(short, long, value_enum, default_value_t = StatFormat::Human)]
    pub format: StatFormat,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatFormat {
    /// Print the stats in a human-readable format.
    #[default]
    Human,
    /// Print the stats in a machine-readable format (JSON).
    Json,
}

#[derive(Debug, Args)]
pub struct Verbosity {
    /// Log more, repeat for debug output.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Verbosity {
    pub fn level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::ERROR,
            (false, 0) => Level::WARN,
            (false, 1) => Level::INFO,
            (false, _) => Level::DEBUG,
        }
    }
}
