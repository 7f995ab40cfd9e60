//! Command line argument parsing for the hanzi-hint CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// hanzi-hint - word-group hints for Chinese character practice
#[derive(Parser, Debug, Clone)]
#[command(name = "hanzi-hint")]
#[command(about = "Word-group hints for Chinese character practice")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HanziHintArgs {
    /// Word-group dictionary files (JSON), applied in order
    #[arg(
        short,
        long = "dict",
        value_name = "DICT_FILE",
        env = "HANZI_HINT_DICT",
        value_delimiter = ',',
        global = true
    )]
    pub dictionaries: Vec<PathBuf>,

    /// Hint rendering configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Fail on unreadable dictionary files instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HanziHintArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the words registered for a character
    Groups(GroupsArgs),

    /// Print the masked hint for a character
    Hint(HintArgs),

    /// Show dictionary statistics
    Stats,

    /// Check dictionary integrity
    Check,

    /// Copy word groups into a word-bank file
    Attach(AttachArgs),

    /// Print the hint of every word-bank entry
    Hints(HintsArgs),
}

/// Arguments for listing word groups
#[derive(Parser, Debug, Clone)]
pub struct GroupsArgs {
    /// Character to look up
    #[arg(value_name = "CHAR")]
    pub character: String,
}

/// Arguments for rendering a hint
#[derive(Parser, Debug, Clone)]
pub struct HintArgs {
    /// Character to look up
    #[arg(value_name = "CHAR")]
    pub character: String,

    /// Pronunciation shown in front of the words
    #[arg(value_name = "PRONUNCIATION")]
    pub pronunciation: String,
}

/// Arguments for attaching word groups to a word bank
#[derive(Parser, Debug, Clone)]
pub struct AttachArgs {
    /// Word-bank file (JSON), rewritten in place whenever an entry's groups
    /// change or an entry without a `groups` field gets an empty one
    #[arg(value_name = "WORDBANK")]
    pub wordbank: PathBuf,

    /// Report what would change without writing the file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for rendering word-bank hints
#[derive(Parser, Debug, Clone)]
pub struct HintsArgs {
    /// Word-bank file (JSON)
    #[arg(value_name = "WORDBANK")]
    pub wordbank: PathBuf,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
