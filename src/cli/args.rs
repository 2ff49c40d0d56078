//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::stamp::StampKind;

/// Stampbar - date and time stamps for the clipboard
#[derive(Parser, Debug)]
#[command(name = "stampbar")]
#[command(version = "0.1.0")]
#[command(about = "Copy date/time stamps to the clipboard, with one-level restore")]
#[command(long_about = None)]
pub struct Cli {
    /// Show a desktop notification after copy and restore actions
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Subcommand (without one, the interactive menu opens)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy a stamp to the clipboard without opening the menu
    Copy {
        /// Stamp to copy
        #[arg(value_enum)]
        stamp: StampArg,
    },
    /// Print a stamp to stdout, leaving the clipboard untouched
    Show {
        /// Stamp to print (omit to print all)
        #[arg(value_enum)]
        stamp: Option<StampArg>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Stamp argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StampArg {
    Journal,
    Date,
    Time,
    Iso8601,
    Week,
    FrontMatter,
}

impl From<StampArg> for StampKind {
    fn from(arg: StampArg) -> Self {
        match arg {
            StampArg::Journal => StampKind::JournalPrefix,
            StampArg::Date => StampKind::DatePrefix,
            StampArg::Time => StampKind::TimeSuffix,
            StampArg::Iso8601 => StampKind::Iso8601,
            StampArg::Week => StampKind::YearWeek,
            StampArg::FrontMatter => StampKind::FrontMatter,
        }
    }
}

impl From<StampKind> for StampArg {
    fn from(kind: StampKind) -> Self {
        match kind {
            StampKind::JournalPrefix => StampArg::Journal,
            StampKind::DatePrefix => StampArg::Date,
            StampKind::TimeSuffix => StampArg::Time,
            StampKind::Iso8601 => StampArg::Iso8601,
            StampKind::YearWeek => StampArg::Week,
            StampKind::FrontMatter => StampArg::FrontMatter,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["notify", "journal_suffix", "front_matter.template"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
