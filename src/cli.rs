use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "comment-guard")]
#[command(
    author,
    version,
    about = "Keep comments punctuated and free of double spaces"
)]
#[command(long_about = "A linter that checks `//` comment blocks for missing terminal \
    punctuation and double-space typos.\n\n\
    Exit codes:\n  \
    0 - No problems found\n  \
    1 - Comment problems found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check comments in files and directories
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Paths to check (files or directories, walked recursively)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, env = "COMMENT_GUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only check files with these extensions (comma-separated, e.g., go,rs)
    #[arg(long, value_delimiter = ',', env = "COMMENT_GUARD_EXT")]
    pub ext: Option<Vec<String>>,

    /// Skip test files
    #[arg(
        short = 't',
        long,
        env = "COMMENT_GUARD_SKIP_TESTS",
        value_parser = BoolishValueParser::new()
    )]
    pub skip_tests: bool,

    /// Names of files or directories to skip (comma-separated, replaces the configured list)
    #[arg(short, long, value_delimiter = ',', env = "COMMENT_GUARD_SKIP_LIST")]
    pub skip_list: Option<Vec<String>>,

    /// Check files in the vendor directory
    #[arg(long, env = "COMMENT_GUARD_VENDOR", value_parser = BoolishValueParser::new())]
    pub vendor: bool,

    /// Read file names from stdin, one per line
    #[arg(long, env = "COMMENT_GUARD_FILES", value_parser = BoolishValueParser::new())]
    pub files: bool,

    /// Ignore lines that match this regex
    #[arg(short, long, env = "COMMENT_GUARD_EXCLUDE")]
    pub exclude: Option<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text", env = "COMMENT_GUARD_FORMAT")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report problems but always exit successfully
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".comment-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and patterns
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".comment-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
