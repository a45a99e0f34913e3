use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::count::LineRange;

#[derive(Parser)]
#[command(name = "tokentally")]
#[command(version)]
#[command(about = "Fast heuristic token estimates for mixed-script text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the token count of a file or stdin
    Count(CountArgs),

    /// List available estimators
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Print version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct CountArgs {
    /// File to read (stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Estimator name (overrides settings)
    #[arg(short, long)]
    pub estimator: Option<String>,

    /// Warning threshold (overrides settings)
    #[arg(long)]
    pub warning: Option<usize>,

    /// Danger threshold (overrides settings)
    #[arg(long)]
    pub danger: Option<usize>,

    /// Only count a 1-based inclusive line range, e.g. 10:20
    #[arg(short, long)]
    pub lines: Option<LineRange>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,

    /// Show estimator and threshold details
    #[arg(long)]
    pub details: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print current settings
    Show,
    /// Print the settings file path
    Path,
    /// Restore default settings
    Reset,
    /// Export settings as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import settings from a JSON file
    Import { file: PathBuf },
    /// Set a single setting
    Set { key: String, value: String },
}
