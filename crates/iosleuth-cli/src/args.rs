/// Command-line arguments.
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "iosleuth")]
#[command(version, about = "Categorise Chrome disk I/O from a Process Monitor trace", long_about = None)]
pub struct Cli {
    /// Process Monitor event log exported as CSV
    pub trace: PathBuf,

    /// Process Monitor File Summary CSV; byte counts are taken from it and the
    /// trace is used only for renames and timing
    #[arg(long, value_name = "FILE_SUMMARY_CSV")]
    pub summary: Option<PathBuf>,

    /// TOML file with analysis settings
    #[arg(long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// List every file in this category (e.g. "Temp", "GPU Cache")
    #[arg(long, value_name = "CATEGORY")]
    pub list_files: Option<String>,

    /// Ignore paths containing this substring (repeatable); replaces the
    /// configured ignore list
    #[arg(long = "ignore", value_name = "SUBSTRING")]
    pub ignore: Vec<String>,

    /// Read the whole trace instead of stopping at Chrome's shutdown marker
    #[arg(long)]
    pub no_sentinel: bool,

    /// Do not count bytes from paging I/O
    #[arg(long)]
    pub no_paging_io: bool,

    /// Debug logging on stderr
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only warnings and errors on stderr
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Csv,
    Json,
}

impl Cli {
    /// Maximum level for the stderr subscriber.
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}
