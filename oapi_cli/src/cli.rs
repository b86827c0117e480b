use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Helpers for working with structural-analysis host models: path conversion, file listings and host code tables."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Express TARGET relative to the directory FROM.
    Relative {
        #[arg(value_name = "FROM")]
        from_directory: String,
        target: String,
    },
    /// Resolve RELATIVE against the directory FROM.
    Absolute {
        #[arg(value_name = "FROM")]
        from_directory: String,
        relative: String,
    },
    /// Test a file name's extension against a wildcard pattern (e.g. ".B??").
    MatchExt { file_name: String, pattern: String },
    /// List files or folders in a directory.
    List(ListArgs),
    /// Show or change the read-only attribute of a file.
    #[command(name = "readonly")]
    ReadOnly {
        path: PathBuf,
        /// New value for the attribute
        #[arg(long, value_name = "BOOL")]
        set: Option<bool>,
    },
    /// Print host code tables as JSON.
    Codes {
        /// Only the table with this name (case-insensitive)
        #[arg(long)]
        name: Option<String>,
    },
    /// Report whether operations are available on the configured host.
    Check {
        /// Client configuration (TOML or JSON)
        #[arg(short, long, value_name = "PATH")]
        config: PathBuf,
        /// Operation or "Enum.Member" keys to check
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    pub dir: PathBuf,

    /// Extension pattern; may be repeated
    #[arg(short, long = "ext", value_name = "PATTERN", conflicts_with = "folders")]
    pub extensions: Vec<String>,

    /// Text the file name must contain
    #[arg(long, value_name = "TEXT", conflicts_with = "folders")]
    pub contains: Option<String>,

    /// Descend into subfolders
    #[arg(short, long, conflicts_with = "folders")]
    pub recursive: bool,

    /// Match names with case
    #[arg(long, conflicts_with = "folders")]
    pub case_sensitive: bool,

    /// List subfolders instead of files, optionally filtered by a wildcard
    #[arg(long, value_name = "PATTERN", num_args = 0..=1, default_missing_value = "*")]
    pub folders: Option<String>,
}
