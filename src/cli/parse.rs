//! CLI parse: clap types for garden. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Garden CLI - publish status for a digital garden vault
#[derive(Parser)]
#[command(name = "garden")]
#[command(about = "Publish status for a digital garden vault")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Compare marked notes against the remote snapshot
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Only list remote paths with no marked note
        #[arg(long)]
        deleted_only: bool,
    },
    /// Print the git blob hash a note publishes as
    Hash {
        /// Note path, relative to the vault root
        path: PathBuf,
    },
    /// Show the remote path and URL path of a note
    Url {
        /// Note path, relative to the vault root
        path: PathBuf,
        /// Keep path segments as written instead of slugifying them
        #[arg(long)]
        no_slugify: bool,
    },
}
