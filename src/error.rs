//! Error types for garden publish status.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by collaborators, configuration and the CLI.
///
/// The status comparator never wraps these: whatever a collaborator returns is
/// handed back to the caller as-is.
#[derive(Debug, Error)]
pub enum GardenError {
    #[error("Failed to fetch remote note hashes: {0}")]
    RemoteHashes(String),

    #[error("Failed to list files marked for publishing: {0}")]
    MarkedFiles(String),

    #[error("Failed to render {path}: {message}")]
    Render { path: String, message: String },

    #[error("Invalid frontmatter in {path}: {message}")]
    Frontmatter { path: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Path not found in vault: {0}")]
    PathNotInVault(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for GardenError {
    fn from(err: config::ConfigError) -> Self {
        GardenError::ConfigError(err.to_string())
    }
}
