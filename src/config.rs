//! Configuration System
//!
//! Layered configuration for publish status: rewrite rules and URL settings,
//! vault location, and logging. Values come from built-in defaults, a global
//! file, workspace files and `GARDEN_*` environment variables, in that order.

use crate::logging::LoggingConfig;
use crate::path::PathRewriteRules;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::workspace_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GardenConfig {
    /// How notes map to the published site
    #[serde(default)]
    pub publish: PublishConfig,

    /// Local vault and remote snapshot locations
    #[serde(default)]
    pub vault: VaultConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Publishing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Newline-delimited `prefix:replacement` rules, parsed on load
    #[serde(default)]
    pub path_rewrite_rules: PathRewriteRules,

    /// Slugify URL path segments
    #[serde(default = "default_true")]
    pub slugify_urls: bool,

    /// Site URL, used to print full note URLs
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            path_rewrite_rules: PathRewriteRules::default(),
            slugify_urls: default_true(),
            base_url: None,
        }
    }
}

/// Vault settings. Relative paths are resolved against the workspace root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    #[serde(default = "default_vault_root")]
    pub root: PathBuf,

    /// Frontmatter key that marks a note for publishing
    #[serde(default = "default_publish_key")]
    pub publish_key: String,

    /// JSON snapshot of remote path -> blob hash
    #[serde(default = "default_remote_hashes")]
    pub remote_hashes: PathBuf,
}

fn default_true() -> bool {
    true
}

fn default_vault_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_publish_key() -> String {
    crate::frontmatter::DEFAULT_PUBLISH_KEY.to_string()
}

fn default_remote_hashes() -> PathBuf {
    PathBuf::from(".garden/remote_hashes.json")
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            root: default_vault_root(),
            publish_key: default_publish_key(),
            remote_hashes: default_remote_hashes(),
        }
    }
}

impl VaultConfig {
    /// Vault root and remote snapshot path, resolved against `workspace_root`.
    pub fn resolve_paths(&self, workspace_root: &Path) -> (PathBuf, PathBuf) {
        (
            resolve_against(workspace_root, &self.root),
            resolve_against(workspace_root, &self.remote_hashes),
        )
    }

    /// Validate vault configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.publish_key.trim().is_empty() {
            return Err("Publish key cannot be empty".to_string());
        }
        if self.remote_hashes.as_os_str().is_empty() {
            return Err("Remote hashes path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl PublishConfig {
    /// Validate publish configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(rule) = self
            .path_rewrite_rules
            .rules()
            .iter()
            .find(|rule| rule.prefix.is_empty())
        {
            return Err(format!(
                "Rewrite rule '{}' has an empty prefix and would match every note",
                rule
            ));
        }
        if let Some(url) = &self.base_url {
            if crate::url::base_url(url).is_empty() {
                return Err("Base URL cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Publish(String),
    Vault(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Publish(msg) => write!(f, "Publish: {}", msg),
            ValidationError::Vault(msg) => write!(f, "Vault: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl GardenConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.publish.validate() {
            errors.push(ValidationError::Publish(e));
        }
        if let Err(e) = self.vault.validate() {
            errors.push(ValidationError::Vault(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
