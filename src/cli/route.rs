//! CLI route: run context and the single command dispatch table.

use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, GardenConfig};
use crate::error::GardenError;
use crate::hash::blob_hash;
use crate::status::{
    format_deleted_paths_text, format_publish_status_text, PublishStatusManager, Publisher,
};
use crate::url::{note_url, url_path};
use crate::vault::{JsonRemoteHashes, Vault};
use serde_json::json;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Runtime context for CLI execution: loaded config, the vault and the status manager.
pub struct RunContext {
    config: GardenConfig,
    vault: Arc<Vault>,
    manager: PublishStatusManager,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, GardenError> {
        let config = Self::load_config(&workspace_root, config_path.as_deref())?;
        Self::from_config(config, &workspace_root)
    }

    /// Load configuration from an explicit file, or layered for the workspace.
    pub fn load_config(
        workspace_root: &Path,
        config_path: Option<&Path>,
    ) -> Result<GardenConfig, GardenError> {
        match config_path {
            Some(path) => Ok(ConfigLoader::load_from_file(path)?),
            None => Ok(ConfigLoader::load(workspace_root)?),
        }
    }

    /// Create run context from an already loaded configuration.
    pub fn from_config(config: GardenConfig, workspace_root: &Path) -> Result<Self, GardenError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            GardenError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        let (vault_root, remote_hashes) = config.vault.resolve_paths(workspace_root);
        let vault = Arc::new(Vault::open(&vault_root, config.vault.publish_key.clone())?);
        debug!(
            vault = %vault.root().display(),
            remote_hashes = %remote_hashes.display(),
            "Opened vault"
        );

        let manager = PublishStatusManager::new(
            Arc::new(JsonRemoteHashes::new(remote_hashes)),
            vault.clone(),
            vault.clone(),
            config.publish.path_rewrite_rules.clone(),
        );

        Ok(Self {
            config,
            vault,
            manager,
        })
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn manager(&self) -> &PublishStatusManager {
        &self.manager
    }

    /// Execute a command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> Result<String, GardenError> {
        match command {
            Commands::Status {
                format,
                deleted_only,
            } => self.handle_status(format, *deleted_only),
            Commands::Hash { path } => self.handle_hash(path),
            Commands::Url { path, no_slugify } => self.handle_url(path, *no_slugify),
        }
    }

    fn handle_status(&self, format: &str, deleted_only: bool) -> Result<String, GardenError> {
        let json_output = match format {
            "json" => true,
            "text" => false,
            other => {
                return Err(GardenError::ConfigError(format!(
                    "Invalid format: {} (must be 'text' or 'json')",
                    other
                )))
            }
        };

        if deleted_only {
            let deleted = block_on(self.manager.get_deleted_note_paths())?;
            return if json_output {
                Ok(serde_json::to_string_pretty(&json!({ "deleted_note_paths": deleted }))?)
            } else {
                Ok(format_deleted_paths_text(&deleted))
            };
        }

        let status = block_on(self.manager.get_publish_status())?;
        if json_output {
            Ok(serde_json::to_string_pretty(&status)?)
        } else {
            Ok(format_publish_status_text(&status))
        }
    }

    fn handle_hash(&self, path: &Path) -> Result<String, GardenError> {
        let file = self.vault.local_file(path)?;
        let content = block_on(self.vault.render_content(&file))?;
        Ok(format!("{}  {}", blob_hash(&content), file))
    }

    fn handle_url(&self, path: &Path, no_slugify: bool) -> Result<String, GardenError> {
        let file = self.vault.local_file(path)?;
        let remote_path = self.manager.remote_path(&file)?;
        let slugify = self.config.publish.slugify_urls && !no_slugify;

        let mut out = format!(
            "Remote path: {}\nURL path: /{}",
            remote_path,
            url_path(&remote_path, slugify)
        );
        if let Some(site) = &self.config.publish.base_url {
            out.push_str(&format!("\nURL: {}", note_url(site, &remote_path, slugify)));
        }
        Ok(out)
    }
}

/// Drive one async call on a fresh runtime.
fn block_on<F, T>(future: F) -> Result<T, GardenError>
where
    F: Future<Output = Result<T, GardenError>>,
{
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| GardenError::ConfigError(format!("Failed to create runtime: {}", e)))?;
    rt.block_on(future)
}
