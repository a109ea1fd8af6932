//! Config loader: the one place sources are assembled in precedence order.

use super::merge::merge_policy;
use super::sources::{self, global_file, workspace_file};
use super::GardenConfig;
use config::{ConfigError, File};
use std::path::Path;
use tracing::debug;

/// Loads [`GardenConfig`] from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `garden.toml`, workspace `config/{GARDEN_ENV}.toml`, `GARDEN_*` env vars.
    pub fn load(workspace_root: &Path) -> Result<GardenConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config: GardenConfig = builder
            .add_source(sources::environment())
            .build()?
            .try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from one explicit file over the defaults.
    /// Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<GardenConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(sources::environment())
            .build()?
            .try_deserialize()
    }
}
