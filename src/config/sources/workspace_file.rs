//! Workspace config file source: garden.toml and config/{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Base workspace config file.
pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join("garden.toml")
}

/// Environment overlay: `config/{GARDEN_ENV}.toml`, `development` when unset.
pub fn environment_config_path(workspace_root: &Path) -> PathBuf {
    let env_name = std::env::var("GARDEN_ENV").unwrap_or_else(|_| "development".to_string());
    workspace_root.join("config").join(format!("{}.toml", env_name))
}

/// Layer garden.toml, then the environment overlay, onto `builder`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let layers = [
        workspace_config_path(workspace_root),
        environment_config_path(workspace_root),
    ];
    Ok(layers
        .iter()
        .filter(|path| path.is_file())
        .fold(builder, |builder, path| {
            builder.add_source(File::from(path.as_path()).required(false))
        }))
}
