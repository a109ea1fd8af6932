//! Configuration sources layered by the loader.

pub mod global_file;
pub mod workspace_file;

use config::Environment;

/// `GARDEN_*` environment overrides; `__` separates sections
/// (`GARDEN_PUBLISH__SLUGIFY_URLS=false`).
pub fn environment() -> Environment {
    Environment::with_prefix("GARDEN")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
