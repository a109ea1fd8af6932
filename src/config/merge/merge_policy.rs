//! Merge rules: built-in defaults below every file and environment source.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("publish.path_rewrite_rules", "")?
        .set_default("publish.slugify_urls", true)?
        .set_default("vault.root", ".")?
        .set_default("vault.publish_key", "dg-publish")?
        .set_default("vault.remote_hashes", ".garden/remote_hashes.json")
}
