//! Integration tests for the configuration system

use garden::cli::RunContext;
use garden::config::{workspace_config_path, ConfigLoader, GardenConfig};
use garden::path::RewriteRule;
use garden::GardenError;
use tempfile::TempDir;

#[test]
fn test_env_specific_file_overrides_base() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        workspace_config_path(temp_dir.path()),
        r#"
[publish]
path_rewrite_rules = "notes:public"
slugify_urls = true

[logging]
level = "info"
"#,
    )
    .unwrap();
    std::fs::create_dir_all(temp_dir.path().join("config")).unwrap();
    std::fs::write(
        temp_dir.path().join("config").join("development.toml"),
        "[publish]\nslugify_urls = false\n",
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(
        config.publish.path_rewrite_rules.rules(),
        &[RewriteRule::new("notes", "public")]
    );
    assert!(!config.publish.slugify_urls);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_config_rejected_by_run_context() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(&config_file, "[vault]\npublish_key = \"\"\n").unwrap();

    let err = RunContext::new(temp_dir.path().to_path_buf(), Some(config_file))
        .err()
        .unwrap();
    assert!(matches!(err, GardenError::ConfigError(ref msg) if msg.contains("Publish key")));
}

#[test]
fn test_missing_vault_root_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = GardenConfig::default();
    config.vault.root = "does/not/exist".into();

    let err = RunContext::from_config(config, temp_dir.path()).err().unwrap();
    assert!(matches!(err, GardenError::PathNotInVault(_)));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("broken.toml");
    std::fs::write(&config_file, "[publish\n").unwrap();
    assert!(ConfigLoader::load_from_file(&config_file).is_err());
}
