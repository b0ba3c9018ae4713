//! Environment override tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p ruledocs-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```

use ruledocs_core::PreviewLimit;
use ruledocs_infrastructure::config::ConfigLoader;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_defaults() {
    set_env("RULEDOCS__RULES__LIMIT", "third");
    set_env("RULEDOCS__RULES__DIR", "./eslint-rules");

    let config = ConfigLoader::new().load().expect("Should load config");

    assert_eq!(config.rules.preview_limit(), PreviewLimit::Third);
    assert_eq!(config.rules.dir, PathBuf::from("./eslint-rules"));

    remove_env("RULEDOCS__RULES__LIMIT");
    remove_env("RULEDOCS__RULES__DIR");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ruledocs.toml");
    fs::write(&path, "[rules]\nlimit = \"sixth\"\n\n[logging]\nlevel = \"info\"\n").unwrap();
    set_env("RULEDOCS__LOGGING__LEVEL", "debug");

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("Should load config");

    assert_eq!(config.rules.preview_limit(), PreviewLimit::Sixth);
    assert_eq!(config.logging.level, "debug");

    remove_env("RULEDOCS__LOGGING__LEVEL");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_is_ignored() {
    set_env("RULEDOCS_RULES_LIMIT", "minimal");

    let config = ConfigLoader::new().load().expect("Should load config");

    assert_eq!(config.rules.limit, None);

    remove_env("RULEDOCS_RULES_LIMIT");
}
