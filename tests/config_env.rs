//! Configuration loading from the process environment
//!
//! These tests mutate process-wide environment variables and therefore run
//! serially.

use std::path::PathBuf;

use islands::shared::config::{
    ENV_AUTHENTICATED, ENV_DATABASE_URL, ENV_PUBLIC_DIR, ENV_SERVER_PORT,
};
use islands::shared::{AppConfig, ConfigError};
use serial_test::serial;

const KEYS: [&str; 4] = [ENV_SERVER_PORT, ENV_DATABASE_URL, ENV_AUTHENTICATED, ENV_PUBLIC_DIR];

fn clear_env() {
    for key in KEYS {
        std::env::remove_var(key);
    }
}

fn set_env(key: &str, value: &str) {
    std::env::set_var(key, value);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    assert_eq!(AppConfig::from_env().unwrap(), AppConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_env();
    set_env(ENV_SERVER_PORT, "4321");
    set_env(ENV_DATABASE_URL, "sqlite::memory:");
    set_env(ENV_AUTHENTICATED, "yes");
    set_env(ENV_PUBLIC_DIR, "dist");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.server_port, 4321);
    assert_eq!(config.database_url.as_deref(), Some("sqlite::memory:"));
    assert!(config.authenticated);
    assert_eq!(config.public_dir, PathBuf::from("dist"));
}

#[test]
#[serial]
fn test_from_env_rejects_bad_flag() {
    clear_env();
    set_env(ENV_AUTHENTICATED, "maybe");

    let result = AppConfig::from_env();
    clear_env();

    assert_eq!(
        result.unwrap_err(),
        ConfigError::InvalidValue { key: ENV_AUTHENTICATED, value: "maybe".to_string() }
    );
}
