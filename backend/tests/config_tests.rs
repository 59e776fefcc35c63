//! Server configuration loaded from the environment and TOML files.

mod support;

use std::io::Write;

use support::with_clean_config_env;
use thermo_convert::config::{ConfigError, ServerConfig};

#[test]
fn test_from_env_defaults() {
    let config = with_clean_config_env(&[], ServerConfig::from_env).unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_from_env_overrides() {
    let config = with_clean_config_env(
        &[
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("8081")),
            ("RUST_LOG", Some("debug")),
        ],
        ServerConfig::from_env,
    )
    .unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8081);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_app_port_fallback() {
    let config =
        with_clean_config_env(&[("APP_PORT", Some("5000"))], ServerConfig::from_env).unwrap();
    assert_eq!(config.port, 5000);
}

#[test]
fn test_port_takes_precedence_over_app_port() {
    let config = with_clean_config_env(
        &[("PORT", Some("6000")), ("APP_PORT", Some("5000"))],
        ServerConfig::from_env,
    )
    .unwrap();
    assert_eq!(config.port, 6000);
}

#[test]
fn test_invalid_port() {
    let err = with_clean_config_env(&[("PORT", Some("eighty"))], ServerConfig::from_env)
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "eighty"));
}

#[test]
fn test_port_out_of_range() {
    let err = with_clean_config_env(&[("PORT", Some("70000"))], ServerConfig::from_env)
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn test_config_file_with_env_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nhost = \"127.0.0.1\"\nport = 9000\nlog_level = \"warn\"").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config = with_clean_config_env(
        &[("THERMO_CONFIG", Some(path.as_str())), ("PORT", Some("9100"))],
        ServerConfig::from_env,
    )
    .unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9100);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_missing_config_file() {
    let err = with_clean_config_env(
        &[("THERMO_CONFIG", Some("/nonexistent/thermo.toml"))],
        ServerConfig::from_env,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Read(_)));
}

#[test]
fn test_malformed_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server\nport = 1").unwrap();

    let err = ServerConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("Failed to parse config file"));
}
