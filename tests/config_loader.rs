use brewlog::config::{Config, ConfigError};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.server.timeout(), Duration::from_secs(30));
    assert_eq!(config.server.connect_timeout(), Duration::from_secs(5));
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert!(config.session.path.is_none());
    assert!(config.session.resolved_path().ends_with("brewlog/session.json"));
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("brewlog/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"[server]
base_url = "https://beers.example.com"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.server.base_url, "https://beers.example.com");
    assert_eq!(config.server.timeout_seconds, 30);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_full_file() {
    let (_dir, path) = write_config(
        r#"[server]
base_url = "http://localhost:3000"
timeout_seconds = 10
connect_timeout_seconds = 1

[session]
path = "/tmp/brewlog-test/session.json"

[ui]
tick_rate_ms = 100
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.server.timeout(), Duration::from_secs(10));
    assert_eq!(config.server.connect_timeout(), Duration::from_secs(1));
    assert_eq!(
        config.session.resolved_path(),
        PathBuf::from("/tmp/brewlog-test/session.json")
    );
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(100));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[server\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_bad_scheme_fails_validation() {
    let (_dir, path) = write_config(
        r#"[server]
base_url = "ftp://beers.example.com"
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("ftp"));
}

#[test]
fn test_unparseable_url_fails_validation() {
    let mut config = Config::default();
    config.server.base_url = "not a url".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let mut config = Config::default();
    config.server.timeout_seconds = 0;
    assert!(config.validate().is_err());
}
