// Configuration loading tests
// Author: kelexine (https://github.com/kelexine)

use gemtranslate::config::AppConfig;
use std::io::Write;

#[test]
fn test_defaults_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("missing.toml")).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert_eq!(
        config.gemini.api_base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(config.logging.format, "pretty");
}

#[test]
fn test_file_overrides_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[server]
port = 9090

[gemini]
api_key = "file-key"
model = "gemini-2.5-pro"
temperature = 0.2
timeout_seconds = 30

[logging]
format = "json"
"#
    )
    .unwrap();

    let config = AppConfig::load_from(file.path()).unwrap();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.gemini.model, "gemini-2.5-pro");
    assert_eq!(config.gemini.api_key.as_ref().unwrap().expose(), "file-key");
    assert!((config.gemini.temperature - 0.2).abs() < 1e-6);
    assert_eq!(config.gemini.timeout_seconds, Some(30));
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_cli_api_key_overrides_file() {
    let config = AppConfig::default().with_api_key(Some("cli-key".to_string()));
    assert_eq!(config.gemini.api_key.as_ref().unwrap().expose(), "cli-key");

    let untouched = AppConfig::default().with_api_key(Some("   ".to_string()));
    assert!(untouched.gemini.api_key.is_none());
}

#[test]
fn test_config_debug_never_prints_key() {
    let config = AppConfig::default().with_api_key(Some("AIzaSecretValue".to_string()));
    let printed = format!("{:?}", config);
    assert!(!printed.contains("AIzaSecretValue"));
}
