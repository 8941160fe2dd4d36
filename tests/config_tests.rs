use portfolio_site::{Error, config::Config, server::build_state};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

mod common;

use common::test_utils::create_test_config;

const FULL_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8088
  request_timeout_secs: 5
  logs:
    level: "debug"
mail:
  relay: "smtp.example.com"
  address: "owner@example.com"
  password: "app-password"
weather:
  api_key: "weather-key"
demographics:
  genderize_url: "http://localhost:9000/genderize"
nutrition:
  app_id: "app-id"
  app_key: "app-key"
"#;

async fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, content).await.unwrap();
    path.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_load_full_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, FULL_CONFIG_YAML).await;

    let config = Config::from_file(&path).await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8088);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.server.request_timeout_secs, 5);
    assert_eq!(config.mail.relay, "smtp.example.com");
    assert_eq!(config.demographics.genderize_url, "http://localhost:9000/genderize");
    assert_eq!(config.demographics.agify_url, "https://api.agify.io");
    assert!(config.validate().is_ok());
}

#[tokio::test]
async fn test_secrets_can_come_from_environment_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "server:\n  port: 8000\n").await;

    let mut config = Config::from_file(&path).await.unwrap();
    assert!(matches!(config.validate(), Err(Error::Config(_))));

    config.apply_env(|key| match key {
        "MY_EMAIL" => Some("owner@example.com".to_string()),
        "MY_PASSWORD" => Some("secret".to_string()),
        "OPENWEATHERMAP_API_KEY" => Some("owm".to_string()),
        "NUTRITIONIX_APP_ID" => Some("id".to_string()),
        "NUTRITIONIX_API_KEY" => Some("key".to_string()),
        _ => None,
    });

    assert!(config.validate().is_ok());
    assert_eq!(config.mail.password, "secret");
}

#[tokio::test]
async fn test_missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let result = Config::from_file(&path.to_string_lossy()).await;
    assert!(matches!(result, Err(Error::Config(_))));
}

#[tokio::test]
async fn test_malformed_yaml_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "server:\n  port: not-a-port\n").await;

    assert!(matches!(
        Config::from_file(&path).await,
        Err(Error::Yaml(_))
    ));
}

#[tokio::test]
async fn test_build_state_from_valid_config() {
    let config = create_test_config("http://127.0.0.1:9");
    assert!(build_state(&config).is_ok());
}
