mod types;

pub use types::*;

use crate::{Error, Result};
use lettre::message::Mailbox;
use std::{env, path::Path, time::Duration};
use tracing::{debug, info};

/// Environment variables that override secrets from the YAML file.
pub const ENV_MAIL_ADDRESS: &str = "MY_EMAIL";
pub const ENV_MAIL_PASSWORD: &str = "MY_PASSWORD";
pub const ENV_WEATHER_API_KEY: &str = "OPENWEATHERMAP_API_KEY";
pub const ENV_NUTRITION_APP_ID: &str = "NUTRITIONIX_APP_ID";
pub const ENV_NUTRITION_APP_KEY: &str = "NUTRITIONIX_API_KEY";

/// Loads the YAML config, applies environment overrides and validates the result.
///
/// `CONFIG_PATH` names the file. When it is unset, `config.yaml` is read if present
/// and defaults are used otherwise.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => Config::from_file(&path).await?,
        Err(_) if Path::new("config.yaml").exists() => Config::from_file("config.yaml").await?,
        Err(_) => {
            info!("No config file found, using defaults");
            Config::default()
        }
    };

    config.apply_env(|key| env::var(key).ok());
    config.validate()?;

    Ok(config)
}

impl Config {
    pub async fn from_file(path: &str) -> Result<Self> {
        debug!("Loading configuration from: {}", path);

        let config_str = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::config(format!("cannot read {path}: {e}")))?;
        Self::from_yaml_str(&config_str)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Overrides secrets with non-empty values returned by `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let targets: [(&str, &mut String); 5] = [
            (ENV_MAIL_ADDRESS, &mut self.mail.address),
            (ENV_MAIL_PASSWORD, &mut self.mail.password),
            (ENV_WEATHER_API_KEY, &mut self.weather.api_key),
            (ENV_NUTRITION_APP_ID, &mut self.nutrition.app_id),
            (ENV_NUTRITION_APP_KEY, &mut self.nutrition.app_key),
        ];

        for (key, slot) in targets {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                debug!("Using {} from environment", key);
                *slot = value;
            }
        }
    }

    /// Startup check: every secret must be present before the server accepts requests.
    pub fn validate(&self) -> Result<()> {
        let secrets = [
            ("mail.address", ENV_MAIL_ADDRESS, &self.mail.address),
            ("mail.password", ENV_MAIL_PASSWORD, &self.mail.password),
            ("weather.api_key", ENV_WEATHER_API_KEY, &self.weather.api_key),
            ("nutrition.app_id", ENV_NUTRITION_APP_ID, &self.nutrition.app_id),
            ("nutrition.app_key", ENV_NUTRITION_APP_KEY, &self.nutrition.app_key),
        ];

        for (key, env_key, value) in secrets {
            if value.trim().is_empty() {
                return Err(Error::config(format!(
                    "missing required secret `{key}` (set it in the config file or via {env_key})"
                )));
            }
        }

        self.owner_mailbox()?;

        if self.server.request_timeout_secs == 0 {
            return Err(Error::config(
                "server.request_timeout_secs must be greater than zero",
            ));
        }

        Ok(())
    }

    pub fn owner_mailbox(&self) -> Result<Mailbox> {
        self.mail
            .address
            .parse::<Mailbox>()
            .map_err(|e| Error::config(format!("invalid mail.address: {e}")))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }
}
