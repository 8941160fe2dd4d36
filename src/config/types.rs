use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub demographics: DemographicsConfig,
    #[serde(default)]
    pub nutrition: NutritionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    /// Upper bound for every outbound API call and mail session.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// The site owner's mailbox. Contact messages are sent from and to `address`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    #[serde(default = "default_mail_relay")]
    pub relay: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicsConfig {
    #[serde(default = "default_genderize_url")]
    pub genderize_url: String,
    #[serde(default = "default_agify_url")]
    pub agify_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub app_key: String,
    #[serde(default = "default_nutrition_endpoint")]
    pub endpoint: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            relay: default_mail_relay(),
            address: String::new(),
            password: String::new(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
        }
    }
}

impl Default for DemographicsConfig {
    fn default() -> Self {
        Self {
            genderize_url: default_genderize_url(),
            agify_url: default_agify_url(),
        }
    }
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_key: String::new(),
            endpoint: default_nutrition_endpoint(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_mail_relay() -> String {
    "smtp.gmail.com".to_string()
}

fn default_geocoding_url() -> String {
    "http://api.openweathermap.org/geo/1.0/direct".to_string()
}

fn default_forecast_url() -> String {
    "http://api.openweathermap.org/data/2.5/forecast".to_string()
}

fn default_genderize_url() -> String {
    "https://api.genderize.io".to_string()
}

fn default_agify_url() -> String {
    "https://api.agify.io".to_string()
}

fn default_nutrition_endpoint() -> String {
    "https://trackapi.nutritionix.com/v2/natural/exercise".to_string()
}
