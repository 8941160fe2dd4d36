use super::{ForecastEntry, GeoLocation, http_client, types::ForecastResponse};
use crate::{Result, config::WeatherConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Number of 3-hour forecast steps requested, covering the next 24 hours.
pub const FORECAST_STEPS: usize = 8;

#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Direct geocoding of a free-text `"<city>, <state or country>"` query.
    async fn geocode(&self, query: &str) -> Result<Vec<GeoLocation>>;

    async fn forecast(&self, lat: f64, lon: f64) -> Result<Vec<ForecastEntry>>;
}

pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_key: String,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            api_key: config.api_key.clone(),
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
        })
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
    async fn geocode(&self, query: &str) -> Result<Vec<GeoLocation>> {
        debug!("Geocoding {:?}", query);

        let locations = self
            .client
            .get(&self.geocoding_url)
            .query(&[("q", query), ("appid", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<GeoLocation>>()
            .await?;

        debug!("Geocoding returned {} locations", locations.len());
        Ok(locations)
    }

    async fn forecast(&self, lat: f64, lon: f64) -> Result<Vec<ForecastEntry>> {
        debug!("Requesting forecast for lat={} lon={}", lat, lon);

        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "imperial".to_string()),
                ("cnt", FORECAST_STEPS.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<ForecastResponse>()
            .await?;

        Ok(response.list)
    }
}
