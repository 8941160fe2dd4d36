use super::{ExerciseQuery, ExerciseRecord, http_client, types::ExerciseResponse};
use crate::{Result, config::NutritionConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait ExerciseApi: Send + Sync {
    /// Estimates duration and calories for a free-text exercise description.
    async fn estimate(&self, query: &ExerciseQuery) -> Result<Vec<ExerciseRecord>>;
}

pub struct NutritionixClient {
    client: reqwest::Client,
    endpoint: String,
    app_id: String,
    app_key: String,
}

impl NutritionixClient {
    pub fn new(config: &NutritionConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            endpoint: config.endpoint.clone(),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
        })
    }
}

#[async_trait]
impl ExerciseApi for NutritionixClient {
    async fn estimate(&self, query: &ExerciseQuery) -> Result<Vec<ExerciseRecord>> {
        debug!("Requesting exercise estimate for {:?}", query.query);

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-app-id", &self.app_id)
            .header("x-app-key", &self.app_key)
            .json(query)
            .send()
            .await?
            .error_for_status()?
            .json::<ExerciseResponse>()
            .await?;

        debug!("Exercise API returned {} records", response.exercises.len());
        Ok(response.exercises)
    }
}
