use super::{AgeEstimate, GenderEstimate, http_client};
use crate::{Result, config::DemographicsConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Name-based demographic guesses (genderize.io / agify.io).
#[async_trait]
pub trait DemographicsApi: Send + Sync {
    async fn gender(&self, name: &str) -> Result<GenderEstimate>;
    async fn age(&self, name: &str) -> Result<AgeEstimate>;
}

pub struct DemographicsClient {
    client: reqwest::Client,
    genderize_url: String,
    agify_url: String,
}

impl DemographicsClient {
    pub fn new(config: &DemographicsConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            genderize_url: config.genderize_url.clone(),
            agify_url: config.agify_url.clone(),
        })
    }
}

#[async_trait]
impl DemographicsApi for DemographicsClient {
    async fn gender(&self, name: &str) -> Result<GenderEstimate> {
        debug!("Requesting gender estimate for {:?}", name);

        let estimate = self
            .client
            .get(&self.genderize_url)
            .query(&[("name", name)])
            .send()
            .await?
            .error_for_status()?
            .json::<GenderEstimate>()
            .await?;

        Ok(estimate)
    }

    async fn age(&self, name: &str) -> Result<AgeEstimate> {
        debug!("Requesting age estimate for {:?}", name);

        let estimate = self
            .client
            .get(&self.agify_url)
            .query(&[("name", name)])
            .send()
            .await?
            .error_for_status()?
            .json::<AgeEstimate>()
            .await?;

        Ok(estimate)
    }
}
