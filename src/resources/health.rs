//! Component health report.

use crate::client::ApiClient;
use crate::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
    pub backend: ComponentStatus,
    pub db: ComponentStatus,
    pub openai: ComponentStatus,
    pub website_crawler: ComponentStatus,
}

pub struct HealthClient<'a> {
    client: &'a ApiClient,
}

impl<'a> HealthClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn components(&self) -> Result<HealthReport> {
        self.client.get("/health/components").await
    }
}
