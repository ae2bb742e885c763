//! Greeting messages served to the chat widget on open.

use crate::client::ApiClient;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct GreetingEntry {
    pub id: i64,
    pub message: String,
    pub enabled: bool,
    pub priority: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewGreeting {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GreetingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

pub struct GreetingsClient<'a> {
    client: &'a ApiClient,
}

impl<'a> GreetingsClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<GreetingEntry>> {
        self.client.get("/admin/greeting").await
    }

    pub async fn create(&self, greeting: &NewGreeting) -> Result<GreetingEntry> {
        self.client.post("/admin/greeting", greeting).await
    }

    pub async fn update(&self, id: i64, patch: &GreetingPatch) -> Result<GreetingEntry> {
        self.client
            .put(&format!("/admin/greeting/{}", id), patch)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/admin/greeting/{}", id)).await
    }
}
