//! Intent rules: keyword-matched canned responses.

use crate::client::ApiClient;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub id: i64,
    pub name: String,
    pub keywords: String,
    pub response: String,
    pub enabled: bool,
    pub priority: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewIntent {
    pub name: String,
    pub keywords: String,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IntentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

pub struct IntentsClient<'a> {
    client: &'a ApiClient,
}

impl<'a> IntentsClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Intent>> {
        self.client.get("/admin/intent").await
    }

    pub async fn create(&self, intent: &NewIntent) -> Result<Intent> {
        self.client.post("/admin/intent", intent).await
    }

    pub async fn update(&self, id: i64, patch: &IntentPatch) -> Result<Intent> {
        self.client
            .put(&format!("/admin/intent/{}", id), patch)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/admin/intent/{}", id)).await
    }
}
