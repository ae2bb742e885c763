//! Knowledge base: categories and Q&A entries.

use crate::client::ApiClient;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: i64,
    pub title: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KbEntry {
    pub id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewKbEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub question: String,
    pub answer: String,
}

/// Partial update; absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KbEntryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

pub struct KnowledgeBaseClient<'a> {
    client: &'a ApiClient,
}

impl<'a> KnowledgeBaseClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.client.get("/admin/kb/categories").await
    }

    pub async fn create_category(&self, title: &str) -> Result<Category> {
        self.client
            .post("/admin/kb/categories", &serde_json::json!({"title": title}))
            .await
    }

    pub async fn update_category(&self, id: i64, title: &str) -> Result<Category> {
        self.client
            .put(
                &format!("/admin/kb/categories/{}", id),
                &serde_json::json!({"title": title}),
            )
            .await
    }

    pub async fn delete_category(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("/admin/kb/categories/{}", id))
            .await
    }

    pub async fn entries(&self) -> Result<Vec<KbEntry>> {
        self.client.get("/admin/kb/qa").await
    }

    pub async fn create_entry(&self, entry: &NewKbEntry) -> Result<KbEntry> {
        self.client.post("/admin/kb/qa", entry).await
    }

    pub async fn update_entry(&self, id: i64, patch: &KbEntryPatch) -> Result<KbEntry> {
        self.client
            .put(&format!("/admin/kb/qa/{}", id), patch)
            .await
    }

    pub async fn delete_entry(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/admin/kb/qa/{}", id)).await
    }
}
