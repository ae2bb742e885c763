//! Website sources: crawl roots and their status.

use crate::client::ApiClient;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct WebsiteSource {
    pub id: i64,
    pub base_url: String,
    pub enabled: bool,
    pub created_at: String,
    #[serde(default)]
    pub last_crawled_at: Option<String>,
    pub crawl_status: String,
    #[serde(default)]
    pub pages_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewWebsiteSource {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WebsiteSourcePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Acknowledgement for a recrawl trigger; the crawl itself runs server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlTrigger {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrawlStatus {
    pub status: String,
    #[serde(default)]
    pub last_crawled_at: Option<String>,
    pub pages_count: u64,
}

pub struct WebsiteClient<'a> {
    client: &'a ApiClient,
}

impl<'a> WebsiteClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<WebsiteSource>> {
        self.client.get("/admin/website").await
    }

    pub async fn create(&self, source: &NewWebsiteSource) -> Result<WebsiteSource> {
        self.client.post("/admin/website", source).await
    }

    pub async fn update(&self, id: i64, patch: &WebsiteSourcePatch) -> Result<WebsiteSource> {
        self.client
            .put(&format!("/admin/website/{}", id), patch)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/admin/website/{}", id)).await
    }

    pub async fn recrawl(&self, id: i64) -> Result<CrawlTrigger> {
        self.client
            .post_empty(&format!("/admin/website/{}/recrawl", id))
            .await
    }

    pub async fn status(&self, id: i64) -> Result<CrawlStatus> {
        self.client
            .get(&format!("/admin/website/{}/status", id))
            .await
    }
}
