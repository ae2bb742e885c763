//! Chat log browsing (read-only, paged).

use crate::client::ApiClient;
use crate::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatLog {
    pub id: i64,
    pub session_id: String,
    pub user_message: String,
    pub bot_message: String,
    #[serde(default)]
    pub sources_json: Option<SourceIdSet>,
    pub refused: bool,
    #[serde(default)]
    pub intent: Option<String>,
    pub created_at: String,
}

/// Raw id sets as logged by the backend; resolved against the KB/website
/// clients by the caller when needed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceIdSet {
    #[serde(default)]
    pub kb_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub website_page_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogPage {
    pub logs: Vec<ChatLog>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub search: Option<String>,
}

impl LogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

pub struct LogsClient<'a> {
    client: &'a ApiClient,
}

impl<'a> LogsClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &LogQuery) -> Result<LogPage> {
        self.client
            .get_with_query("/admin/logs", &query.to_params())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_skip_absent_fields() {
        let params = LogQuery::new().limit(50).search("سلام").to_params();
        assert_eq!(
            params,
            vec![("limit", "50".to_string()), ("search", "سلام".to_string())]
        );
        assert!(LogQuery::new().to_params().is_empty());
    }
}
