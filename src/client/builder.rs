use crate::client::core::ApiClient;
use crate::client::events::SessionEvents;
use crate::transport::HttpDispatcher;
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_EVENT_CAPACITY: usize = 16;

/// Builder for [`ApiClient`].
///
/// Keep this surface area small and predictable: a base URL, a request
/// timeout, and the session event channel capacity.
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    event_capacity: usize,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }

    /// API base URL, e.g. `http://localhost:8000/api`. Required.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Whole-request timeout. Elapsing it surfaces as [`Error::Network`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Capacity of the session event broadcast channel.
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::validation("base_url is required"))?;
        let base_url = Url::parse(&base_url)
            .map_err(|e| Error::validation(format!("invalid base_url: {}", e)))?;

        let transport = Arc::new(HttpDispatcher::new(&base_url, self.timeout)?);
        let events = SessionEvents::new(self.event_capacity);
        Ok(ApiClient::assemble(transport, events))
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_required() {
        let err = ApiClientBuilder::new().build().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn rejects_malformed_base_url() {
        let err = ApiClientBuilder::new()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
