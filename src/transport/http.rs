use crate::{Error, Result};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// JSON-over-HTTP request dispatcher with cookie-carried session credentials.
///
/// Every call goes out with the cookie jar attached; the session credential is
/// opaque to this layer — we never read or store it, we only observe its
/// absence as a 401 further up. On 2xx the decoded payload is returned. On
/// non-2xx a normalized [`Error::Http`] is built by extracting a machine
/// message from a `detail`/`message` field in the body when parseable, else
/// deriving one from the status line.
///
/// No retry, redirect, or recovery logic belongs here.
pub struct HttpDispatcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDispatcher {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| Error::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.dispatch(Method::GET, path, None, &[]).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.dispatch(Method::GET, path, None, query).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        self.dispatch(Method::POST, path, Some(body), &[]).await
    }

    /// POST with no request body (recrawl triggers and similar).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.dispatch(Method::POST, path, None, &[]).await
    }

    /// POST where the caller does not care about the 2xx body (refresh,
    /// logout). The server may answer 204 or an acknowledgement payload;
    /// both are discarded.
    pub async fn post_no_content(&self, path: &str) -> Result<()> {
        self.dispatch_raw(Method::POST, path, None, &[]).await?;
        Ok(())
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        self.dispatch(Method::PUT, path, Some(body), &[]).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch_raw(Method::DELETE, path, None, &[]).await?;
        Ok(())
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        query: &[(&str, String)],
    ) -> Result<T> {
        let text = self.dispatch_raw(method, path, body, query).await?;
        // Empty 2xx bodies (204 responses) decode as unit.
        if text.trim().is_empty() {
            return Ok(serde_json::from_str("null")?);
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn dispatch_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        query: &[(&str, String)],
    ) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, path, "dispatching request");

        let mut req = self.client.request(method, &url);
        if let Some(body) = &body {
            req = req.json(body);
        }
        if !query.is_empty() {
            req = req.query(query);
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let detail = extract_detail(status, &text);
            tracing::debug!(status = status.as_u16(), %detail, path, "request failed");
            return Err(Error::http(status.as_u16(), detail));
        }

        Ok(text)
    }
}

/// Pull a machine message out of an error body. The body optionally carries a
/// `detail` or `message` field; when neither parses, fall back to the status
/// line so the original status is never masked.
fn extract_detail(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            match value.get(key) {
                Some(serde_json::Value::String(s)) => {
                    if !s.is_empty() {
                        return s.clone();
                    }
                }
                Some(serde_json::Value::Null) | None => {}
                // Structured details (e.g. field validation lists) are kept verbatim.
                Some(other) => return other.to_string(),
            }
        }
    }
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}
