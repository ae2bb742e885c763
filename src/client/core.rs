use crate::chat::{ChatApi, ChatRequest, ChatResponse, Greeting};
use crate::client::events::SessionEvents;
use crate::client::recovery::AuthRecoveryPolicy;
use crate::resources::{
    GreetingsClient, HealthClient, IntentsClient, KnowledgeBaseClient, LogsClient, WebsiteClient,
};
use crate::transport::HttpDispatcher;
use crate::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub username: String,
}

/// Authenticated API client: dispatcher plus auth recovery.
///
/// Every call goes through the recovery policy, so a stale credential is
/// refreshed and the call retried once, transparently to the caller. The
/// session credential itself lives in the transport's cookie jar and is never
/// read by this type.
///
/// Construct one per composition root with [`ApiClient::builder`] and share
/// it (it is `Send + Sync`; wrap in [`Arc`] to hand it to controllers).
pub struct ApiClient {
    transport: Arc<HttpDispatcher>,
    recovery: AuthRecoveryPolicy,
    events: SessionEvents,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn builder() -> crate::client::builder::ApiClientBuilder {
        crate::client::builder::ApiClientBuilder::new()
    }

    pub(crate) fn assemble(transport: Arc<HttpDispatcher>, events: SessionEvents) -> Self {
        let recovery = AuthRecoveryPolicy::new(Arc::clone(&transport), events.clone());
        Self {
            transport,
            recovery,
            events,
        }
    }

    /// Session event hub; subscribe here to react to unauthorized exhaustion
    /// (e.g. navigate to the login screen from the presentation layer).
    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    // ---- recovery-wrapped dispatch, shared by auth/chat/resource calls ----

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.recovery.run(path, || self.transport.get(path)).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.recovery
            .run(path, || self.transport.get_with_query(path, query))
            .await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.recovery
            .run(path, || self.transport.post(path, body))
            .await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.recovery
            .run(path, || self.transport.post_empty(path))
            .await
    }

    pub(crate) async fn post_no_content(&self, path: &str) -> Result<()> {
        self.recovery
            .run(path, || self.transport.post_no_content(path))
            .await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.recovery
            .run(path, || self.transport.put(path, body))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.recovery
            .run(path, || self.transport.delete(path))
            .await
    }

    // ---- auth surface ----

    /// Authenticate. On success the server sets the session cookies; we never
    /// see the credential, only carry it.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/login", &request).await
    }

    /// End the session server-side and clear the cookies.
    pub async fn logout(&self) -> Result<()> {
        self.post_no_content("/auth/logout").await
    }

    /// Explicitly renew the credential. Recovery calls this implicitly on
    /// 401; an explicit call is only useful for warm-up.
    pub async fn refresh(&self) -> Result<()> {
        self.post_no_content("/auth/refresh").await
    }

    /// Identity check for the surrounding shell.
    pub async fn me(&self) -> Result<UserInfo> {
        self.get("/auth/me").await
    }

    // ---- typed resource clients ----

    pub fn knowledge_base(&self) -> KnowledgeBaseClient<'_> {
        KnowledgeBaseClient::new(self)
    }

    pub fn website(&self) -> WebsiteClient<'_> {
        WebsiteClient::new(self)
    }

    pub fn greetings(&self) -> GreetingsClient<'_> {
        GreetingsClient::new(self)
    }

    pub fn intents(&self) -> IntentsClient<'_> {
        IntentsClient::new(self)
    }

    pub fn logs(&self) -> LogsClient<'_> {
        LogsClient::new(self)
    }

    pub fn health(&self) -> HealthClient<'_> {
        HealthClient::new(self)
    }
}

#[async_trait]
impl ChatApi for ApiClient {
    async fn greeting(&self) -> Result<Greeting> {
        self.get("/chat/greeting").await
    }

    async fn send(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.post("/chat", &request).await
    }
}
