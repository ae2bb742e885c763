//! Chat conversation sessions.
//!
//! [`ChatSessionController`] owns one conversation: session identity, ordered
//! message history, greeting bootstrap, and the single-flight send protocol.
//! It talks to the backend through the [`ChatApi`] seam so session semantics
//! can be exercised without a network.

pub mod controller;
pub mod types;

pub use controller::{
    ChatSessionController, WidgetState, BACKEND_ADVISORY, CONNECTIVITY_ADVISORY, FALLBACK_GREETING,
};
pub use types::{
    ChatRequest, ChatResponse, DebugInfo, Delivery, Greeting, Message, MessageRole, RetrievalHits,
    SourceKind, SourceRef,
};

use crate::Result;
use async_trait::async_trait;

/// The chat endpoint contract, as consumed by the session controller.
///
/// Implemented by [`ApiClient`]; tests substitute a fake.
///
/// [`ApiClient`]: crate::client::ApiClient
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// `GET /chat/greeting`.
    async fn greeting(&self) -> Result<Greeting>;

    /// `POST /chat`. The backend always returns a `session_id`, implicitly
    /// starting a new conversation when none was supplied.
    async fn send(&self, request: ChatRequest) -> Result<ChatResponse>;
}
