//! Wire and history types for the chat conversation protocol.

use serde::{Deserialize, Serialize};

/// Which record grounded an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Kb,
    Website,
}

/// Attribution reference: the knowledge-base or website-page record an
/// answer was grounded on. Attribution only, never dereferenced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// `POST /chat` request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub message: String,
}

/// `POST /chat` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    #[serde(default)]
    pub refused: bool,
    #[serde(default)]
    pub openai_called: bool,
    #[serde(default)]
    pub missing_info: Option<serde_json::Value>,
    /// Present only when the backend runs in a development environment.
    #[serde(default)]
    pub debug: Option<DebugInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DebugInfo {
    pub llm_called: bool,
    pub retrieval_hits: RetrievalHits,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RetrievalHits {
    pub kb: u32,
    pub website: u32,
}

/// `GET /chat/greeting` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct Greeting {
    pub message: String,
}

/// History message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Bot,
}

/// Two-phase delivery marker for optimistically appended messages: a user
/// message enters the history as `Pending` before its network call completes
/// and is reconciled to `Delivered` when the exchange resolves either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Pending,
    Delivered,
}

/// One entry in a conversation history. Immutable once appended, apart from
/// the pending-to-delivered reconciliation; order is causal send/receive
/// order.
#[derive(Debug, Clone)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub sources: Vec<SourceRef>,
    /// The backend declined to answer for insufficient grounding. A refusal
    /// is a normal answer, distinct from an error.
    pub refused: bool,
    pub debug: Option<DebugInfo>,
    pub delivery: Delivery,
}

impl Message {
    /// Optimistically appended user message, pending until its exchange
    /// resolves.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: text.into(),
            sources: Vec::new(),
            refused: false,
            debug: None,
            delivery: Delivery::Pending,
        }
    }

    /// Plain bot message (greeting, fallback, advisory).
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Bot,
            content: text.into(),
            sources: Vec::new(),
            refused: false,
            debug: None,
            delivery: Delivery::Delivered,
        }
    }

    /// Bot message carrying a backend answer with its attribution.
    pub fn bot_answer(response: ChatResponse) -> Self {
        Self {
            role: MessageRole::Bot,
            content: response.answer,
            sources: response.sources,
            refused: response.refused,
            debug: response.debug,
            delivery: Delivery::Delivered,
        }
    }
}
