//! # kbchat-client
//!
//! Async client SDK for the KBChat knowledge-base assistant backend.
//!
//! ## Overview
//!
//! The backend authenticates with opaque, server-issued cookies and signals a
//! stale credential with HTTP 401. This crate layers the pieces needed to use
//! that API comfortably:
//!
//! - **Request dispatch** ([`transport`]): JSON calls with credentials
//!   attached via the cookie jar and normalized error bodies.
//! - **Auth recovery** ([`client`]): a bounded refresh-and-retry wrapped
//!   around every call, broadcasting an unauthorized event when recovery is
//!   exhausted.
//! - **Chat sessions** ([`chat`]): conversation identity, ordered history,
//!   greeting bootstrap, single-flight sends, source attribution.
//! - **Admin resources** ([`resources`]): typed CRUD clients for knowledge
//!   base entries, website sources, greetings, intents, logs, and health.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kbchat_client::{ApiClient, ChatSessionController};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> kbchat_client::Result<()> {
//!     let client = Arc::new(
//!         ApiClient::builder()
//!             .base_url("http://localhost:8000/api")
//!             .build()?,
//!     );
//!
//!     let chat = ChatSessionController::new(client.clone());
//!     chat.open().await;
//!     chat.send_message("سلام").await?;
//!     for message in chat.messages() {
//!         println!("{:?}: {}", message.role, message.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Authenticated API client, builder, session events |
//! | [`transport`] | HTTP dispatcher and error-body normalization |
//! | [`chat`] | Conversation session controller and chat wire types |
//! | [`resources`] | Typed admin CRUD clients |

pub mod chat;
pub mod client;
pub mod resources;
pub mod transport;

// Re-export main types for convenience
pub use chat::{ChatApi, ChatSessionController, Message, MessageRole, SourceKind, SourceRef, WidgetState};
pub use client::{ApiClient, ApiClientBuilder, SessionEvent, SessionEvents};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
