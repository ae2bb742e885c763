//! Authenticated API access layer.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! [`ApiClient`] is an explicitly constructed object owned by a composition
//! root and injected where needed — there is no process-wide singleton.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod events;
mod recovery;

pub use builder::ApiClientBuilder;
pub use core::{ApiClient, LoginRequest, LoginResponse, UserInfo};
pub use events::{SessionEvent, SessionEvents};
