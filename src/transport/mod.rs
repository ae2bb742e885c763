//! Network transport: the request dispatcher.
//!
//! This layer performs calls and normalizes failures. It knows nothing about
//! retries or authentication recovery; that lives in [`crate::client`].

mod http;

pub use http::HttpDispatcher;
