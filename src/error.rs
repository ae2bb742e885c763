use thiserror::Error;

/// Unified error type for the client.
///
/// This is the complete failure taxonomy of the SDK. Every variant is scoped
/// to a single call; nothing here is fatal to the process. `Unauthorized` is
/// terminal for the current credential and recovers only through
/// re-authentication — everything else recovers by retrying the user action.
#[derive(Debug, Error)]
pub enum Error {
    /// No response reached us at all (connect failure, timeout, DNS).
    /// Never retried automatically.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status. `detail` is the machine
    /// message extracted from the error body when one was parseable, else a
    /// message derived from the status line.
    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    /// Authentication recovery is exhausted: the credential is gone and a
    /// refresh did not bring it back. Callers must re-authenticate.
    #[error("unauthorized: session credential rejected and refresh exhausted")]
    Unauthorized,

    /// Caller-side rejection (empty message, send already in flight).
    /// Never reaches the network.
    #[error("validation error: {0}")]
    Validation(String),

    /// A 2xx response carried a body we could not decode into the expected
    /// payload type.
    #[error("malformed response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    pub fn network(msg: impl Into<String>) -> Self {
        Error::Network(msg.into())
    }

    pub fn http(status: u16, detail: impl Into<String>) -> Self {
        Error::Http {
            status,
            detail: detail.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// HTTP status of this failure, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }

    /// True for server-class failures (5xx) and undecodable success bodies,
    /// the classes the chat controller maps to the backend advisory.
    pub fn is_server_class(&self) -> bool {
        match self {
            Error::Http { status, .. } => *status >= 500,
            Error::Decode(_) => true,
            _ => false,
        }
    }
}
