use crate::client::events::SessionEvents;
use crate::transport::HttpDispatcher;
use crate::{Error, Result};
use std::future::Future;
use std::sync::Arc;

pub(crate) const LOGIN_PATH: &str = "/auth/login";
pub(crate) const REFRESH_PATH: &str = "/auth/refresh";

/// Per-call recovery state. Each dispatched call walks this machine at most
/// once: one refresh, one retry, then the outcome is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecoveryState {
    Initial,
    Refreshing,
    Retrying,
}

/// Bounded refresh-and-retry around every dispatched call.
///
/// A 401 on a normal endpoint triggers exactly one credential refresh; on
/// refresh success the original call is dispatched once more and that second
/// outcome stands — a second 401 is terminal, never a second refresh. Calls
/// to the refresh or login endpoints are exempt: a 401 there goes straight to
/// unauthorized, which is what prevents infinite refresh loops. Network
/// errors are never retried.
///
/// Exhausted recovery emits [`SessionEvent::Unauthorized`] and surfaces
/// [`Error::Unauthorized`]; navigation is a subscriber concern, not ours.
///
/// [`SessionEvent::Unauthorized`]: crate::client::events::SessionEvent
pub(crate) struct AuthRecoveryPolicy {
    transport: Arc<HttpDispatcher>,
    events: SessionEvents,
}

impl AuthRecoveryPolicy {
    pub fn new(transport: Arc<HttpDispatcher>, events: SessionEvents) -> Self {
        Self { transport, events }
    }

    /// Run `op` under the recovery machine. `op` must be re-invokable: it is
    /// called once in `Initial` and at most once more in `Retrying`.
    pub async fn run<T, F, Fut>(&self, path: &str, op: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut state = RecoveryState::Initial;

        loop {
            match state {
                RecoveryState::Initial => match op().await {
                    Err(Error::Http { status: 401, .. }) => {
                        if is_exempt(path) {
                            return Err(self.unauthorized());
                        }
                        state = RecoveryState::Refreshing;
                    }
                    outcome => return outcome,
                },
                RecoveryState::Refreshing => {
                    tracing::warn!(path, "credential rejected, attempting refresh");
                    match self.transport.post_no_content(REFRESH_PATH).await {
                        Ok(()) => state = RecoveryState::Retrying,
                        Err(err) => {
                            // Terminal even for a connectivity blip during
                            // refresh; candidate policy refinement, logged
                            // with its class so it stays distinguishable.
                            tracing::warn!(error = %err, network = err.is_network(), "refresh failed");
                            return Err(self.unauthorized());
                        }
                    }
                }
                RecoveryState::Retrying => match op().await {
                    Err(Error::Http { status: 401, .. }) => return Err(self.unauthorized()),
                    outcome => return outcome,
                },
            }
        }
    }

    fn unauthorized(&self) -> Error {
        self.events.emit_unauthorized();
        Error::Unauthorized
    }
}

/// Refresh and login never enter the refresh machine themselves.
fn is_exempt(path: &str) -> bool {
    path.contains(REFRESH_PATH) || path.contains(LOGIN_PATH)
}
