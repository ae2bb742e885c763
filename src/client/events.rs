//! Session lifecycle events.
//!
//! The transport/recovery layers never navigate or touch UI concerns; they
//! broadcast facts and let a presentation-layer subscriber decide what to do
//! (e.g. best-effort logout followed by a redirect to the login screen, only
//! when running interactively under the protected admin area).

use tokio::sync::broadcast;

/// A fact about the session, emitted by the recovery layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Authentication recovery is exhausted for some call chain. Independent
    /// concurrent call chains may each emit this once; subscribers are
    /// expected to handle the duplication idempotently.
    Unauthorized,
}

/// Broadcast hub for [`SessionEvent`]s.
///
/// Cloning is cheap; all clones feed the same subscribers.
#[derive(Clone)]
pub struct SessionEvents {
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionEvents {
    pub(crate) fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Subscribe to session events. Receivers that lag past the channel
    /// capacity miss events rather than blocking emitters.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    pub(crate) fn emit_unauthorized(&self) {
        tracing::warn!("session unauthorized: recovery exhausted");
        // No subscribers is fine; the event is advisory.
        let _ = self.tx.send(SessionEvent::Unauthorized);
    }
}
