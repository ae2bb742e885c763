use crate::chat::types::{ChatRequest, Delivery, Message};
use crate::chat::ChatApi;
use crate::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Substituted when the greeting fetch fails; that failure is never surfaced.
pub const FALLBACK_GREETING: &str = "سلام! چطور می‌تونم کمکتون کنم؟";

/// Advisory appended when no response reached us at all.
pub const CONNECTIVITY_ADVISORY: &str =
    "خطای اتصال: لطفا مطمئن شوید که سرور در حال اجرا است.";

/// Advisory appended on server-class failures.
pub const BACKEND_ADVISORY: &str =
    "خطای سرور: لطفا مطمئن شوید که پایگاه داده و سرویس‌ها در حال اجرا هستند.";

/// Widget visibility. Toggled by the user; the `Closed -> Open` transition
/// triggers the greeting bootstrap at most once per controller lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Closed,
    Open,
}

/// Greeting bootstrap progression. `Requested` guards against a concurrent
/// second open while the fetch is in flight; `Done` is reached on success
/// and fallback alike and is never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GreetingState {
    NotRequested,
    Requested,
    Done,
}

struct SessionState {
    widget: WidgetState,
    greeting: GreetingState,
    session_id: Option<String>,
    messages: Vec<Message>,
}

/// Releases the single-flight gate when dropped, so a send future cancelled
/// at its await point (timeout, task abort) cannot wedge the controller.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Rolls a cancelled greeting bootstrap back to `NotRequested` so a later
/// open can run it; disarmed once the bootstrap completes normally.
struct GreetingReset<'a> {
    state: &'a Mutex<SessionState>,
    armed: bool,
}

impl GreetingReset<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for GreetingReset<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut state = self.state.lock().unwrap();
            if state.greeting == GreetingState::Requested {
                state.greeting = GreetingState::NotRequested;
            }
        }
    }
}

/// Controller for one chat conversation session.
///
/// Owns the session identity and the ordered message history. The session id
/// is adopted from the first successful chat response and is sticky for this
/// controller's lifetime; it is never reset except by dropping the
/// controller. History is not persisted anywhere.
///
/// Sends are strictly serialized: a send while another is outstanding is
/// rejected outright with no network call and no history change, which rules
/// out interleaved history and duplicate session adoption races. The busy
/// flag is the only gate; internal locks are never held across an await.
///
/// Network failures during an exchange are consumed here and shown to the
/// conversation as a fixed advisory bot message — the controller surfaces
/// errors only for caller-side rejections.
pub struct ChatSessionController {
    api: Arc<dyn ChatApi>,
    state: Mutex<SessionState>,
    busy: AtomicBool,
}

impl ChatSessionController {
    pub fn new(api: Arc<dyn ChatApi>) -> Self {
        Self {
            api,
            state: Mutex::new(SessionState {
                widget: WidgetState::Closed,
                greeting: GreetingState::NotRequested,
                session_id: None,
                messages: Vec::new(),
            }),
            busy: AtomicBool::new(false),
        }
    }

    /// Open the widget. The first open (and only the first) bootstraps the
    /// greeting; reopening after messages exist does not refetch it.
    pub async fn open(&self) {
        self.state.lock().unwrap().widget = WidgetState::Open;
        self.fetch_greeting().await;
    }

    /// Close the widget. History and session id are untouched.
    pub fn close(&self) {
        self.state.lock().unwrap().widget = WidgetState::Closed;
    }

    /// Greeting bootstrap. Runs only while no session and no messages exist
    /// yet, and at most once per controller lifetime; appends one bot
    /// message, substituting [`FALLBACK_GREETING`] on failure. Never fails.
    /// Cancellation mid-fetch leaves the bootstrap runnable again.
    pub async fn fetch_greeting(&self) {
        {
            let mut state = self.state.lock().unwrap();
            let fresh = state.greeting == GreetingState::NotRequested
                && state.messages.is_empty()
                && state.session_id.is_none();
            if !fresh {
                return;
            }
            state.greeting = GreetingState::Requested;
        }
        let reset = GreetingReset {
            state: &self.state,
            armed: true,
        };

        let content = match self.api.greeting().await {
            Ok(greeting) => greeting.message,
            Err(err) => {
                tracing::debug!(error = %err, "greeting fetch failed, using fallback");
                FALLBACK_GREETING.to_string()
            }
        };

        {
            let mut state = self.state.lock().unwrap();
            state.messages.push(Message::bot(content));
            state.greeting = GreetingState::Done;
        }
        reset.disarm();
    }

    /// Send one user message and append the bot's reply.
    ///
    /// Rejects with [`Error::Validation`] — no network call, no history
    /// change — when `text` trims to empty or another send is outstanding.
    /// The user message is appended pending before the call and reconciled
    /// when the exchange resolves; a failed exchange appends an advisory bot
    /// message instead of surfacing the error.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("message must not be empty"));
        }
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(Error::validation("a send is already outstanding"));
        }
        // Held across the exchange so cancellation at any await point
        // releases the gate.
        let _busy = BusyGuard(&self.busy);

        self.exchange(trimmed).await;
        Ok(())
    }

    async fn exchange(&self, text: &str) {
        let session_id = {
            let mut state = self.state.lock().unwrap();
            state.messages.push(Message::user(text));
            state.session_id.clone()
        };

        let result = self
            .api
            .send(ChatRequest {
                session_id,
                message: text.to_string(),
            })
            .await;

        let mut state = self.state.lock().unwrap();
        if let Some(pending) = state
            .messages
            .iter_mut()
            .rev()
            .find(|m| m.delivery == Delivery::Pending)
        {
            pending.delivery = Delivery::Delivered;
        }

        match result {
            Ok(response) => {
                // First successful exchange fixes the session id for good.
                if state.session_id.is_none() {
                    state.session_id = Some(response.session_id.clone());
                }
                state.messages.push(Message::bot_answer(response));
            }
            Err(err) => {
                tracing::debug!(error = %err, "chat exchange failed, appending advisory");
                state.messages.push(Message::bot(advisory_for(&err)));
            }
        }
    }

    pub fn widget_state(&self) -> WidgetState {
        self.state.lock().unwrap().widget
    }

    pub fn session_id(&self) -> Option<String> {
        self.state.lock().unwrap().session_id.clone()
    }

    /// Snapshot of the history in causal order.
    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().unwrap().messages.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Fixed advisory chosen by error class; anything that is neither a
/// connectivity nor a server-class failure keeps its raw message text.
fn advisory_for(err: &Error) -> String {
    match err {
        Error::Network(_) => CONNECTIVITY_ADVISORY.to_string(),
        e if e.is_server_class() => BACKEND_ADVISORY.to_string(),
        Error::Http { detail, .. } => detail.clone(),
        other => other.to_string(),
    }
}
