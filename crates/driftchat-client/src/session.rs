//! Per-session chat state.

use driftchat_models::ChatMessage;

/// Lifecycle of one submit-to-settle exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum ExchangeStatus {
    Sending,
    Streaming,
    Completed,
    Failed { error: String },
}

/// One submit-to-settle cycle: exactly one user message and one assistant
/// reply placeholder.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user: ChatMessage,
    pub reply: ChatMessage,
    pub status: ExchangeStatus,
}

impl Exchange {
    fn new(text: &str) -> Self {
        Self {
            user: ChatMessage::user(text),
            reply: ChatMessage::assistant_placeholder(),
            status: ExchangeStatus::Sending,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(
            self.status,
            ExchangeStatus::Completed | ExchangeStatus::Failed { .. }
        )
    }
}

/// Observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Sending,
    StreamingResponse,
    Completed,
    Failed,
}

/// Events that drive an in-flight exchange.
#[derive(Debug, Clone)]
pub enum ExchangeEvent {
    ChunkReceived(String),
    StreamEnded,
    Failed(String),
}

/// Per-tab state machine.
///
/// Admits one submission at a time, feeds the reply placeholder from decoded
/// increments in arrival order, and settles each exchange exactly once. A
/// settled exchange admits the next submission; an in-flight one drops it.
#[derive(Debug, Default)]
pub struct ClientSession {
    history: Vec<Exchange>,
    current: Option<Exchange>,
}

impl ClientSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a submission.
    ///
    /// Empty or whitespace-only input is a no-op, and so is submitting while
    /// an exchange is in flight (dropped, not queued). On admission the user
    /// message and the empty assistant placeholder are created together, and
    /// the admitted text is returned for the caller to put on the wire.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.is_busy() {
            return None;
        }

        // Archive the previous settled exchange before starting the next.
        if let Some(done) = self.current.take() {
            self.history.push(done);
        }
        self.current = Some(Exchange::new(text));
        Some(text.to_string())
    }

    /// Apply an exchange event. Events arriving after settle are ignored, so
    /// a settled placeholder is immutable.
    pub fn apply(&mut self, event: ExchangeEvent) {
        let Some(exchange) = self.current.as_mut() else {
            return;
        };
        if exchange.is_settled() {
            return;
        }

        match event {
            ExchangeEvent::ChunkReceived(text) => {
                exchange.status = ExchangeStatus::Streaming;
                exchange.reply.content.push_str(&text);
            }
            ExchangeEvent::StreamEnded => {
                exchange.status = ExchangeStatus::Completed;
            }
            ExchangeEvent::Failed(error) => {
                // The placeholder shows the error; partial text is not kept.
                exchange.reply.content = format!("Error: {error}");
                exchange.status = ExchangeStatus::Failed { error };
            }
        }
    }

    pub fn state(&self) -> SessionState {
        match self.current.as_ref().map(|exchange| &exchange.status) {
            None => SessionState::Idle,
            Some(ExchangeStatus::Sending) => SessionState::Sending,
            Some(ExchangeStatus::Streaming) => SessionState::StreamingResponse,
            Some(ExchangeStatus::Completed) => SessionState::Completed,
            Some(ExchangeStatus::Failed { .. }) => SessionState::Failed,
        }
    }

    /// True for the whole Sending/StreamingResponse span, false once the
    /// exchange settles -- the awaiting indicator is derived, never stored.
    pub fn is_awaiting(&self) -> bool {
        self.is_busy()
    }

    fn is_busy(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|exchange| !exchange.is_settled())
    }

    pub fn current(&self) -> Option<&Exchange> {
        self.current.as_ref()
    }

    /// All exchanges, oldest first, including the current one.
    pub fn exchanges(&self) -> impl Iterator<Item = &Exchange> {
        self.history.iter().chain(self.current.iter())
    }

    /// Drop the visible history. An in-flight exchange stays untouched.
    pub fn clear(&mut self) {
        if !self.is_busy() {
            self.current = None;
        }
        self.history.clear();
    }
}
