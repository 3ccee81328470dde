//! Drives one exchange end to end: submit, transport call, incremental render.

use futures::StreamExt;

use crate::decode::decode_stream;
use crate::error::ClientError;
use crate::render::ReplySink;
use crate::session::{ClientSession, ExchangeEvent};
use crate::transport::{ChatTransport, ServerReply};

/// A chat front-end loop: session plus transport plus the rendering seam.
pub struct Chat<T> {
    session: ClientSession,
    transport: T,
}

impl<T: ChatTransport> Chat<T> {
    pub fn new(transport: T) -> Self {
        Self {
            session: ClientSession::new(),
            transport,
        }
    }

    pub fn session(&self) -> &ClientSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ClientSession {
        &mut self.session
    }

    /// Submit one message and drive the exchange until it settles.
    ///
    /// Returns false when the submission is dropped at the boundary (empty
    /// input or an exchange already in flight). The awaiting indicator is
    /// hidden again by the time this returns, whichever way it settles.
    pub async fn send(&mut self, input: &str, sink: &mut dyn ReplySink) -> bool {
        let Some(message) = self.session.submit(input) else {
            return false;
        };
        sink.awaiting(true);

        if let Err(err) = self.run_exchange(&message, sink).await {
            tracing::debug!(error = %err, "exchange failed");
            self.session.apply(ExchangeEvent::Failed(err.to_string()));
        }

        // Single settle path: indicator off on success and failure alike.
        sink.awaiting(false);
        if let Some(exchange) = self.session.current() {
            sink.settled(&exchange.status);
        }
        true
    }

    async fn run_exchange(
        &mut self,
        message: &str,
        sink: &mut dyn ReplySink,
    ) -> Result<(), ClientError> {
        let reply = self
            .transport
            .send(message)
            .await
            .map_err(ClientError::Transport)?;

        match reply {
            ServerReply::Full(text) => {
                self.session.apply(ExchangeEvent::ChunkReceived(text.clone()));
                sink.delta(&text);
            }
            ServerReply::Stream(bytes) => {
                // One suspension per chunk: rendering gets a turn between
                // increments, and the transport is read only as fast as this
                // loop consumes it.
                let mut increments = std::pin::pin!(decode_stream(bytes));
                while let Some(increment) = increments.next().await {
                    let text = increment?;
                    self.session.apply(ExchangeEvent::ChunkReceived(text.clone()));
                    sink.delta(&text);
                }
            }
        }

        self.session.apply(ExchangeEvent::StreamEnded);
        Ok(())
    }
}
