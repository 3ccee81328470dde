//! Deterministic scripted transport for session and driver tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_stream::stream;
use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::Mutex;

use super::{ChatTransport, ServerReply};
use crate::error::TransportError;

/// Scripted outcome for one submission.
#[derive(Debug, Clone)]
pub enum MockStep {
    /// Stream these byte chunks, then end cleanly.
    Chunks(Vec<Vec<u8>>),
    /// Stream these byte chunks, then break the connection.
    ChunksThenError(Vec<Vec<u8>>),
    /// Resolve a whole reply at once.
    Full(String),
    /// Fail before any data arrives.
    SendError,
    /// Non-OK status from the relay.
    Status(u16),
}

/// A deterministic transport driven by scripted steps, one per submission.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<MockStep>>>,
}

impl MockTransport {
    pub fn from_steps(steps: Vec<MockStep>) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::from(steps))),
        }
    }

    pub async fn push_step(&self, step: MockStep) {
        self.script.lock().await.push_back(step);
    }

    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }
}

fn chunk_stream(chunks: Vec<Vec<u8>>, broken: bool) -> ServerReply {
    ServerReply::Stream(Box::pin(stream! {
        for chunk in chunks {
            yield Ok(Bytes::from(chunk));
        }
        if broken {
            yield Err(TransportError::ConnectionLost(
                "connection reset by peer".to_string(),
            ));
        }
    }))
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send(&self, _message: &str) -> Result<ServerReply, TransportError> {
        let step = self
            .script
            .lock()
            .await
            .pop_front()
            .unwrap_or(MockStep::SendError);

        match step {
            MockStep::Chunks(chunks) => Ok(chunk_stream(chunks, false)),
            MockStep::ChunksThenError(chunks) => Ok(chunk_stream(chunks, true)),
            MockStep::Full(reply) => Ok(ServerReply::Full(reply)),
            MockStep::SendError => Err(TransportError::ConnectionLost(
                "connection refused".to_string(),
            )),
            MockStep::Status(status) => Err(TransportError::Status {
                status,
                detail: None,
            }),
        }
    }
}
