//! Transports that carry one submission to the relay and bring the reply back.

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::{MockStep, MockTransport};

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::error::TransportError;

/// Ordered chunks of the reply body as they arrive.
pub type ReplyStream = Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send>>;

/// The relay's answer to a submission.
pub enum ServerReply {
    /// Incrementally readable body.
    Stream(ReplyStream),
    /// Whole reply resolved at once.
    Full(String),
}

/// One request/response exchange with the relay.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, message: &str) -> Result<ServerReply, TransportError>;
}
