//! Error types for the client.

use thiserror::Error;

/// Failure reaching the relay or reading its response.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The connection broke mid-stream.
    #[error("connection lost: {0}")]
    ConnectionLost(String),

    /// The relay answered with a non-OK status; treated uniformly as failure.
    #[error("server error {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("unreadable reply: {0}")]
    InvalidReply(#[from] serde_json::Error),
}

/// Malformed byte input at decode time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid utf-8 sequence at byte {offset}")]
    Malformed { offset: usize },

    /// The stream ended inside a multi-byte character.
    #[error("stream ended inside a multi-byte character")]
    Truncated,
}

/// Anything that settles an exchange as Failed. No variant is retried.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
