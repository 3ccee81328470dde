//! HTTP transport against a running relay.

use async_trait::async_trait;
use driftchat_models::{ChatReply, ChatRequest};
use futures::StreamExt;
use reqwest::Client;

use super::{ChatTransport, ServerReply};
use crate::error::TransportError;

pub struct HttpTransport {
    client: Client,
    chat_url: String,
}

impl HttpTransport {
    pub fn new(server_url: impl Into<String>) -> Self {
        let base = server_url.into();
        Self {
            client: Client::new(),
            chat_url: format!("{}/api/chat", base.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> Result<ServerReply, TransportError> {
        let response = self
            .client
            .post(&self.chat_url)
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.ok().filter(|text| !text.is_empty());
            tracing::debug!(status = %status, detail = ?detail, "relay returned non-OK status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            // Non-streaming fallback: the whole reply in one JSON object.
            let reply: ChatReply = serde_json::from_str(&response.text().await?)?;
            return Ok(ServerReply::Full(reply.reply));
        }

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(TransportError::from));
        Ok(ServerReply::Stream(Box::pin(stream)))
    }
}
