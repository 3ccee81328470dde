//! Client for the upstream AI provider.

use reqwest::{Client, Response};
use serde_json::json;

const DISABLE_SYSTEM_PROXY_ENV: &str = "DRIFTCHAT_DISABLE_SYSTEM_PROXY";

/// Forwards chat messages to the configured provider endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    url: String,
    key: String,
}

impl UpstreamClient {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            client: build_http_client(),
            url: url.into(),
            key: key.into(),
        }
    }

    /// Forward a message upstream, requesting a streaming reply.
    pub async fn send(&self, message: &str) -> reqwest::Result<Response> {
        self.client
            .post(&self.url)
            .bearer_auth(&self.key)
            .json(&json!({ "input": message, "stream": true }))
            .send()
            .await
    }
}

fn build_http_client() -> Client {
    if should_disable_system_proxy() {
        Client::builder()
            .no_proxy()
            .build()
            .expect("Failed to build reqwest client")
    } else {
        Client::new()
    }
}

fn should_disable_system_proxy() -> bool {
    if std::env::var_os(DISABLE_SYSTEM_PROXY_ENV).is_some() {
        return true;
    }

    cfg!(test)
}
