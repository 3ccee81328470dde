//! Relay configuration from the environment.

use std::env;

const UPSTREAM_URL_ENV: &str = "DRIFTCHAT_UPSTREAM_URL";
const UPSTREAM_KEY_ENV: &str = "DRIFTCHAT_UPSTREAM_KEY";
const HOST_ENV: &str = "DRIFTCHAT_HOST";
const PORT_ENV: &str = "DRIFTCHAT_PORT";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub upstream_url: String,
    pub upstream_key: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl RelayConfig {
    /// Load the configuration from the environment.
    ///
    /// The upstream URL and credential are required; startup must abort when
    /// either is missing. Host and port have defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let upstream_url = env::var(UPSTREAM_URL_ENV)
            .map_err(|_| anyhow::anyhow!("{} must be set", UPSTREAM_URL_ENV))?;
        let upstream_key = env::var(UPSTREAM_KEY_ENV)
            .map_err(|_| anyhow::anyhow!("{} must be set", UPSTREAM_KEY_ENV))?;

        let host = env::var(HOST_ENV).unwrap_or_else(|_| default_host());
        let port = env::var(PORT_ENV)
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or_else(default_port);

        Ok(Self {
            host,
            port,
            upstream_url,
            upstream_key,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
