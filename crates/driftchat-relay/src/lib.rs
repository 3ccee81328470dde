pub mod api;
pub mod config;
pub mod error;
pub mod upstream;

pub use api::{AppState, router};
pub use config::RelayConfig;
pub use upstream::UpstreamClient;
