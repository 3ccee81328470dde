pub mod chat;

use axum::routing::{get, post};
use axum::{Json, Router};

use crate::upstream::UpstreamClient;

/// Shared state for the relay routes.
///
/// The only state a request touches is the upstream client; every connection
/// is otherwise independent.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

#[derive(serde::Serialize)]
struct Health {
    status: String,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "driftchat relay is working!".to_string(),
    })
}

/// Build the relay router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat::chat))
        .with_state(state)
}
