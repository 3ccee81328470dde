//! The chat relay endpoint.

use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::response::Response;
use serde::Deserialize;

use crate::api::AppState;
use crate::error::RelayError;

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    message: Option<String>,
}

/// POST /api/chat
///
/// Validates the message, forwards it upstream and relays the upstream
/// response back to the caller. The relay never parses the payload; it is a
/// byte-transparent passthrough.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatBody>,
) -> Result<Response, RelayError> {
    let message = body
        .message
        .filter(|message| !message.is_empty())
        .ok_or(RelayError::InvalidRequest)?;

    tracing::debug!(chars = message.len(), "forwarding chat message upstream");

    let upstream = state.upstream.send(&message).await?;
    tracing::info!(status = %upstream.status(), "relaying upstream response");

    Ok(relay_response(upstream))
}

/// Relay the upstream response unmodified.
///
/// Status and headers are forwarded verbatim -- that includes any framing
/// headers the upstream set. The body is handed over as a byte stream, so
/// chunks reach the caller in order and unaltered, the relay reads from
/// upstream only as fast as the caller consumes, and a caller disconnect
/// drops the upstream stream. A non-streaming upstream body arrives as a
/// single chunk through the same path.
fn relay_response(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let headers = upstream.headers().clone();

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    for (name, value) in headers.iter() {
        response.headers_mut().append(name, value.clone());
    }
    response
}
