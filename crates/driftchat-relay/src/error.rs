//! Error types for the relay.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use driftchat_models::ErrorBody;
use thiserror::Error;

/// Relay error types
#[derive(Error, Debug)]
pub enum RelayError {
    /// The request body did not carry a usable message.
    #[error("Missing message")]
    InvalidRequest,

    /// The upstream provider could not be reached.
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),
}

impl RelayError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        if let Self::Upstream(err) = &self {
            tracing::error!(error = %err, "failed to reach upstream provider");
        }
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
