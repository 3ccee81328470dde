//! Wire types for the client <-> relay API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Non-streaming reply body: the whole answer in one JSON object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Error envelope returned by the relay on 400/500.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_round_trip() {
        let body = serde_json::to_string(&ChatRequest {
            message: "Hello".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"message":"Hello"}"#);
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_string(&ErrorBody::new("Missing message")).unwrap();
        assert_eq!(body, r#"{"error":"Missing message"}"#);
    }
}
