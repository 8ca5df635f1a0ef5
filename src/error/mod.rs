// Error types for the gatordocs relay

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// All failure modes of the relay.
///
/// The first four variants are the classified completion failures; they are
/// produced exclusively by the Ollama client and translated into user-facing
/// text by `relay::classify`. The rest cover configuration, request
/// validation and plumbing.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The completion service could not be reached at the transport level.
    #[error("could not reach the completion service: {0}")]
    Connection(String),

    /// The completion service answered with a non-success status.
    #[error("completion request failed with status {status}")]
    Api { status: u16, message: String },

    /// The completion response body was not valid JSON.
    #[error("failed to parse the completion response: {0}")]
    Parse(String),

    /// The body was valid JSON but the answer field was missing or mistyped.
    #[error("unexpected completion response shape: {0}")]
    Shape(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// HTTP status this error maps to when it escapes a handler.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::NotFound(_) => StatusCode::NOT_FOUND,
            RelayError::Connection(_)
            | RelayError::Api { .. }
            | RelayError::Parse(_)
            | RelayError::Shape(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            RelayError::InvalidRequest(_) => "invalid_request_error",
            RelayError::NotFound(_) => "not_found_error",
            RelayError::Connection(_)
            | RelayError::Api { .. }
            | RelayError::Parse(_)
            | RelayError::Shape(_) => "upstream_error",
            RelayError::Config(_) | RelayError::ConfigParsing(_) => "configuration_error",
            _ => "api_error",
        }
    }
}

// Convert RelayError to HTTP responses for Axum
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = json!({
            "type": "error",
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });

        (self.status(), axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
