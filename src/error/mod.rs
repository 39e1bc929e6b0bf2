// Error types for gemtranslate
// Author: kelexine (https://github.com/kelexine)

mod classify;

pub use classify::{classify, ErrorKind, UserFacingError};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Every failure the translation pipeline can surface.
///
/// The variant is chosen where the failure happens (builder, transport,
/// upstream service, parser), so callers never need to inspect messages.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Temporary service failure: {0}")]
    TransientService(String),

    #[error("Received empty response from the translation service")]
    EmptyResponse,

    #[error("Malformed translation response: {reason}")]
    MalformedResponse { raw: String, reason: String },

    #[error("{0}")]
    Unknown(String),
}

impl From<config::ConfigError> for TranslateError {
    fn from(e: config::ConfigError) -> Self {
        TranslateError::Configuration(e.to_string())
    }
}

impl TranslateError {
    /// Raw model output attached to a malformed response, for diagnostics.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            TranslateError::MalformedResponse { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

// Convert TranslateError to HTTP responses for Axum
impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let user_error = classify(&self);
        let status = match user_error.kind {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::TransientService => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Network
            | ErrorKind::EmptyResponse
            | ErrorKind::MalformedResponse
            | ErrorKind::Unknown => StatusCode::BAD_GATEWAY,
        };

        let body = json!({
            "type": "error",
            "error": {
                "kind": user_error.kind.as_str(),
                "message": user_error.message,
                "retryable": user_error.kind.is_retryable(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
