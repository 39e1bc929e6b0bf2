// Error classification for user-facing messages
// Author: kelexine (https://github.com/kelexine)

use super::TranslateError;
use serde::Serialize;

/// Stable error categories a UI can message distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    Configuration,
    Network,
    TransientService,
    EmptyResponse,
    MalformedResponse,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Configuration => "configuration",
            ErrorKind::Network => "network",
            ErrorKind::TransientService => "transient_service",
            ErrorKind::EmptyResponse => "empty_response",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::Unknown => "unknown",
        }
    }

    /// Whether repeating the same action may succeed.
    /// The library never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::Network
                | ErrorKind::TransientService
                | ErrorKind::EmptyResponse
                | ErrorKind::MalformedResponse
        )
    }
}

/// A failure ready to be shown to an end user.
#[derive(Debug, Clone, Serialize)]
pub struct UserFacingError {
    pub kind: ErrorKind,
    /// Human-readable message, safe to display.
    pub message: String,
    /// Original low-level message, for logs only.
    #[serde(skip)]
    pub detail: String,
}

/// Map a pipeline error to its user-facing category and message.
pub fn classify(error: &TranslateError) -> UserFacingError {
    let (kind, message) = match error {
        TranslateError::InvalidInput(_) => (
            ErrorKind::InvalidInput,
            "Enter some text or choose an image to translate.",
        ),
        TranslateError::Configuration(_) => (
            ErrorKind::Configuration,
            "Translation service access is not configured.",
        ),
        TranslateError::Network(_) => (
            ErrorKind::Network,
            "Network error. Please check your internet connection.",
        ),
        TranslateError::TransientService(_) => (
            ErrorKind::TransientService,
            "The translation service had a temporary failure. Please try again shortly.",
        ),
        TranslateError::EmptyResponse => (
            ErrorKind::EmptyResponse,
            "The translation service returned an empty response. Please try again.",
        ),
        TranslateError::MalformedResponse { .. } => (
            ErrorKind::MalformedResponse,
            "The translation data was not in the expected format. Please try again.",
        ),
        TranslateError::Unknown(_) => (ErrorKind::Unknown, "An unexpected error occurred."),
    };

    UserFacingError {
        kind,
        message: message.to_string(),
        detail: error.to_string(),
    }
}
