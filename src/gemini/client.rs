// Gemini API client
// Author: kelexine (https://github.com/kelexine)

use crate::config::{ApiKey, GeminiConfig};
use crate::error::{Result, TranslateError};
use crate::models::gemini::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use crate::translation::ContentGenerator;
use crate::utils::logging::sanitize;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error};

/// Client for the Gemini `generateContent` endpoint.
///
/// Sends exactly one request per call and never retries. Every failure is
/// mapped to a [`TranslateError`] variant where it happens: transport
/// errors become `Network`, HTTP status codes and structured error reasons
/// decide between `Configuration`, `TransientService` and `Unknown`.
pub struct GeminiClient {
    http_client: Client,
    api_key: ApiKey,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client. Fails with `Configuration` when no API key is set.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_blank())
            .ok_or_else(|| {
                TranslateError::Configuration(
                    "Gemini API key is missing. Set GEMINI_API_KEY or gemini.api_key.".to_string(),
                )
            })?;

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .use_rustls_tls();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| TranslateError::Unknown(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created Gemini client for model {}", config.model);

        Ok(Self {
            http_client,
            api_key,
            config: config.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Call `generateContent` and return the decoded response.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint();
        debug!("Calling generateContent: {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let response_text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            error!(
                "Gemini API error: HTTP {} - Response body: {}",
                status,
                sanitize(&response_text)
            );
            return Err(map_status_error(status, &response_text));
        }

        debug!(
            "Raw Gemini response (first 500 chars): {}",
            response_text.chars().take(500).collect::<String>()
        );

        serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse Gemini response envelope: {}", e);
            TranslateError::Unknown(format!("Response parsing error: {}", e))
        })
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, request: GenerateContentRequest) -> Result<Option<String>> {
        let response = self.generate_content(&request).await?;
        if let Some(reason) = response.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            debug!("Response finish_reason: {}", reason);
        }
        Ok(response.text())
    }
}

/// Map a reqwest transport failure. A timeout only happens when the caller
/// configured one, and counts as a temporary failure.
fn map_transport_error(e: reqwest::Error) -> TranslateError {
    if e.is_timeout() {
        TranslateError::TransientService(format!("Request timed out: {}", e))
    } else {
        TranslateError::Network(format!("HTTP error: {}", e))
    }
}

/// Map a non-success status (and its structured error body) to an error kind.
fn map_status_error(status: StatusCode, body: &str) -> TranslateError {
    let detail = serde_json::from_str::<ErrorResponse>(body).ok().map(|r| r.error);
    let message = detail
        .as_ref()
        .and_then(|d| d.message.clone().or_else(|| d.status.clone()))
        .unwrap_or_else(|| sanitize(body));
    let reason = detail.as_ref().and_then(|d| d.reason());

    match (status.as_u16(), reason) {
        (_, Some("API_KEY_INVALID" | "API_KEY_SERVICE_BLOCKED")) | (401 | 403, _) => {
            TranslateError::Configuration(format!("HTTP {}: {}", status, message))
        }
        (429, _) | (500..=599, _) => {
            TranslateError::TransientService(format!("HTTP {}: {}", status, message))
        }
        _ => TranslateError::Unknown(format!("HTTP {}: {}", status, message)),
    }
}
