// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::TranslateError;
use crate::languages::{self, Language};
use crate::models::translation::TranslationResult;
use crate::translation::{ContentGenerator, TranslationRequest};
use crate::vision::ImagePayload;
use axum::{extract::State, Json};
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub api_key_configured: bool,
    pub timestamp: String,
}

pub async fn health_handler<G: ContentGenerator + 'static>(
    State(state): State<AppState<G>>,
) -> Json<HealthResponse> {
    let gemini = &state.config.gemini;
    Json(HealthResponse {
        status: "ok".to_string(),
        model: gemini.model.clone(),
        api_key_configured: gemini.api_key.as_ref().is_some_and(|k| !k.is_blank()),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn languages_handler() -> Json<Vec<Language>> {
    Json(languages::all().copied().collect())
}

/// Body of `POST /v1/translate`.
#[derive(Debug, Deserialize)]
pub struct TranslateBody {
    #[serde(default)]
    pub text: Option<String>,
    pub target_language: String,
    #[serde(default)]
    pub image: Option<ImageBody>,
    /// Image as a `data:` URI. Ignored when `image` is also present.
    #[serde(default)]
    pub image_data_uri: Option<String>,
}

impl TranslateBody {
    fn image_payload(&mut self) -> Result<Option<ImagePayload>, TranslateError> {
        match (self.image.take(), self.image_data_uri.take()) {
            (Some(image), _) => image.into_payload().map(Some),
            (None, Some(uri)) => Ok(Some(ImagePayload::from_data_uri(uri))),
            (None, None) => Ok(None),
        }
    }
}

/// An image as a data URI string, or as base64 data with a MIME type.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImageBody {
    DataUri(String),
    Base64 {
        data: String,
        #[serde(default)]
        mime_type: Option<String>,
    },
}

impl ImageBody {
    fn into_payload(self) -> Result<ImagePayload, TranslateError> {
        match self {
            ImageBody::DataUri(uri) => Ok(ImagePayload::from_data_uri(uri)),
            ImageBody::Base64 { data, mime_type } => {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(data.trim())
                    .map_err(|e| {
                        TranslateError::InvalidInput(format!("Invalid base64 image data: {}", e))
                    })?;
                Ok(ImagePayload::from_bytes(bytes, mime_type))
            }
        }
    }
}

/// Handler for `/v1/translate`
pub async fn translate_handler<G: ContentGenerator + 'static>(
    State(state): State<AppState<G>>,
    body: String, // Get raw JSON as string first
) -> Result<Json<TranslationResult>, TranslateError> {
    // Manually deserialize to get better error messages
    let mut body: TranslateBody = serde_json::from_str(&body).map_err(|e| {
        debug!("Failed to deserialize request: {}", e);
        TranslateError::InvalidInput(format!("JSON deserialization error: {}", e))
    })?;

    info!(
        "Received translate request: target={}, text={}, image={}",
        body.target_language,
        body.text.as_ref().map_or(0, |t| t.len()),
        body.image.is_some() || body.image_data_uri.is_some()
    );

    let image = body.image_payload()?;
    let request = TranslationRequest {
        text: body.text,
        target_language: body.target_language,
        image,
    };

    let result = state.translator.translate(&request).await?;
    Ok(Json(result))
}
