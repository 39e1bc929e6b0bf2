// Image payloads and data-URI handling
// Author: kelexine (https://github.com/kelexine)

use super::models::{validate_image_size, ImageFormat, DEFAULT_MIME_TYPE};
use crate::error::Result;
use crate::models::gemini::InlineData;
use base64::Engine;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Lazily initialized regex for the MIME type in a data-URI header
static MIME_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_mime_regex() -> &'static Regex {
    MIME_REGEX.get_or_init(|| {
        Regex::new(r"^\s*data:([a-zA-Z0-9]+/[a-zA-Z0-9.+-]+)").expect("Invalid regex pattern")
    })
}

/// An image submitted for OCR or description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
    /// Raw bytes with an optional declared MIME type.
    Bytes {
        data: Vec<u8>,
        mime_type: Option<String>,
    },
    /// A `data:<mime>;base64,<payload>` string, or bare base64.
    DataUri(String),
}

impl ImagePayload {
    pub fn from_bytes(data: impl Into<Vec<u8>>, mime_type: Option<String>) -> Self {
        ImagePayload::Bytes {
            data: data.into(),
            mime_type,
        }
    }

    pub fn from_data_uri(uri: impl Into<String>) -> Self {
        ImagePayload::DataUri(uri.into())
    }

    /// An empty payload is treated the same as no image at all.
    pub fn is_empty(&self) -> bool {
        match self {
            ImagePayload::Bytes { data, .. } => data.is_empty(),
            ImagePayload::DataUri(uri) => uri.trim().is_empty(),
        }
    }

    /// Convert to Gemini `InlineData`.
    ///
    /// Returns `Ok(None)` when a data URI carries an empty payload; the
    /// image is then dropped from the request.
    pub fn to_inline_data(&self) -> Result<Option<InlineData>> {
        match self {
            ImagePayload::Bytes { data, mime_type } => {
                if data.is_empty() {
                    return Ok(None);
                }
                validate_image_size(data.len())?;

                let mime_type = mime_type
                    .as_deref()
                    .filter(|m| !m.trim().is_empty())
                    .map(str::to_string)
                    .or_else(|| ImageFormat::detect(data).map(|f| f.mime_type().to_string()))
                    .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());

                Ok(Some(InlineData {
                    mime_type,
                    data: base64::engine::general_purpose::STANDARD.encode(data),
                }))
            }
            ImagePayload::DataUri(uri) => {
                let parsed = DataUri::parse(uri);
                if parsed.payload.is_empty() {
                    warn!("Image data URI has an empty payload, sending instructions only");
                    return Ok(None);
                }
                validate_image_size(parsed.decoded_len())?;

                let mime_type = parsed.mime_type.unwrap_or(DEFAULT_MIME_TYPE);
                debug!(
                    "Parsed image data URI: {} ({} base64 chars)",
                    mime_type,
                    parsed.payload.len()
                );

                // Gemini expects base64 data as-is (no "data:image/png;base64," prefix)
                Ok(Some(InlineData {
                    mime_type: mime_type.to_string(),
                    data: parsed.payload.to_string(),
                }))
            }
        }
    }
}

/// The two halves of a data URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub mime_type: Option<&'a str>,
    pub payload: &'a str,
}

impl<'a> DataUri<'a> {
    /// Split on the first comma; the MIME type comes from the header half.
    /// A string without a comma is taken as bare base64.
    pub fn parse(input: &'a str) -> Self {
        match input.split_once(',') {
            Some((header, payload)) => DataUri {
                mime_type: get_mime_regex()
                    .captures(header)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str()),
                payload: payload.trim(),
            },
            None => DataUri {
                mime_type: None,
                payload: input.trim(),
            },
        }
    }

    /// Approximate decoded size of the base64 payload.
    pub fn decoded_len(&self) -> usize {
        self.payload.len() / 4 * 3
    }
}
