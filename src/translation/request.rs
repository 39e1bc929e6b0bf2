// Request assembly (user input → Gemini)
// Author: kelexine (https://github.com/kelexine)

use super::prompts::{image_instruction, text_instruction, SYSTEM_PROMPT};
use crate::config::GeminiConfig;
use crate::error::{Result, TranslateError};
use crate::models::gemini::{
    Content, GenerateContentRequest, GenerationConfig, InlineData, Part, SystemInstruction,
};
use crate::schema::response_schema;
use crate::vision::ImagePayload;
use std::borrow::Cow;
use tracing::debug;

const RESPONSE_MIME_TYPE: &str = "application/json";

/// User input for one translation action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: Option<String>,
    /// Language code, e.g. `es`.
    pub target_language: String,
    pub image: Option<ImagePayload>,
}

impl TranslationRequest {
    pub fn text(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            target_language: target_language.into(),
            image: None,
        }
    }

    pub fn image(image: ImagePayload, target_language: impl Into<String>) -> Self {
        Self {
            text: None,
            target_language: target_language.into(),
            image: Some(image),
        }
    }

    /// Trimmed text, `None` if absent or blank.
    fn trimmed_text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Image, `None` if absent or empty.
    fn usable_image(&self) -> Option<&ImagePayload> {
        self.image.as_ref().filter(|i| !i.is_empty())
    }
}

/// Which branch of the prompt was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Translate and analyze the submitted text.
    Text,
    /// OCR and translate, or describe, the submitted image.
    Image,
}

/// A fully assembled `generateContent` request.
#[derive(Debug, Clone)]
pub struct AssembledRequest {
    pub mode: AnalysisMode,
    pub request: GenerateContentRequest,
}

impl AssembledRequest {
    /// Content parts of the single user turn.
    pub fn parts(&self) -> &[Part] {
        self.request
            .contents
            .first()
            .map(|c| c.parts.as_slice())
            .unwrap_or_default()
    }

    pub fn inline_data(&self) -> Option<&InlineData> {
        self.parts().iter().find_map(Part::as_inline_data)
    }

    pub fn into_request(self) -> GenerateContentRequest {
        self.request
    }
}

/// Builds translation requests. Holds only immutable generation settings.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    temperature: f32,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self {
            temperature: crate::config::default_temperature(),
        }
    }
}

impl RequestBuilder {
    pub fn from_config(config: &GeminiConfig) -> Self {
        Self {
            temperature: config.temperature,
        }
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Assemble the request for `input`.
    ///
    /// An image takes precedence over text: when both are present only the
    /// image is analyzed and the text is not sent.
    pub fn build(&self, input: &TranslationRequest) -> Result<AssembledRequest> {
        let target = input.target_language.trim();
        if target.is_empty() {
            return Err(TranslateError::InvalidInput(
                "Target language must not be empty".to_string(),
            ));
        }

        let (mode, parts) = match (input.usable_image(), input.trimmed_text()) {
            (Some(image), text) => {
                if text.is_some() {
                    debug!("Image supplied, ignoring accompanying text");
                }
                let mut parts = Vec::with_capacity(2);
                if let Some(inline_data) = image.to_inline_data()? {
                    parts.push(Part::InlineData { inline_data });
                }
                parts.push(Part::text(image_instruction(target)));
                (AnalysisMode::Image, parts)
            }
            (None, Some(text)) => (AnalysisMode::Text, vec![Part::text(text_instruction(text, target))]),
            (None, None) => {
                return Err(TranslateError::InvalidInput(
                    "Provide text or an image to translate".to_string(),
                ))
            }
        };

        debug!(
            "Assembled {:?} request: {} parts, target: {}",
            mode,
            parts.len(),
            target
        );

        Ok(AssembledRequest {
            mode,
            request: GenerateContentRequest {
                contents: vec![Content {
                    role: "user".to_string(),
                    parts,
                }],
                system_instruction: Some(SystemInstruction {
                    parts: vec![Part::text(SYSTEM_PROMPT)],
                }),
                generation_config: Some(GenerationConfig {
                    temperature: Some(self.temperature),
                    response_mime_type: Some(RESPONSE_MIME_TYPE.to_string()),
                    response_schema: Some(Cow::Borrowed(response_schema())),
                }),
            },
        })
    }
}

/// Build a request with default generation settings.
pub fn build_request(
    text: Option<&str>,
    target_language: &str,
    image: Option<ImagePayload>,
) -> Result<AssembledRequest> {
    RequestBuilder::default().build(&TranslationRequest {
        text: text.map(str::to_string),
        target_language: target_language.to_string(),
        image,
    })
}
