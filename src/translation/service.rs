// Translation service: build → call → normalize
// Author: kelexine (https://github.com/kelexine)

use super::request::{RequestBuilder, TranslationRequest};
use super::response::normalize;
use crate::error::{classify, Result};
use crate::languages;
use crate::models::gemini::GenerateContentRequest;
use crate::models::translation::TranslationResult;
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// The opaque generative-language backend.
///
/// Returns the raw text of the reply, or `None` when the service produced
/// no text at all.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: GenerateContentRequest) -> Result<Option<String>>;
}

/// Runs one translation per call. Holds no mutable state, so a single
/// instance can serve concurrent callers.
pub struct Translator<G> {
    generator: G,
    builder: RequestBuilder,
}

impl<G: ContentGenerator> Translator<G> {
    pub fn new(generator: G, builder: RequestBuilder) -> Self {
        Self { generator, builder }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Translate `request`. Errors are logged with their user-facing
    /// category and returned unchanged; nothing is retried here.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let assembled = self.builder.build(request)?;
        let mode = assembled.mode;
        debug!("Sending {:?} translation to {}", mode, request.target_language);

        let outcome = match self.generator.generate(assembled.into_request()).await {
            Ok(raw) => normalize(raw.as_deref()).map(|r| annotate(r, &request.target_language)),
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(result) => info!(
                "Translated {:?} input: {} → {}",
                mode, result.detected_language, request.target_language
            ),
            Err(e) => {
                let user_error = classify(e);
                warn!(
                    kind = user_error.kind.as_str(),
                    retryable = user_error.kind.is_retryable(),
                    "Translation failed: {}",
                    user_error.detail
                );
            }
        }

        outcome
    }
}

/// Fill language fields the model left out. Values it did return are kept.
fn annotate(mut result: TranslationResult, target_language: &str) -> TranslationResult {
    let target = target_language.trim();
    if result.target_language.is_none() {
        result.target_language = Some(target.to_string());
    }
    if result.target_language_name.is_none() {
        result.target_language_name = Some(languages::display_name(target).to_string());
    }
    if result.detected_language_name.is_none() {
        result.detected_language_name =
            languages::lookup(&result.detected_language).map(|l| l.name.to_string());
    }
    result
}
