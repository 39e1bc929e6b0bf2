//! The canonical response schema.
//!
//! One definition, shared by the request (as `responseSchema`, constraining
//! generation) and by [`crate::models::TranslationResult`], whose fields
//! mirror it one to one. Uses the OpenAPI subset accepted by Gemini.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde_json::{json, Value};
use std::sync::OnceLock;

/// Top-level fields the model must always produce.
pub const REQUIRED_FIELDS: &[&str] = &["detected_language", "translations"];

/// Fields of `translations` the model must always produce.
pub const REQUIRED_TRANSLATION_FIELDS: &[&str] = &["primary", "alternatives"];

static RESPONSE_SCHEMA: OnceLock<Value> = OnceLock::new();

/// Get or build the response schema
pub fn response_schema() -> &'static Value {
    RESPONSE_SCHEMA.get_or_init(build_schema)
}

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": string() })
}

fn object_array(properties: Value) -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "OBJECT", "properties": properties }
    })
}

fn build_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "detected_language": string(),
            "detected_language_name": string(),
            "target_language": string(),
            "target_language_name": string(),
            "confidence": string(),
            "tone_detected": string(),
            "text_type": string(),
            "translations": {
                "type": "OBJECT",
                "properties": {
                    "primary": string(),
                    "alternatives": string_array(),
                    "formal_version": string(),
                    "casual_version": string()
                },
                "required": REQUIRED_TRANSLATION_FIELDS
            },
            "synonyms": object_array(json!({
                "word": string(),
                "usage": string(),
                "context": string()
            })),
            "antonyms": object_array(json!({
                "word": string(),
                "usage": string()
            })),
            "improvements": object_array(json!({
                "suggestion": string(),
                "reason": string(),
                "better_than_original": string()
            })),
            "grammar_check": {
                "type": "OBJECT",
                "properties": {
                    "has_errors": { "type": "BOOLEAN" },
                    "errors": object_array(json!({
                        "type": string(),
                        "original": string(),
                        "corrected": string(),
                        "explanation": string()
                    }))
                }
            },
            "definitions": object_array(json!({
                "word": string(),
                "part_of_speech": string(),
                "meanings": string_array(),
                "etymology": string()
            })),
            "pronunciation": {
                "type": "OBJECT",
                "properties": {
                    "ipa": string(),
                    "phonetic": string(),
                    "audio_guide": string()
                }
            },
            "example_sentences": string_array(),
            "cultural_notes": string(),
            "related_words": string_array(),
            "difficulty_level": string(),
            "usage_frequency": string()
        },
        "required": REQUIRED_FIELDS
    })
}
