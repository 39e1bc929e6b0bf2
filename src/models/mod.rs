//! Data models for the Gemini API and the normalized translation result.
//!
//! This module contains the type definitions used by:
//! - The upstream Google Gemini `generateContent` API (`gemini`)
//! - The structured translation output handed to callers (`translation`)

// Author: kelexine (https://github.com/kelexine)

pub mod gemini;
pub mod translation;

pub use gemini::{Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part};
pub use translation::{
    Antonym, Definition, GrammarCheck, GrammarError, Improvement, Pronunciation, Synonym,
    TranslationResult, Translations,
};
