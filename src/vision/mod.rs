//! Image handling for OCR and visual-description requests.
//!
//! Turns user-supplied images (raw bytes or data URIs) into Gemini
//! `InlineData` parts, including MIME type detection and size validation.
//!
//! # Submodules
//!
//! - `models`: Image formats and validation constraints.
//! - `payload`: The `ImagePayload` input type and data-URI parsing.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod models;
pub mod payload;

pub use payload::{DataUri, ImagePayload};
