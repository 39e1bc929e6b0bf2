// gemtranslate - Structured multilingual translation over the Gemini API
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod languages;
pub mod models;
pub mod schema;
pub mod server;
pub mod translation;
pub mod utils;
pub mod vision;

pub use error::{classify, ErrorKind, Result, TranslateError, UserFacingError};
pub use models::TranslationResult;
pub use translation::{build_request, normalize, RequestBuilder, TranslationRequest, Translator};
pub use vision::ImagePayload;
