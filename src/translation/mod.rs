// Translation module - request assembly and response normalization
// Author: kelexine (https://github.com/kelexine)

pub mod prompts;
pub mod request;
pub mod response;
pub mod service;

pub use request::{build_request, AnalysisMode, AssembledRequest, RequestBuilder, TranslationRequest};
pub use response::{normalize, strip_code_fence};
pub use service::{ContentGenerator, Translator};
