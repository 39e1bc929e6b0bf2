//! Axum-based HTTP service for gemtranslate.
//!
//! Exposes the translation pipeline to clients that cannot embed the
//! library directly.
//!
//! # Components
//!
//! - `handlers`: `/v1/translate`, `/v1/languages` and `/health`.
//! - `middleware`: Request ID tracking.
//! - `routes`: The router and shared application state.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{ImageBody, TranslateBody};
pub use routes::{create_router, AppState};
