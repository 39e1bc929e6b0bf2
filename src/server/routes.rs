// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{health_handler, languages_handler, translate_handler};
use super::middleware::request_id_layers;
use crate::config::AppConfig;
use crate::gemini::GeminiClient;
use crate::translation::{ContentGenerator, Translator};
use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub struct AppState<G = GeminiClient> {
    pub config: Arc<AppConfig>,
    pub translator: Arc<Translator<G>>,
}

// Manual impl: the generator itself need not be Clone
impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            translator: Arc::clone(&self.translator),
        }
    }
}

pub fn create_router<G>(config: AppConfig, translator: Translator<G>) -> Router
where
    G: ContentGenerator + 'static,
{
    let state = AppState {
        config: Arc::new(config),
        translator: Arc::new(translator),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .route("/health", get(health_handler::<G>))
        .route("/v1/languages", get(languages_handler))
        .route("/v1/translate", post(translate_handler::<G>))
        // Allow large request bodies for base64-encoded images
        // 20MB image = ~27MB base64, so allow up to 32MB
        .layer(tower_http::limit::RequestBodyLimitLayer::new(32 * 1024 * 1024))
        .layer(axum::extract::DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
