//! Structured logging and secret redaction utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and keeping API keys out of logs.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{Result, TranslateError};
use regex::Regex;
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Google API keys: "AIza" followed by 35 URL-safe characters
static API_KEY_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_api_key_regex() -> &'static Regex {
    API_KEY_REGEX.get_or_init(|| Regex::new(r"AIza[0-9A-Za-z_\-]{35}").expect("Invalid regex pattern"))
}

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`. Logs go to stderr so command output on
/// stdout stays machine-readable.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let initialized = match config.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };

    initialized.map_err(|e| TranslateError::Configuration(format!("Failed to initialize logging: {}", e)))
}

/// Sanitizes sensitive information from log messages.
///
/// Replaces every Google API key with a `\[REDACTED_API_KEY\]` placeholder
/// so upstream error bodies that echo the request can be logged safely.
pub fn sanitize(input: &str) -> String {
    get_api_key_regex()
        .replace_all(input, "[REDACTED_API_KEY]")
        .into_owned()
}
