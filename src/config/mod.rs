// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{Result, TranslateError};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI arguments (highest, applied by the caller)
    /// 2. Environment variables
    /// 3. Config file
    /// 4. Defaults (lowest)
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(&Self::default_config_path()))
    }

    /// Same as [`AppConfig::load`] but reads the config file from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::from(path.to_path_buf()).required(false))
            // Override with environment variables, e.g. GEMTRANSLATE_GEMINI__MODEL
            .add_source(
                Environment::with_prefix("GEMTRANSLATE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| TranslateError::Configuration(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| TranslateError::Configuration(e.to_string()))
    }

    /// Apply an API key given on the command line or via `GEMINI_API_KEY`.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.gemini.api_key = Some(ApiKey::new(key));
        }
        self
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gemtranslate")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
