//! Environment configuration for the completion service.
//!
//! The API credential is supplied through the process environment; there is
//! no configuration file. A missing credential is not an error at load time:
//! it degrades every completion call into the absorbed-failure path.

use crate::gemini::DEFAULT_GEMINI_MODEL;
use std::env;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the Gemini model name.
pub const MODEL_VAR: &str = "FOLIO_GEMINI_MODEL";

/// Gemini API configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, absent when the environment does not provide one
    pub api_key: Option<String>,
    /// Model name, defaulting to [`DEFAULT_GEMINI_MODEL`]
    pub model: String,
}

impl GeminiConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|name| env::var(name).ok());
        if config.api_key.is_none() {
            tracing::warn!(
                "{API_KEY_VAR} is not set; completion requests will fall back"
            );
        }
        config
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_VAR).filter(|key| !key.trim().is_empty());
        let model = lookup(MODEL_VAR)
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        Self { api_key, model }
    }
}
