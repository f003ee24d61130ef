//! AI configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default text model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default image model.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// AI provider configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key for the Gemini API.
    pub api_key: String,
    /// Text model name.
    pub model: String,
    /// Image model name.
    pub image_model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `GEMINI_API_KEY`: API key for the Gemini API
    ///
    /// Optional:
    /// - `LARDER_AI_MODEL`: Text model (default: "gemini-3-flash-preview")
    /// - `LARDER_AI_IMAGE_MODEL`: Image model (default: "gemini-2.5-flash-image")
    /// - `LARDER_AI_BASE_URL`: API base URL
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;

        let model = env::var("LARDER_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let image_model =
            env::var("LARDER_AI_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());

        let base_url =
            env::var("LARDER_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            image_model,
            base_url,
        })
    }
}
