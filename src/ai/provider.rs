use async_trait::async_trait;
use base64::Engine;
use std::fmt;
use thiserror::Error;

/// Error type for AI operations.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// A single completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    /// If true, ask the provider to constrain output to JSON.
    pub json_response: bool,
}

impl CompletionRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            json_response: false,
        }
    }

    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            json_response: true,
        }
    }
}

/// An inline image payload returned by an image model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    /// MIME type, e.g. "image/png".
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

impl InlineImage {
    /// Build an inline image from raw bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Render as a directly embeddable data URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Trait for generative-model providers.
///
/// Implementations should be stateless and thread-safe. The provider makes
/// the API calls and returns the model's raw output; domain-level shaping
/// lives in [`super::RecipeAi`].
#[async_trait]
pub trait GenerativeProvider: Send + Sync + fmt::Debug {
    /// Send a prompt and get the model's text response.
    async fn complete(&self, request: CompletionRequest) -> Result<String, AiError>;

    /// Request an image for a prompt. Absence of an image payload in the
    /// response is not an error.
    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>, AiError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the text model name.
    fn model_name(&self) -> &str;
}
