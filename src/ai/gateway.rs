//! Domain-level operations over a generative provider.

use super::config::{AiConfig, ConfigError};
use super::gemini::GeminiProvider;
use super::prompts;
use super::provider::{AiError, CompletionRequest, GenerativeProvider};
use crate::types::RecipeDraft;

/// The AI gateway: three narrow operations against a generative model,
/// isolating the rest of the crate from the provider's response format.
pub struct RecipeAi {
    provider: Box<dyn GenerativeProvider>,
}

impl RecipeAi {
    pub fn new(provider: Box<dyn GenerativeProvider>) -> Self {
        Self { provider }
    }

    /// Build a gateway backed by Gemini, configured from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = AiConfig::from_env()?;
        Ok(Self::new(Box::new(GeminiProvider::new(config))))
    }

    /// Suggest recipe names for the given pantry ingredient names.
    ///
    /// The response is split into trimmed non-empty lines. The result is
    /// never null but may be empty.
    pub async fn suggest_recipe_names(
        &self,
        pantry_names: &[String],
    ) -> Result<Vec<String>, AiError> {
        let prompt = prompts::render_suggest_prompt(pantry_names);
        let response = self
            .provider
            .complete(CompletionRequest::text(prompt))
            .await?;

        Ok(response
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Parse a free-text instruction into a structured recipe draft.
    ///
    /// A response that fails to decode is absorbed: the failure is logged
    /// and an empty draft returned. Only transport and provider errors
    /// propagate.
    pub async fn parse_recipe_text(&self, instruction: &str) -> Result<RecipeDraft, AiError> {
        let prompt = prompts::render_parse_prompt(instruction);
        let response = self
            .provider
            .complete(CompletionRequest::json(prompt))
            .await?;

        match serde_json::from_str(&response) {
            Ok(draft) => Ok(draft),
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    error = %e,
                    "Recipe parse response did not conform to schema, returning empty draft"
                );
                Ok(RecipeDraft::default())
            }
        }
    }

    /// Generate an illustration for a recipe title.
    ///
    /// Returns a data URI for the first inline image payload, or `None` if
    /// the response carries no image.
    pub async fn generate_image(&self, title: &str) -> Result<Option<String>, AiError> {
        let prompt = prompts::render_image_prompt(title);
        let image = self.provider.generate_image(&prompt).await?;
        Ok(image.map(|i| i.to_data_uri()))
    }
}
