//! Fake provider for testing.
//!
//! Returns deterministic responses based on prompt matching, allowing tests
//! to run without network access or API costs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use super::provider::{AiError, CompletionRequest, GenerativeProvider, InlineImage};

/// A fake generative provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, returns a default response or error.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
    /// Image returned by `generate_image`, if any
    image: Option<InlineImage>,
    /// If true, `generate_image` fails
    fail_images: bool,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("{}".to_string()),
            image: None,
            fail_images: false,
        }
    }
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
            image: None,
            fail_images: false,
        }
    }

    /// Create a FakeProvider that returns a specific response for prompts
    /// containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Set the image returned by `generate_image`.
    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Make `generate_image` fail.
    pub fn with_failing_images(mut self) -> Self {
        self.fail_images = true;
        self
    }

    /// Create a FakeProvider with standard responses for the recipe
    /// generation workflow.
    pub fn with_kitchen_responses() -> Self {
        let mut provider = Self::new();

        // Suggestion response: three names, list-marker formatted
        provider.add_response(
            "Suggest",
            "- Rustic Flour Galette\n- Tomato Egg Shakshuka\n- Simple Crepes",
        );

        // Structured parse response
        provider.add_response(
            "Create a recipe",
            r#"{
                "title": "Rustic Flour Galette",
                "description": "A simple galette from pantry staples.",
                "servings": 2,
                "ingredients": [
                    {"name": "Flour", "amount": 250, "unit": "g"},
                    {"name": "Eggs", "amount": 2, "unit": "units"}
                ],
                "steps": ["Mix the dough.", "Rest 30 minutes.", "Bake until golden."]
            }"#,
        );

        provider
    }
}

#[async_trait]
impl GenerativeProvider for FakeProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AiError> {
        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = request.prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        // Return default or error
        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(AiError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                &request.prompt[..request.prompt.len().min(100)]
            ))),
        }
    }

    async fn generate_image(&self, _prompt: &str) -> Result<Option<InlineImage>, AiError> {
        if self.fail_images {
            return Err(AiError::RequestFailed(
                "FakeProvider: injected image failure".to_string(),
            ));
        }
        Ok(self.image.clone())
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn matches_registered_substring() {
        let provider = FakeProvider::with_response("hello", "world");
        let result = provider
            .complete(CompletionRequest::text("Say hello to the user"))
            .await
            .unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn matching_is_case_insensitive() {
        let provider = FakeProvider::with_response("HELLO", "world");
        let result = provider
            .complete(CompletionRequest::text("hello there"))
            .await
            .unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn unmatched_prompt_without_default_errors() {
        let provider = FakeProvider::new();
        let result = provider.complete(CompletionRequest::text("random prompt")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unmatched_prompt_uses_default() {
        let provider = FakeProvider::new().with_default_response("default");
        let result = provider
            .complete(CompletionRequest::text("random prompt"))
            .await
            .unwrap();
        assert_eq!(result, "default");
    }

    #[tokio::test]
    async fn image_defaults_to_absent() {
        let provider = FakeProvider::new();
        assert!(provider.generate_image("anything").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn configured_image_is_returned() {
        let image = InlineImage::from_bytes("image/png", b"pixels");
        let provider = FakeProvider::new().with_image(image.clone());
        assert_eq!(provider.generate_image("dish").await.unwrap(), Some(image));
    }
}
