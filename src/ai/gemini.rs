//! Gemini (Google) generative-model provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::config::AiConfig;
use super::provider::{AiError, CompletionRequest, GenerativeProvider, InlineImage};

/// Gemini API provider.
#[derive(Debug)]
pub struct GeminiProvider {
    api_key: String,
    model: String,
    image_model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new GeminiProvider from the given configuration.
    pub fn new(config: AiConfig) -> Self {
        Self {
            api_key: config.api_key,
            model: config.model,
            image_model: config.image_model,
            base_url: config.base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn generate_content(
        &self,
        model: &str,
        request: GeminiRequest,
    ) -> Result<GeminiResponse, AiError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        if status != 200 {
            // Try to parse error response
            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&body) {
                return Err(AiError::ApiError {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(AiError::ApiError {
                status,
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| AiError::ParseError(e.to_string()))
    }
}

/// Gemini API request format.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GeminiRequest {
    fn from_prompt(prompt: &str, json_response: bool) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                    inline_data: None,
                }],
            }],
            generation_config: json_response.then(|| GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiInlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

/// Gemini API response format.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

impl GeminiResponse {
    fn into_parts(self) -> Vec<GeminiPart> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

/// Error response from the Gemini API.
#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiApiError,
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AiError> {
        let api_request = GeminiRequest::from_prompt(&request.prompt, request.json_response);
        let response = self.generate_content(&self.model, api_request).await?;

        // Extract text from the first text part
        let text = response
            .into_parts()
            .into_iter()
            .find_map(|p| p.text)
            .ok_or_else(|| AiError::ParseError("No text content in response".to_string()))?;

        Ok(text)
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>, AiError> {
        let api_request = GeminiRequest::from_prompt(prompt, false);
        let response = self.generate_content(&self.image_model, api_request).await?;

        let image = response.into_parts().into_iter().find_map(|p| {
            p.inline_data.map(|d| InlineImage {
                mime_type: d.mime_type,
                data: d.data,
            })
        });

        Ok(image)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_mode_sets_response_mime_type() {
        let request = GeminiRequest::from_prompt("hello", true);
        let body = serde_json::to_string(&request).unwrap();
        assert!(body.contains(r#""responseMimeType":"application/json""#));
    }

    #[test]
    fn text_mode_omits_generation_config() {
        let request = GeminiRequest::from_prompt("hello", false);
        let body = serde_json::to_string(&request).unwrap();
        assert!(!body.contains("generationConfig"));
    }

    #[test]
    fn response_parts_extract_inline_image() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "here you go"},
                        {"inlineData": {"mimeType": "image/png", "data": "QUJD"}}
                    ]
                }
            }]
        }"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        let image = response
            .into_parts()
            .into_iter()
            .find_map(|p| p.inline_data)
            .unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "QUJD");
    }

    #[test]
    fn empty_candidates_yield_no_parts() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_parts().is_empty());
    }
}
