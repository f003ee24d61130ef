//! AI gateway for recipe generation.
//!
//! This module provides a trait-based abstraction over generative-model
//! providers plus the three domain-level operations the rest of the crate
//! uses: suggest recipe names from pantry contents, parse free text into a
//! structured recipe draft, and generate a recipe illustration.
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `GEMINI_API_KEY` (required): API key for the Gemini API
//! - `LARDER_AI_MODEL` (optional): Text model name
//! - `LARDER_AI_IMAGE_MODEL` (optional): Image model name
//! - `LARDER_AI_BASE_URL` (optional): API base URL

mod config;
mod fake;
mod gateway;
mod gemini;
pub mod prompts;
mod provider;

pub use config::{AiConfig, ConfigError};
pub use fake::FakeProvider;
pub use gateway::RecipeAi;
pub use gemini::GeminiProvider;
pub use provider::{AiError, CompletionRequest, GenerativeProvider, InlineImage};
