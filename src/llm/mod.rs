//! Text-generation client module.
//!
//! This module provides a trait-based abstraction over text-generation providers,
//! with the Hugging Face Inference API as the implementation used in production.
//! Handlers only see [`TextGenerator`], so tests substitute deterministic fakes.

mod error;
mod huggingface;

pub use error::{classify_http_status, LlmError, LlmErrorKind};
pub use huggingface::HuggingFaceClient;

use async_trait::async_trait;
use serde::Serialize;

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationOptions {
    pub max_length: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub do_sample: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_length: 300,
            temperature: 0.7,
            top_p: 0.95,
            do_sample: true,
        }
    }
}

impl GenerationOptions {
    pub fn with_max_length(max_length: u32) -> Self {
        Self {
            max_length,
            ..Self::default()
        }
    }
}

/// Trait for text-generation clients.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`.
    ///
    /// Implementations must return `LlmErrorKind::EmptyPrompt` for an empty
    /// prompt without contacting the provider.
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, LlmError>;
}

/// Generate text, rendering any failure into its caller-visible string.
///
/// The failure detail goes to the log only.
pub async fn generate_or_message(
    generator: &dyn TextGenerator,
    prompt: &str,
    options: &GenerationOptions,
) -> String {
    match generator.generate(prompt, options).await {
        Ok(text) => text,
        Err(error) => {
            tracing::error!("Error calling text-generation API: {}", error);
            error.user_message().to_string()
        }
    }
}
