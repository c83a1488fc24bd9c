//! Hugging Face Inference API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::LlmError;
use super::{GenerationOptions, TextGenerator};
use crate::util::preview;

/// Hugging Face Inference API client for text-to-text models.
pub struct HuggingFaceClient {
    client: Client,
    api_url: String,
    api_token: String,
}

impl HuggingFaceClient {
    /// Create a new client for the model at `api_url`.
    pub fn new(api_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            api_token: api_token.into(),
        }
    }

    /// Execute a single request.
    async fn execute_request(&self, request: &InferenceRequest<'_>) -> Result<String, LlmError> {
        let response = match self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(request)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                if e.is_timeout() {
                    return Err(LlmError::network_error(format!("Request timeout: {}", e)));
                } else if e.is_connect() {
                    return Err(LlmError::network_error(format!("Connection failed: {}", e)));
                } else {
                    return Err(LlmError::network_error(format!("Request failed: {}", e)));
                }
            }
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network_error(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            return Err(LlmError::from_status(status.as_u16(), body));
        }

        tracing::debug!("Inference response (first 500 bytes): {}", preview(&body, 500));

        let parsed: Vec<GeneratedText> = serde_json::from_str(&body).map_err(|e| {
            LlmError::parse_error(format!("Failed to parse response: {}, body: {}", e, body))
        })?;

        let first = parsed
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::parse_error("No generations in response".to_string()))?;

        Ok(first.generated_text.trim().to_string())
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, LlmError> {
        if prompt.is_empty() {
            return Err(LlmError::empty_prompt());
        }

        let request = InferenceRequest {
            inputs: prompt,
            parameters: options,
        };

        tracing::debug!(
            "Sending request to Hugging Face: url={}, prompt_len={}, max_length={}",
            self.api_url,
            prompt.len(),
            options.max_length
        );

        self.execute_request(&request).await
    }
}

/// Inference API request format.
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationOptions,
}

/// One element of the Inference API response array.
#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}
