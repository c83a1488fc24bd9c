//! Capability handlers ("tools") the dispatcher routes to.
//!
//! Each handler validates its own input, calls at most two leaf services in
//! sequence (search or fetch, then generate) and shapes the result. Missing or
//! empty input and provider trouble come back as ordinary values; the only
//! error a handler returns is a missing search credential.

mod firmographic;
mod news;
mod note;
mod question;
mod website;

#[cfg(test)]
pub(crate) mod testing;

pub use firmographic::get_firmographic_info;
pub use news::find_relevant_news;
pub use note::generate_linkedin_note;
pub use question::answer_company_question;
pub use website::analyze_website;

use std::sync::Arc;

use crate::config::ConfigError;
use crate::llm::{generate_or_message, GenerationOptions, TextGenerator};
use crate::web::{PageFetcher, SearchProvider};

/// Leaf services shared by every handler.
#[derive(Clone)]
pub struct ToolContext {
    pub llm: Arc<dyn TextGenerator>,
    /// `None` when no search key is configured.
    pub search: Option<Arc<dyn SearchProvider>>,
    pub fetcher: Arc<dyn PageFetcher>,
    pub generation: GenerationOptions,
}

impl ToolContext {
    /// Generate text with the context's options, failures rendered as text.
    pub async fn generate(&self, prompt: &str) -> String {
        generate_or_message(self.llm.as_ref(), prompt, &self.generation).await
    }

    /// The search provider, or the configuration error news research raises.
    pub fn require_search(&self) -> Result<&dyn SearchProvider, ConfigError> {
        self.search
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("SERPAPI_API_KEY".to_string()))
    }
}
