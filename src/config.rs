//! Configuration management for the prospect agent.
//!
//! Configuration can be set via environment variables (a `.env` file is loaded by
//! the binaries before this runs):
//! - `HUGGINGFACE_API_TOKEN` - Optional. Bearer token for the text-generation API.
//! - `HUGGINGFACE_API_URL` - Optional. Model endpoint. Defaults to `google/flan-t5-small`.
//! - `SERPAPI_API_KEY` - Optional at startup, required by the `research_news` task.
//!   An empty value counts as unset.
//! - `SERPAPI_BASE_URL` - Optional. Defaults to `https://serpapi.com`.
//! - `SEARCH_LOCATION`, `SEARCH_HL`, `SEARCH_GL` - Optional search locale parameters.
//! - `FETCH_TIMEOUT_SECS` - Optional. Page fetch timeout. Defaults to `10`.
//! - `GENERATION_MAX_LENGTH` - Optional. Defaults to `300`.

use std::time::Duration;
use thiserror::Error;

use crate::util::non_empty;

pub const DEFAULT_HUGGINGFACE_API_URL: &str =
    "https://api-inference.huggingface.co/models/google/flan-t5-small";
pub const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Locale parameters forwarded with every search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLocale {
    pub location: String,
    pub hl: String,
    pub gl: String,
}

impl Default for SearchLocale {
    fn default() -> Self {
        Self {
            location: "United States".to_string(),
            hl: "en".to_string(),
            gl: "us".to_string(),
        }
    }
}

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hugging Face Inference API token (may be empty; the API then answers 401/403)
    pub huggingface_api_token: String,

    /// Text-generation model endpoint
    pub huggingface_api_url: String,

    /// SerpAPI key. `None` is only fatal for news research.
    pub serpapi_api_key: Option<String>,

    /// SerpAPI base URL (overridable for tests and proxies)
    pub serpapi_base_url: String,

    pub search_locale: SearchLocale,

    /// Connect/read timeout for website fetches
    pub fetch_timeout: Duration,

    /// Default `max_length` sent with generation requests
    pub generation_max_length: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            huggingface_api_token: String::new(),
            huggingface_api_url: DEFAULT_HUGGINGFACE_API_URL.to_string(),
            serpapi_api_key: None,
            serpapi_base_url: DEFAULT_SERPAPI_BASE_URL.to_string(),
            search_locale: SearchLocale::default(),
            fetch_timeout: Duration::from_secs(10),
            generation_max_length: 300,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| non_empty(lookup(name));

        let fetch_timeout = match var("FETCH_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_number("FETCH_TIMEOUT_SECS", &raw)?),
            None => defaults.fetch_timeout,
        };

        let generation_max_length = match var("GENERATION_MAX_LENGTH") {
            Some(raw) => parse_number("GENERATION_MAX_LENGTH", &raw)?,
            None => defaults.generation_max_length,
        };

        let search_locale = SearchLocale {
            location: var("SEARCH_LOCATION").unwrap_or(defaults.search_locale.location),
            hl: var("SEARCH_HL").unwrap_or(defaults.search_locale.hl),
            gl: var("SEARCH_GL").unwrap_or(defaults.search_locale.gl),
        };

        Ok(Self {
            huggingface_api_token: var("HUGGINGFACE_API_TOKEN").unwrap_or_default(),
            huggingface_api_url: var("HUGGINGFACE_API_URL")
                .unwrap_or(defaults.huggingface_api_url),
            // Only an empty key counts as unset; the key is passed through untrimmed.
            serpapi_api_key: lookup("SERPAPI_API_KEY").filter(|key| !key.is_empty()),
            serpapi_base_url: var("SERPAPI_BASE_URL").unwrap_or(defaults.serpapi_base_url),
            search_locale,
            fetch_timeout,
            generation_max_length,
        })
    }
}

fn parse_number<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e)))
}
