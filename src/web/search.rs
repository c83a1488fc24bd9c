//! SerpAPI search client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::config::SearchLocale;

/// A single organic search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub snippet: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
}

/// Read `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("SerpAPI search failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("SerpAPI search failed: {0}")]
    Transport(String),

    #[error("SerpAPI returned an unreadable response: {0}")]
    Parse(String),
}

/// Trait for search providers.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run `query` and return hits in provider-ranked order.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}

/// SerpAPI (Google engine) client.
pub struct SerpApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    locale: SearchLocale,
}

impl SerpApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, locale: SearchLocale) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            locale,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }
}

/// SerpAPI response; only the organic results are read.
#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    organic_results: Vec<SearchHit>,
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        tracing::debug!("SerpAPI query: {}", query);

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("location", self.locale.location.as_str()),
                ("hl", self.locale.hl.as_str()),
                ("gl", self.locale.gl.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if status.as_u16() != 200 {
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SerpApiResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))?;

        tracing::debug!("SerpAPI returned {} organic results", parsed.organic_results.len());
        Ok(parsed.organic_results)
    }
}
