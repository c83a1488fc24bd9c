//! Page fetching and visible-text extraction.

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{status} error for url: {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Trait for page fetchers.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return the response body as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Plain HTTP GET fetcher with a fixed connect/read timeout.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; ProspectAgent/0.1)")
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self.client.get(parsed).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }
}

fn invisible_blocks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
            .expect("static regex")
    })
}

/// A `<` only opens a tag when a name, `/`, `!` or `?` follows it.
fn tags() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[A-Za-z/!?][^>]*>").expect("static regex"))
}

/// Extract readable text from HTML.
///
/// Script, style and comment blocks are dropped; every remaining text node is
/// trimmed and emitted on its own line, empty nodes are skipped.
pub fn extract_text_from_html(html: &str) -> String {
    let visible = invisible_blocks().replace_all(html, "");

    tags()
        .split(&visible)
        .map(|node| html_decode(node.trim()))
        .map(|node| node.trim().to_string())
        .filter(|node| !node.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Basic HTML entity decoding.
fn html_decode(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn extracts_text_nodes_one_per_line() {
        let html = r#"<html><head><title>Acme</title>
            <style>body { color: red; }</style>
            <script type="text/javascript">var x = "<b>hidden</b>";</script>
            </head><body>
            <!-- nav -->
            <h1> Ship faster </h1>
            <p>Plans from $10 &amp; up</p>
            <p>   </p>
            <a href="/pricing">Pricing</a>
            </body></html>"#;

        assert_eq!(
            extract_text_from_html(html),
            "Acme\nShip faster\nPlans from $10 & up\nPricing"
        );
    }

    #[test]
    fn literal_angle_brackets_stay_in_text() {
        assert_eq!(
            extract_text_from_html("<p>if a < b then</p><p>c > d ok</p>"),
            "if a < b then\nc > d ok"
        );
        assert_eq!(extract_text_from_html("<li>x <3 y</li>"), "x <3 y");
    }

    #[test]
    fn plain_text_passes_through_trimmed() {
        assert_eq!(extract_text_from_html("  just text \n"), "just text");
        assert_eq!(extract_text_from_html(""), "");
    }

    #[test]
    fn decodes_entities_once() {
        assert_eq!(html_decode("&amp;lt;"), "&lt;");
        assert_eq!(html_decode("Tom&#39;s &quot;deal&quot;"), "Tom's \"deal\"");
    }

    #[tokio::test]
    async fn fetch_returns_body_on_success() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).body("<p>hello</p>");
            })
            .await;

        let fetcher = HttpPageFetcher::new(Duration::from_secs(5)).unwrap();
        let body = fetcher.fetch(&server.url("/")).await.unwrap();
        assert_eq!(body, "<p>hello</p>");
    }

    #[tokio::test]
    async fn fetch_fails_on_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/missing");
                then.status(404);
            })
            .await;

        let fetcher = HttpPageFetcher::new(Duration::from_secs(5)).unwrap();
        let err = fetcher.fetch(&server.url("/missing")).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status, .. } if status.as_u16() == 404));
        assert!(err.to_string().starts_with("404 Not Found error for url:"));
    }

    #[tokio::test]
    async fn fetch_rejects_malformed_urls() {
        let fetcher = HttpPageFetcher::new(Duration::from_secs(5)).unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }
}
