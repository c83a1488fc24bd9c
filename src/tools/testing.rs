//! Deterministic fakes for the leaf services.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::ToolContext;
use crate::llm::{GenerationOptions, LlmError, LlmErrorKind, TextGenerator};
use crate::web::{FetchError, PageFetcher, SearchError, SearchHit, SearchProvider};

/// Records every prompt; answers with a fixed reply or a fixed failure kind.
pub struct FakeGenerator {
    reply: Result<String, LlmErrorKind>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(kind: LlmErrorKind) -> Self {
        Self {
            reply: Err(kind),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str, _options: &GenerationOptions) -> Result<String, LlmError> {
        if prompt.is_empty() {
            return Err(LlmError::empty_prompt());
        }
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(kind) => Err(LlmError {
                kind: *kind,
                status_code: None,
                message: "fake failure".to_string(),
            }),
        }
    }
}

pub enum SearchReply {
    Hits(Vec<SearchHit>),
    Status(u16, String),
    Transport(String),
    Parse(String),
}

/// Records every query; answers with fixed hits or a fixed failure.
pub struct FakeSearch {
    reply: SearchReply,
    pub queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    pub fn new(reply: SearchReply) -> Self {
        Self {
            reply,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for FakeSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        match &self.reply {
            SearchReply::Hits(hits) => Ok(hits.clone()),
            SearchReply::Status(status, body) => Err(SearchError::Status {
                status: *status,
                body: body.clone(),
            }),
            SearchReply::Transport(msg) => Err(SearchError::Transport(msg.clone())),
            SearchReply::Parse(msg) => Err(SearchError::Parse(msg.clone())),
        }
    }
}

/// Serves one fixed page body, or fails every fetch as an invalid URL.
pub struct FakeFetcher {
    body: Option<String>,
    pub urls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn serving(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn broken() -> Self {
        Self {
            body: None,
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.urls.lock().unwrap().push(url.to_string());
        match &self.body {
            Some(body) => Ok(body.clone()),
            None => Err(FetchError::InvalidUrl {
                url: url.to_string(),
                source: url::ParseError::EmptyHost,
            }),
        }
    }
}

pub fn hit(n: usize) -> SearchHit {
    SearchHit {
        title: format!("Title {}", n),
        snippet: format!("Snippet {}", n),
        link: format!("https://news.example/{}", n),
    }
}

/// Fakes plus the context wired to them.
pub struct Harness {
    pub llm: Arc<FakeGenerator>,
    pub search: Arc<FakeSearch>,
    pub fetcher: Arc<FakeFetcher>,
}

impl Harness {
    pub fn new(llm: FakeGenerator, search: FakeSearch, fetcher: FakeFetcher) -> Self {
        Self {
            llm: Arc::new(llm),
            search: Arc::new(search),
            fetcher: Arc::new(fetcher),
        }
    }

    /// Generator replying `reply`, empty search, fetcher serving `<p>page</p>`.
    pub fn replying(reply: &str) -> Self {
        Self::new(
            FakeGenerator::replying(reply),
            FakeSearch::new(SearchReply::Hits(Vec::new())),
            FakeFetcher::serving("<p>page</p>"),
        )
    }

    pub fn context(&self) -> ToolContext {
        ToolContext {
            llm: self.llm.clone(),
            search: Some(self.search.clone()),
            fetcher: self.fetcher.clone(),
            generation: GenerationOptions::default(),
        }
    }

    /// Same fakes, but as if no search key were configured.
    pub fn context_without_search(&self) -> ToolContext {
        ToolContext {
            search: None,
            ..self.context()
        }
    }
}
