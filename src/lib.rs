//! # Prospect Agent
//!
//! Task-dispatch agent for sales prospect research.
//!
//! A request names one task; the agent routes it to one handler:
//! - `research_news`: search recent news and summarize the top hits
//! - `linkedin_note`: write a connection note for a contact
//! - `analyze_website`: value proposition, sales motion and pricing of a site
//! - `firmographic_info`: size and industry estimates for a company
//! - `answer_question`: answer a question about a company
//!
//! ## Architecture
//!
//! ```text
//!                ┌──────────────┐
//!   TaskRequest ─▶    Agent     │  exhaustive match on Task
//!                └──────┬───────┘
//!                       ▼
//!                ┌──────────────┐
//!                │    tools     │  five handlers
//!                └──┬────┬───┬──┘
//!                   ▼    ▼   ▼
//!            SerpAPI  fetch  Hugging Face
//! ```
//!
//! ## Modules
//! - `agent`: dispatcher and request/result types
//! - `tools`: the handlers
//! - `llm`: text-generation client
//! - `web`: search client, page fetcher, HTML text extraction
//! - `config`: environment configuration
//! - `evaluation`: output quality scoring

pub mod agent;
pub mod cli;
pub mod config;
pub mod evaluation;
pub mod llm;
pub mod tools;
pub mod util;
pub mod web;

pub use agent::{Agent, AgentError, Task, TaskOutput, TaskRequest};
pub use config::Config;

/// Install the stderr log subscriber used by the binaries.
///
/// Stdout is reserved for results. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prospect_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
