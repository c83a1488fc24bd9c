//! Dispatcher: routes one request to exactly one handler.
//!
//! # Flow
//! 1. `run` narrows the loose `TaskRequest` to a typed `Task` by its tag;
//!    an unknown tag yields the fixed "unrecognized task" text.
//! 2. `execute` matches the task exhaustively and calls its handler.
//!
//! The agent holds only immutable, shared clients, so one instance can serve
//! any number of concurrent dispatches.

mod types;

pub use types::{
    AgentError, AnalysisResult, ContactInfo, FirmographicProfile, FirmographicResult, Task,
    TaskKind, TaskOutput, TaskRequest, UNRECOGNIZED_TASK,
};

use std::sync::Arc;

use uuid::Uuid;

use crate::config::Config;
use crate::llm::{GenerationOptions, HuggingFaceClient, TextGenerator};
use crate::tools::{self, ToolContext};
use crate::web::{HttpPageFetcher, PageFetcher, SearchProvider, SerpApiClient};

/// Task-dispatch agent.
#[derive(Clone)]
pub struct Agent {
    ctx: ToolContext,
}

impl Agent {
    /// Create an agent over explicit leaf services.
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    /// Wire the production clients from configuration.
    ///
    /// A missing search key is not an error here; it only fails `research_news`.
    pub fn from_config(config: &Config) -> Result<Self, AgentError> {
        let llm: Arc<dyn TextGenerator> = Arc::new(HuggingFaceClient::new(
            config.huggingface_api_url.clone(),
            config.huggingface_api_token.clone(),
        ));

        let search = config.serpapi_api_key.as_ref().map(|key| {
            Arc::new(SerpApiClient::new(
                config.serpapi_base_url.clone(),
                key.clone(),
                config.search_locale.clone(),
            )) as Arc<dyn SearchProvider>
        });
        if search.is_none() {
            tracing::debug!("SERPAPI_API_KEY not set; research_news will fail");
        }

        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpPageFetcher::new(config.fetch_timeout)?);

        Ok(Self::new(ToolContext {
            llm,
            search,
            fetcher,
            generation: GenerationOptions::with_max_length(config.generation_max_length),
        }))
    }

    /// Dispatch a request by its task tag.
    ///
    /// # Errors
    /// Only a missing search credential for `research_news`. Every other
    /// failure is reported inside the returned `TaskOutput`.
    pub async fn run(&self, request: TaskRequest) -> Result<TaskOutput, AgentError> {
        let run_id = Uuid::new_v4();
        let tag = request.task.clone();

        match request.into_task() {
            Some(task) => {
                tracing::info!(%run_id, task = %tag, "Dispatching task");
                let output = self.execute(task).await;
                if let Err(ref e) = output {
                    tracing::error!(%run_id, task = %tag, "Task failed: {}", e);
                }
                output
            }
            None => {
                tracing::warn!(%run_id, task = %tag, "Unrecognized task");
                Ok(TaskOutput::Text(UNRECOGNIZED_TASK.to_string()))
            }
        }
    }

    /// Run an already-typed task.
    pub async fn execute(&self, task: Task) -> Result<TaskOutput, AgentError> {
        let ctx = &self.ctx;
        let output = match task {
            Task::ResearchNews { company_name } => {
                TaskOutput::Text(tools::find_relevant_news(ctx, &company_name).await?)
            }
            Task::LinkedinNote { contact_info } => {
                TaskOutput::Text(tools::generate_linkedin_note(ctx, &contact_info).await)
            }
            Task::AnalyzeWebsite { url } => {
                TaskOutput::Analysis(tools::analyze_website(ctx, &url).await)
            }
            Task::FirmographicInfo { company_name } => {
                TaskOutput::Firmographic(tools::get_firmographic_info(&company_name))
            }
            Task::AnswerQuestion {
                question,
                company_name,
            } => TaskOutput::Text(
                tools::answer_company_question(ctx, &question, &company_name).await,
            ),
        };
        Ok(output)
    }
}
