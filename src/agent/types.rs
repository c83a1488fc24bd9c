//! Request, task and output types for the dispatcher.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;

/// Returned (as text) for any task tag outside the known set.
pub const UNRECOGNIZED_TASK: &str = "Sorry, I don't recognize that task.";

/// The closed set of task tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    ResearchNews,
    LinkedinNote,
    AnalyzeWebsite,
    FirmographicInfo,
    AnswerQuestion,
}

impl TaskKind {
    pub const ALL: [TaskKind; 5] = [
        TaskKind::ResearchNews,
        TaskKind::LinkedinNote,
        TaskKind::AnalyzeWebsite,
        TaskKind::FirmographicInfo,
        TaskKind::AnswerQuestion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::ResearchNews => "research_news",
            TaskKind::LinkedinNote => "linkedin_note",
            TaskKind::AnalyzeWebsite => "analyze_website",
            TaskKind::FirmographicInfo => "firmographic_info",
            TaskKind::AnswerQuestion => "answer_question",
        }
    }

    /// Exact, case-sensitive tag lookup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact details for a connection note, kept as the keys the caller sent.
///
/// A `null` value is still a present key, so it takes part in the completeness
/// check. Keys other than `name`, `role` and `company` are kept for the same reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactInfo {
    fields: BTreeMap<String, Option<String>>,
}

impl ContactInfo {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self::default()
            .with_field("name", name)
            .with_field("role", role)
            .with_field("company", company)
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), Some(value.into()));
        self
    }

    /// Add a key whose value is `null`.
    pub fn with_null(mut self, key: impl Into<String>) -> Self {
        self.fields.insert(key.into(), None);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    pub fn role(&self) -> Option<&str> {
        self.get("role")
    }

    pub fn company(&self) -> Option<&str> {
        self.get("company")
    }

    /// Value of a key; absent and `null` both read as `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|value| value.as_deref())
    }

    /// True when no key is present at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Complete means: at least one key present, and every present value is a
    /// non-empty string.
    ///
    /// Absent keys are not examined, so `{name, company}` with both filled counts
    /// as complete while `{}`, `{role: ""}` and `{name: null}` do not.
    pub fn is_complete(&self) -> bool {
        !self.is_empty()
            && self
                .fields
                .values()
                .all(|value| value.as_deref().is_some_and(|v| !v.is_empty()))
    }
}

/// Loose dispatch input: a task tag plus every task-specific field.
///
/// Fields a task does not use are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub task: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
}

impl TaskRequest {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            ..Self::default()
        }
    }

    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn with_contact_info(mut self, contact_info: ContactInfo) -> Self {
        self.contact_info = contact_info;
        self
    }

    /// Narrow to the typed task, or `None` for an unknown tag.
    pub fn into_task(self) -> Option<Task> {
        let kind = TaskKind::from_tag(&self.task)?;
        Some(match kind {
            TaskKind::ResearchNews => Task::ResearchNews {
                company_name: self.company_name,
            },
            TaskKind::LinkedinNote => Task::LinkedinNote {
                contact_info: self.contact_info,
            },
            TaskKind::AnalyzeWebsite => Task::AnalyzeWebsite { url: self.url },
            TaskKind::FirmographicInfo => Task::FirmographicInfo {
                company_name: self.company_name,
            },
            TaskKind::AnswerQuestion => Task::AnswerQuestion {
                question: self.question,
                company_name: self.company_name,
            },
        })
    }
}

/// A validated task, carrying only the fields its handler reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    ResearchNews { company_name: String },
    LinkedinNote { contact_info: ContactInfo },
    AnalyzeWebsite { url: String },
    FirmographicInfo { company_name: String },
    AnswerQuestion { question: String, company_name: String },
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::ResearchNews { .. } => TaskKind::ResearchNews,
            Task::LinkedinNote { .. } => TaskKind::LinkedinNote,
            Task::AnalyzeWebsite { .. } => TaskKind::AnalyzeWebsite,
            Task::FirmographicInfo { .. } => TaskKind::FirmographicInfo,
            Task::AnswerQuestion { .. } => TaskKind::AnswerQuestion,
        }
    }
}

/// Website analysis: `{"analysis": ...}` or `{"error": ...}`, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisResult {
    Analysis(String),
    Error(String),
}

/// Estimated company profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmographicProfile {
    pub company_name: String,
    pub size: String,
    pub industry: String,
}

/// Firmographic lookup: a profile or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FirmographicResult {
    Profile(FirmographicProfile),
    Error { error: String },
}

/// Result of one dispatch. Text tasks yield `Text`, mapping tasks their mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskOutput {
    Text(String),
    Analysis(AnalysisResult),
    Firmographic(FirmographicResult),
}

impl TaskOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TaskOutput::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The `error` value of a mapping result, if this is one.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            TaskOutput::Analysis(AnalysisResult::Error(error))
            | TaskOutput::Firmographic(FirmographicResult::Error { error }) => Some(error),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaskOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskOutput::Text(text) => f.write_str(text),
            mapping => {
                let rendered = serde_json::to_string(mapping).map_err(|_| std::fmt::Error)?;
                f.write_str(&rendered)
            }
        }
    }
}

/// Hard failures. Everything else is a `TaskOutput`.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    ClientInit(#[from] reqwest::Error),
}
