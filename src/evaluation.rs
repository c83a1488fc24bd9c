//! Offline quality scores for agent output.
//!
//! The scores are crude keyword heuristics, good enough to spot a provider that
//! ignores its prompt.

use crate::agent::{Agent, AgentError, AnalysisResult, ContactInfo, TaskOutput, TaskRequest};

/// Keys a useful website analysis is expected to mention.
pub const ANALYSIS_KEYS: [&str; 3] = ["value_proposition", "sales_motion", "pricing"];

/// Company-name mentions per word of output (case-insensitive). `0.0` for empty output.
pub fn news_relevance(output: &str, company_name: &str) -> f64 {
    let words = output.split_whitespace().count();
    if words == 0 || company_name.is_empty() {
        return 0.0;
    }
    let mentions = output
        .to_lowercase()
        .matches(&company_name.to_lowercase())
        .count();
    mentions as f64 / words as f64
}

/// Fraction of the contact's name, role and company that appear in the note.
pub fn note_relevance(output: &str, contact: &ContactInfo) -> f64 {
    let mentions = [contact.name(), contact.role(), contact.company()];
    let found = mentions
        .iter()
        .filter(|m| m.is_some_and(|m| output.contains(m)))
        .count();
    found as f64 / mentions.len() as f64
}

/// Fraction of `ANALYSIS_KEYS` found in the analysis text. Errors score `0.0`.
pub fn analysis_precision(result: &AnalysisResult) -> f64 {
    match result {
        AnalysisResult::Analysis(text) => {
            let found = ANALYSIS_KEYS.iter().filter(|k| text.contains(*k)).count();
            found as f64 / ANALYSIS_KEYS.len() as f64
        }
        AnalysisResult::Error(_) => 0.0,
    }
}

/// Scores from one evaluation run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    pub company_name: String,
    pub news_relevance: f64,
    pub note_relevance: f64,
    pub analysis_precision: f64,
}

impl std::fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "News relevance score for {}: {:.2}",
            self.company_name, self.news_relevance
        )?;
        writeln!(f, "LinkedIn note relevance score: {:.2}", self.note_relevance)?;
        write!(f, "Website analysis precision score: {:.2}", self.analysis_precision)
    }
}

/// Run the three scorers against a live (or fake) agent.
pub async fn evaluate(agent: &Agent) -> Result<EvaluationReport, AgentError> {
    let company_name = "Microsoft";
    let news = agent
        .run(TaskRequest::new("research_news").with_company_name(company_name))
        .await?;

    let contact = ContactInfo::new("Jane Doe", "CTO", "ExampleCorp");
    let note = agent
        .run(TaskRequest::new("linkedin_note").with_contact_info(contact.clone()))
        .await?;

    let analysis = agent
        .run(TaskRequest::new("analyze_website").with_url("https://www.example.com"))
        .await?;
    let analysis = match analysis {
        TaskOutput::Analysis(result) => result,
        other => AnalysisResult::Error(format!("unexpected output: {}", other)),
    };

    Ok(EvaluationReport {
        company_name: company_name.to_string(),
        news_relevance: news_relevance(&news.to_string(), company_name),
        note_relevance: note_relevance(&note.to_string(), &contact),
        analysis_precision: analysis_precision(&analysis),
    })
}
