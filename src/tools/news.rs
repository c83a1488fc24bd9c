//! News research: search for recent coverage, summarize the top hits.

use super::ToolContext;
use crate::agent::AgentError;
use crate::web::SearchHit;

/// Hits passed on to the summarizer.
const MAX_HITS: usize = 3;

/// Search for recent news about a company and summarize it.
///
/// Empty `company_name` short-circuits to `""` without touching any provider.
/// A missing search key is the one hard failure; a failed search or empty result
/// set comes back as text.
pub async fn find_relevant_news(
    ctx: &ToolContext,
    company_name: &str,
) -> Result<String, AgentError> {
    if company_name.is_empty() {
        return Ok(String::new());
    }

    let search = ctx.require_search()?;
    let query = format!("{} news", company_name);

    let hits = match search.search(&query).await {
        Ok(hits) => hits,
        Err(e) => {
            tracing::warn!("News search for {} failed: {}", company_name, e);
            return Ok(e.to_string());
        }
    };

    if hits.is_empty() {
        return Ok(format!("No news results found for {}.", company_name));
    }

    let prompt = format!(
        "Summarize the following recent news about {} in 2-3 sentences:\n\n{}",
        company_name,
        format_hits(&hits)
    );

    Ok(ctx.generate(&prompt).await)
}

fn format_hits(hits: &[SearchHit]) -> String {
    hits.iter()
        .take(MAX_HITS)
        .enumerate()
        .map(|(idx, hit)| {
            format!(
                "{}. Title: {}\n   Snippet: {}\n   Link: {}\n",
                idx + 1,
                hit.title,
                hit.snippet,
                hit.link
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
