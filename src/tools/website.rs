//! Website analysis: value proposition, sales motion and pricing.

use super::ToolContext;
use crate::agent::AnalysisResult;
use crate::web::extract_text_from_html;

/// Fetch `url`, reduce it to visible text and ask for an analysis.
///
/// Every fetch-layer failure is returned as `AnalysisResult::Error`; the
/// generated text is wrapped as-is, even when it is a generation failure string.
pub async fn analyze_website(ctx: &ToolContext, url: &str) -> AnalysisResult {
    if url.is_empty() {
        return AnalysisResult::Error("No URL provided.".to_string());
    }

    let html = match ctx.fetcher.fetch(url).await {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!("Fetching {} failed: {}", url, e);
            return AnalysisResult::Error(e.to_string());
        }
    };

    let text = extract_text_from_html(&html);
    tracing::debug!("Extracted {} chars of text from {}", text.len(), url);

    let prompt = format!(
        "Analyze this website text and identify the following:\n\
         1) value proposition\n\
         2) sales motion (e.g., self-serve, enterprise, etc.)\n\
         3) pricing structure\n\n\
         Website text:\n{}\n\n\
         Return your findings in a JSON-like format.",
        text
    );

    AnalysisResult::Analysis(ctx.generate(&prompt).await)
}
