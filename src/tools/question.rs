//! Question answering about a company.

use super::ToolContext;

pub const NO_QUESTION: &str = "Sorry, no question provided.";

/// Answer `question` with a one-line company context in front of it.
pub async fn answer_company_question(
    ctx: &ToolContext,
    question: &str,
    company_name: &str,
) -> String {
    if question.is_empty() {
        return NO_QUESTION.to_string();
    }

    // TODO: replace the canned context with firmographic data once that lookup is live
    let context = format!("{} is an industry leader in software services.", company_name);
    let prompt = format!("{}\n\nQ: {}\nA: ", context, question);

    ctx.generate(&prompt).await
}
