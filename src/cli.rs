//! Command-line surface for the agent binary.

use clap::Parser;

use crate::agent::{ContactInfo, TaskRequest};

/// Prospect research agent
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task to perform (research_news, linkedin_note, analyze_website, firmographic_info, answer_question)
    #[arg(long)]
    pub task: String,

    #[arg(long = "company_name", alias = "company-name", default_value = "")]
    pub company_name: String,

    #[arg(long, default_value = "")]
    pub url: String,

    #[arg(long, default_value = "")]
    pub question: String,

    #[arg(long = "contact_name", alias = "contact-name", default_value = "")]
    pub contact_name: String,

    #[arg(long = "contact_role", alias = "contact-role", default_value = "")]
    pub contact_role: String,

    #[arg(long = "contact_company", alias = "contact-company", default_value = "")]
    pub contact_company: String,
}

impl Cli {
    /// Build the dispatch request.
    ///
    /// Contact info is only attached when at least one contact flag is non-empty,
    /// and then carries all three keys so an empty one marks it incomplete.
    pub fn into_request(self) -> TaskRequest {
        let mut request = TaskRequest::new(self.task)
            .with_company_name(self.company_name)
            .with_url(self.url)
            .with_question(self.question);

        if !self.contact_name.is_empty()
            || !self.contact_role.is_empty()
            || !self.contact_company.is_empty()
        {
            request = request.with_contact_info(ContactInfo::new(
                self.contact_name,
                self.contact_role,
                self.contact_company,
            ));
        }

        request
    }
}
