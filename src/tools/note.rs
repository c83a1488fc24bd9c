//! Personalized LinkedIn connection notes.

use super::ToolContext;
use crate::agent::ContactInfo;

pub const INCOMPLETE_CONTACT: &str = "Sorry, the contact information is incomplete.";

/// Generate a short connection note for a contact.
///
/// An empty contact, or one with any present field empty, gets the apology.
pub async fn generate_linkedin_note(ctx: &ToolContext, contact_info: &ContactInfo) -> String {
    if !contact_info.is_complete() {
        return INCOMPLETE_CONTACT.to_string();
    }

    let name = contact_info.name().unwrap_or("there");
    let role = contact_info.role().unwrap_or("");
    let company = contact_info.company().unwrap_or("");

    let prompt = format!(
        "Write a short LinkedIn connection note to {}, who is the {} at {}. \
         The note should be friendly, mention collaboration or industry trends, and be concise.",
        name, role, company
    );

    ctx.generate(&prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::Harness;

    #[tokio::test]
    async fn empty_contact_gets_apology() {
        let h = Harness::replying("unused");
        let out = generate_linkedin_note(&h.context(), &ContactInfo::default()).await;
        assert_eq!(out, INCOMPLETE_CONTACT);
        assert!(h.llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn any_empty_field_gets_apology() {
        let h = Harness::replying("unused");
        let contact = ContactInfo::new("Jane Doe", "", "X");
        let out = generate_linkedin_note(&h.context(), &contact).await;
        assert_eq!(out, INCOMPLETE_CONTACT);
        assert!(h.llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn complete_contact_is_prompted_and_returned_verbatim() {
        let reply = "Hi Jane Doe, I noticed your role as CTO at ExampleCorp. Let's connect!";
        let h = Harness::replying(reply);
        let contact = ContactInfo::new("Jane Doe", "CTO", "ExampleCorp");

        let out = generate_linkedin_note(&h.context(), &contact).await;
        assert_eq!(out, reply);
        assert_eq!(
            h.llm.prompts(),
            vec![
                "Write a short LinkedIn connection note to Jane Doe, who is the CTO at ExampleCorp. \
                 The note should be friendly, mention collaboration or industry trends, and be concise."
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn absent_name_falls_back_to_there() {
        let h = Harness::replying("ok");
        let contact = ContactInfo::default()
            .with_field("role", "CTO")
            .with_field("company", "ExampleCorp");
        generate_linkedin_note(&h.context(), &contact).await;
        assert!(h.llm.prompts()[0].starts_with("Write a short LinkedIn connection note to there, "));
    }

    #[tokio::test]
    async fn null_name_gets_apology() {
        let h = Harness::replying("unused");
        let contact = ContactInfo::default()
            .with_field("company", "X")
            .with_null("name")
            .with_field("role", "CTO");
        let out = generate_linkedin_note(&h.context(), &contact).await;
        assert_eq!(out, INCOMPLETE_CONTACT);
        assert!(h.llm.prompts().is_empty());
    }
}
