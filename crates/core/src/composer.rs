use crate::models::{
    Action, Decision, Department, ExtractedMetadata, Outcome, OutputRecord, Salutation,
};

pub const NONE_FOUND: &str = "none found";
pub const REVIEW_MINUTES_SAVED: u64 = 5;

const RULE_HEAVY: &str = "==================================================";
const RULE_LIGHT: &str = "--------------------------------------------------";

#[derive(Debug, Clone)]
pub struct ComposerSettings {
    pub reply_from: String,
    pub office_signature: String,
    pub include_process_metric: bool,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            reply_from: "service@essen.de".to_string(),
            office_signature: "Your digital city administration Essen".to_string(),
            include_process_metric: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResponseComposer {
    settings: ComposerSettings,
}

impl ResponseComposer {
    pub fn new(settings: ComposerSettings) -> Self {
        Self { settings }
    }

    pub fn compose(
        &self,
        decision: &Decision,
        department: Department,
        metadata: &ExtractedMetadata,
        salutation: &Salutation,
        sender: &str,
    ) -> OutputRecord {
        match decision.outcome() {
            Outcome::Reject => OutputRecord {
                action: Action::Reject,
                rendered_text: self.clarification_request(
                    decision.missing_items(),
                    department,
                    salutation,
                    sender,
                ),
            },
            Outcome::Accept => OutputRecord {
                action: Action::Route,
                rendered_text: routing_summary(department, metadata),
            },
        }
    }

    fn clarification_request(
        &self,
        missing_items: &[String],
        department: Department,
        salutation: &Salutation,
        sender: &str,
    ) -> String {
        let bullets = missing_items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n");

        let banner = if self.settings.include_process_metric {
            format!(
                "[PROCESS METRIC] Case intercepted automatically. Estimated review time saved: approx. {} min.\n\n",
                REVIEW_MINUTES_SAVED
            )
        } else {
            String::new()
        };

        format!(
            "{banner}From: {from}\n\
             To: {sender}\n\
             Subject: Re: Your request ({department}) - documents incomplete\n\n\
             {salutation},\n\n\
             thank you for your message. To process your request in the area '{department}'\n\
             as quickly as possible, we still need the following information/documents:\n\n\
             {bullets}\n\n\
             Please send this information in reply to this email.\n\n\
             Kind regards\n\
             {signature}",
            from = self.settings.reply_from,
            signature = self.settings.office_signature,
        )
    }
}

fn routing_summary(department: Department, metadata: &ExtractedMetadata) -> String {
    let case_reference = metadata.case_reference.as_deref().unwrap_or(NONE_FOUND);

    format!(
        "{RULE_HEAVY}\n \
         CASEWORKER COCKPIT | NEW INBOUND\n\
         {RULE_HEAVY}\n \
         RESPONSIBLE:   {department}\n \
         PRIORITY:      {urgency}\n \
         SYSTEM CHECK:  All mandatory fields present\n\
         {RULE_LIGHT}\n \
         SUMMARY (EXTRACTED FACTS):\n \
         - Case reference: {case_reference}\n \
         - Deadlines/dates: {deadlines}\n \
         - Amounts:        {amounts}\n\
         {RULE_HEAVY}",
        urgency = metadata.urgency().label(),
        deadlines = joined_or_none(&metadata.deadlines),
        amounts = joined_or_none(&metadata.amounts),
    )
}

fn joined_or_none(values: &[String]) -> String {
    if values.is_empty() {
        NONE_FOUND.to_string()
    } else {
        values.join(", ")
    }
}
