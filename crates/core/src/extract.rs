use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{entity_texts, EntityLabel, ExtractedMetadata, FallbackUsage, NamedEntity};

static CASE_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bAZ-\d{4}-\d{4}\b").expect("valid case reference regex"));

static DEADLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{2}\.\d{2}\.\d{4}\b").expect("valid deadline regex"));

// `€` is not a word character, so only `Euro` gets a trailing boundary.
static AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d+(?:,\d{2})?\s*(?:Euro\b|€)").expect("valid amount regex")
});

pub fn extract_case_reference(text: &str) -> Option<String> {
    CASE_REFERENCE
        .find(text)
        .map(|found| found.as_str().to_string())
}

pub fn extract_metadata(text: &str, entities: &[NamedEntity]) -> ExtractedMetadata {
    extract_metadata_with_usage(text, entities).0
}

pub fn extract_metadata_with_usage(
    text: &str,
    entities: &[NamedEntity],
) -> (ExtractedMetadata, FallbackUsage) {
    let (deadlines, deadline_fallback) =
        matches_or_entities(&DEADLINE, text, entities, &EntityLabel::Date);
    let (amounts, amount_fallback) =
        matches_or_entities(&AMOUNT, text, entities, &EntityLabel::Money);

    (
        ExtractedMetadata {
            case_reference: extract_case_reference(text),
            deadlines,
            amounts,
        },
        FallbackUsage {
            deadlines: deadline_fallback,
            amounts: amount_fallback,
        },
    )
}

fn matches_or_entities(
    pattern: &Regex,
    text: &str,
    entities: &[NamedEntity],
    label: &EntityLabel,
) -> (Vec<String>, bool) {
    let found = pattern
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect::<Vec<_>>();

    if !found.is_empty() {
        return (found, false);
    }

    let from_entities = entity_texts(entities, label);
    let used = !from_entities.is_empty();
    (from_entities, used)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_reference_is_taken_verbatim() {
        let meta = extract_metadata("(Vorgang:AZ-2026-8871)!", &[]);
        assert_eq!(meta.case_reference.as_deref(), Some("AZ-2026-8871"));
    }

    #[test]
    fn only_first_case_reference_is_reported() {
        let meta = extract_metadata("AZ-2025-0001 und AZ-2026-0002", &[]);
        assert_eq!(meta.case_reference.as_deref(), Some("AZ-2025-0001"));
    }

    #[test]
    fn malformed_references_are_ignored() {
        assert_eq!(extract_case_reference("AZ-26-8871"), None);
        assert_eq!(extract_case_reference("XAZ-2026-88712"), None);
    }

    #[test]
    fn collects_all_dates_and_amounts_in_order() {
        let meta = extract_metadata(
            "Frist 01.03.2026, dann 15.04.2026. Kosten 12,50 Euro plus 300€ und 7 Euros",
            &[],
        );
        assert_eq!(meta.deadlines, vec!["01.03.2026", "15.04.2026"]);
        assert_eq!(meta.amounts, vec!["12,50 Euro", "300€"]);
    }

    #[test]
    fn falls_back_to_entities_per_field() {
        let entities = vec![
            NamedEntity::date("Ende Maerz"),
            NamedEntity::money("zweihundert Euro"),
            NamedEntity::date("naechsten Montag"),
        ];
        let (meta, usage) = extract_metadata_with_usage("Bis 01.02.2026 bitte", &entities);

        assert_eq!(meta.deadlines, vec!["01.02.2026"]);
        assert_eq!(meta.amounts, vec!["zweihundert Euro"]);
        assert!(!usage.deadlines);
        assert!(usage.amounts);

        let (meta, usage) = extract_metadata_with_usage("keine Fakten", &entities);
        assert_eq!(meta.deadlines, vec!["Ende Maerz", "naechsten Montag"]);
        assert!(usage.deadlines);
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "AZ-2026-1004 bis 28.02.2026, 1500 Euro";
        let entities = vec![NamedEntity::person("Anna Berg")];
        assert_eq!(
            extract_metadata(text, &entities),
            extract_metadata(text, &entities)
        );
    }

    #[test]
    fn empty_fields_are_normal() {
        let meta = extract_metadata("", &[]);
        assert_eq!(meta, ExtractedMetadata::default());
    }
}
