use crate::intent::contains_any;
use crate::models::{Decision, Department, ExtractedMetadata};

pub const MISSING_CASE_REFERENCE: &str = "Case reference (format AZ-YYYY-NNNN)";
pub const MISSING_ATTACHMENT: &str = "Required attachment (e.g., structural-analysis report)";

#[derive(Debug, Clone)]
pub enum RequirementCheck {
    CaseReferencePresent,
    TextMentionsAny(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct RequirementRule {
    pub applies_to: Option<Department>,
    pub check: RequirementCheck,
    pub missing_item: String,
}

impl RequirementRule {
    pub fn universal(check: RequirementCheck, missing_item: impl Into<String>) -> Self {
        Self {
            applies_to: None,
            check,
            missing_item: missing_item.into(),
        }
    }

    pub fn for_department(
        department: Department,
        check: RequirementCheck,
        missing_item: impl Into<String>,
    ) -> Self {
        Self {
            applies_to: Some(department),
            check,
            missing_item: missing_item.into(),
        }
    }

    fn applies(&self, department: Department) -> bool {
        self.applies_to.map_or(true, |target| target == department)
    }

    fn satisfied(&self, metadata: &ExtractedMetadata, lower_text: &str) -> bool {
        match &self.check {
            RequirementCheck::CaseReferencePresent => metadata.case_reference.is_some(),
            RequirementCheck::TextMentionsAny(keywords) => {
                contains_any(lower_text, keywords.as_slice())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct QualityGate {
    rules: Vec<RequirementRule>,
}

impl Default for QualityGate {
    fn default() -> Self {
        Self {
            rules: vec![
                RequirementRule::universal(
                    RequirementCheck::CaseReferencePresent,
                    MISSING_CASE_REFERENCE,
                ),
                RequirementRule::for_department(
                    Department::UrbanPlanningBuilding,
                    RequirementCheck::TextMentionsAny(vec![
                        "statik".to_string(),
                        "anlage".to_string(),
                    ]),
                    MISSING_ATTACHMENT,
                ),
            ],
        }
    }
}

impl QualityGate {
    pub fn with_rule(mut self, rule: RequirementRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn evaluate(
        &self,
        department: Department,
        metadata: &ExtractedMetadata,
        text: &str,
    ) -> Decision {
        let lower = text.to_lowercase();

        let missing = self
            .rules
            .iter()
            .filter(|rule| rule.applies(department))
            .filter(|rule| !rule.satisfied(metadata, &lower))
            .map(|rule| rule.missing_item.clone())
            .collect::<Vec<_>>();

        Decision::from_missing(missing)
    }
}
