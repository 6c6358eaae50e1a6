use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    pub sender: String,
    pub text: String,
}

impl InboundMessage {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into().trim().to_string(),
            text: text.into(),
        }
    }

    pub fn sender_looks_like_email(&self) -> bool {
        match self.sender.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !self.sender.contains(char::is_whitespace)
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Person,
    Date,
    Money,
    Location,
    Organization,
    Other(String),
}

impl EntityLabel {
    pub fn as_code(&self) -> &str {
        match self {
            Self::Person => "PERSON",
            Self::Date => "DATE",
            Self::Money => "MONEY",
            Self::Location => "LOC",
            Self::Organization => "ORG",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub text: String,
    pub label: EntityLabel,
}

impl NamedEntity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    pub fn person(text: impl Into<String>) -> Self {
        Self::new(text, EntityLabel::Person)
    }

    pub fn date(text: impl Into<String>) -> Self {
        Self::new(text, EntityLabel::Date)
    }

    pub fn money(text: impl Into<String>) -> Self {
        Self::new(text, EntityLabel::Money)
    }
}

pub fn entity_texts(entities: &[NamedEntity], label: &EntityLabel) -> Vec<String> {
    entities
        .iter()
        .filter(|entity| &entity.label == label)
        .map(|entity| entity.text.clone())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    UrbanPlanningBuilding,
    SocialHousing,
    PublicOrderDefects,
    GeneralService,
}

impl Department {
    pub fn label(self) -> &'static str {
        match self {
            Self::UrbanPlanningBuilding => "Urban Planning & Building",
            Self::SocialHousing => "Social & Housing",
            Self::PublicOrderDefects => "Public Order/Defect Reporting",
            Self::GeneralService => "General Service",
        }
    }

    pub fn office_code(self) -> &'static str {
        match self {
            Self::UrbanPlanningBuilding => "FB 61",
            Self::SocialHousing => "FB 50",
            Self::PublicOrderDefects => "Ordnungsamt",
            Self::GeneralService => "Service",
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::UrbanPlanningBuilding => "urban_planning_building",
            Self::SocialHousing => "social_housing",
            Self::PublicOrderDefects => "public_order_defects",
            Self::GeneralService => "general_service",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Normal,
}

impl Urgency {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH (check deadline!)",
            Self::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    pub case_reference: Option<String>,
    pub deadlines: Vec<String>,
    pub amounts: Vec<String>,
}

impl ExtractedMetadata {
    pub fn urgency(&self) -> Urgency {
        if self.deadlines.is_empty() {
            Urgency::Normal
        } else {
            Urgency::High
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackUsage {
    pub deadlines: bool,
    pub amounts: bool,
}

impl FallbackUsage {
    pub fn any(self) -> bool {
        self.deadlines || self.amounts
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Salutation {
    Generic,
    Female { family: String },
    Male { family: String },
    Neutral { given: String, family: String },
}

impl Salutation {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Salutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => f.write_str("Dear Sir or Madam"),
            Self::Female { family } => write!(f, "Dear Mrs. {family}"),
            Self::Male { family } => write!(f, "Dear Mr. {family}"),
            Self::Neutral { given, family } => write!(f, "Hello {given} {family}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Accept,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    outcome: Outcome,
    missing_items: Vec<String>,
}

impl Decision {
    pub fn from_missing(missing_items: Vec<String>) -> Self {
        let outcome = if missing_items.is_empty() {
            Outcome::Accept
        } else {
            Outcome::Reject
        };

        Self {
            outcome,
            missing_items,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn missing_items(&self) -> &[String] {
        &self.missing_items
    }

    pub fn is_rejected(&self) -> bool {
        self.outcome == Outcome::Reject
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Reject,
    Route,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub action: Action,
    pub rendered_text: String,
}
