use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{EntityLabel, NamedEntity, Salutation};

const FEMALE_NAMES: &[&str] = &["sabine", "anna", "maria", "julia", "susanne", "petra"];
const MALE_NAMES: &[&str] = &["thomas", "michael", "christian", "peter", "klaus", "johannes"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("given name '{0}' is listed as both female and male")]
    Conflict(String),
    #[error("invalid name lexicon document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
pub struct LexiconDocument {
    #[serde(default)]
    pub female: Vec<String>,
    #[serde(default)]
    pub male: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NameLexicon {
    entries: HashMap<String, Gender>,
}

impl NameLexicon {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut lexicon = Self::empty();
        for name in FEMALE_NAMES {
            lexicon.entries.insert((*name).to_string(), Gender::Female);
        }
        for name in MALE_NAMES {
            lexicon.entries.insert((*name).to_string(), Gender::Male);
        }
        lexicon
    }

    pub fn insert(&mut self, given_name: &str, gender: Gender) -> Result<(), LexiconError> {
        let key = given_name.trim().to_lowercase();
        match self.entries.get(&key) {
            Some(existing) if *existing != gender => Err(LexiconError::Conflict(key)),
            _ => {
                self.entries.insert(key, gender);
                Ok(())
            }
        }
    }

    pub fn merge_document(&mut self, document: LexiconDocument) -> Result<(), LexiconError> {
        for name in &document.female {
            self.insert(name, Gender::Female)?;
        }
        for name in &document.male {
            self.insert(name, Gender::Male)?;
        }
        Ok(())
    }

    pub fn merge_json(&mut self, raw: &str) -> Result<(), LexiconError> {
        let document: LexiconDocument = serde_json::from_str(raw)?;
        self.merge_document(document)
    }

    pub fn gender_of(&self, given_name: &str) -> Option<Gender> {
        self.entries.get(&given_name.to_lowercase()).copied()
    }

    pub fn given_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

}

#[derive(Debug, Clone)]
pub struct SalutationResolver {
    lexicon: NameLexicon,
}

impl Default for SalutationResolver {
    fn default() -> Self {
        Self::new(NameLexicon::builtin())
    }
}

impl SalutationResolver {
    pub fn new(lexicon: NameLexicon) -> Self {
        Self { lexicon }
    }

    /// The last PERSON span is taken as the sender, since signatures come last.
    /// Names with fewer than two tokens are not trusted for a personal greeting.
    pub fn resolve(&self, entities: &[NamedEntity]) -> Salutation {
        let Some(sender) = entities
            .iter()
            .rev()
            .find(|entity| entity.label == EntityLabel::Person)
        else {
            return Salutation::Generic;
        };

        let tokens = sender.text.split_whitespace().collect::<Vec<_>>();
        if tokens.len() < 2 {
            return Salutation::Generic;
        }

        let given = tokens[0];
        let family = tokens[tokens.len() - 1].to_string();
        match self.lexicon.gender_of(given) {
            Some(Gender::Female) => Salutation::Female { family },
            Some(Gender::Male) => Salutation::Male { family },
            None => Salutation::Neutral {
                given: given.to_string(),
                family,
            },
        }
    }
}

pub fn resolve_salutation(entities: &[NamedEntity]) -> Salutation {
    SalutationResolver::default().resolve(entities)
}
