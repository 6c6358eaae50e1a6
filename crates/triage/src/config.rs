use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use desk_core::{ComposerSettings, NameLexicon};
use desk_ner::{EntitySourceConfig, EntitySourceKind};

#[derive(Debug, Clone, Default)]
pub struct DeskConfig {
    pub composer: ComposerSettings,
    pub name_lexicon_path: Option<PathBuf>,
    pub entity_source: EntitySourceConfig,
}

impl DeskConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = ComposerSettings::default();

        let include_process_metric = match env::var("DESK_PROCESS_METRIC") {
            Ok(value) => parse_flag(&value).context("invalid DESK_PROCESS_METRIC")?,
            Err(_) => defaults.include_process_metric,
        };

        let kind = match env::var("DESK_ENTITY_SOURCE") {
            Ok(value) => EntitySourceKind::parse(&value)?,
            Err(_) => EntitySourceKind::Heuristic,
        };

        Ok(Self {
            composer: ComposerSettings {
                reply_from: env::var("DESK_REPLY_FROM").unwrap_or(defaults.reply_from),
                office_signature: env::var("DESK_OFFICE_SIGNATURE")
                    .unwrap_or(defaults.office_signature),
                include_process_metric,
            },
            name_lexicon_path: env::var("DESK_NAME_LEXICON").ok().map(PathBuf::from),
            entity_source: EntitySourceConfig {
                kind,
                gazetteer_path: env::var("DESK_GAZETTEER").ok().map(PathBuf::from),
            },
        })
    }

    pub fn name_lexicon(&self) -> Result<NameLexicon> {
        let mut lexicon = NameLexicon::builtin();

        if let Some(path) = &self.name_lexicon_path {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed reading name lexicon at {}", path.display()))?;
            lexicon
                .merge_json(&raw)
                .with_context(|| format!("failed loading name lexicon at {}", path.display()))?;
        }

        Ok(lexicon)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected true/false, got '{other}'"),
    }
}
