mod error;
mod fixed;
mod gazetteer;
mod heuristic;

use std::path::PathBuf;
use std::sync::Arc;

use desk_core::{EntitySource, NameLexicon};
use tracing::{info, warn};

pub use error::EntitySourceError;
pub use fixed::FixedEntitySource;
pub use gazetteer::Gazetteer;
pub use heuristic::HeuristicEntitySource;

const REMEDIATION: &str = "Set DESK_ENTITY_SOURCE=heuristic (the default) to use the built-in \
     recognizer, or point DESK_GAZETTEER at a readable JSON gazetteer.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntitySourceKind {
    Heuristic,
    Disabled,
}

impl EntitySourceKind {
    pub fn parse(value: &str) -> Result<Self, EntitySourceError> {
        match value.trim().to_lowercase().as_str() {
            "" | "heuristic" | "gazetteer" => Ok(Self::Heuristic),
            "none" | "off" | "disabled" => Ok(Self::Disabled),
            other => Err(EntitySourceError::Unavailable {
                source_name: other.to_string(),
                hint: format!("Unknown entity source. {REMEDIATION}"),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntitySourceConfig {
    pub kind: EntitySourceKind,
    pub gazetteer_path: Option<PathBuf>,
}

impl Default for EntitySourceConfig {
    fn default() -> Self {
        Self {
            kind: EntitySourceKind::Heuristic,
            gazetteer_path: None,
        }
    }
}

pub fn load_entity_source(
    config: &EntitySourceConfig,
    lexicon: &NameLexicon,
) -> Result<Arc<dyn EntitySource>, EntitySourceError> {
    match config.kind {
        EntitySourceKind::Disabled => {
            warn!("entity source disabled by configuration");
            Err(EntitySourceError::Unavailable {
                source_name: "none".to_string(),
                hint: REMEDIATION.to_string(),
            })
        }
        EntitySourceKind::Heuristic => {
            let mut source = HeuristicEntitySource::new(lexicon);
            if let Some(path) = &config.gazetteer_path {
                let gazetteer = Gazetteer::from_path(path)?;
                info!(
                    path = %path.display(),
                    given_names = gazetteer.given_names.len(),
                    "gazetteer loaded"
                );
                source = source.with_gazetteer(gazetteer);
            }

            info!(
                source = source.source_name(),
                given_names = source.known_given_names(),
                "entity source ready"
            );
            Ok(Arc::new(source))
        }
    }
}
