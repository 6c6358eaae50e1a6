use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::EntitySourceError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Gazetteer {
    #[serde(default)]
    pub given_names: Vec<String>,
    #[serde(default)]
    pub honorifics: Vec<String>,
}

impl Gazetteer {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EntitySourceError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| EntitySourceError::GazetteerRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| EntitySourceError::GazetteerFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}
