use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EntitySourceError {
    #[error("entity source '{source_name}' is unavailable. {hint}")]
    Unavailable {
        source_name: String,
        hint: String,
    },

    #[error(
        "failed reading gazetteer at {}: {source}. Check DESK_GAZETTEER or unset it to use the built-in names",
        .path.display()
    )]
    GazetteerRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "invalid gazetteer at {}: {source}. Expected {{ \"given_names\": [...], \"honorifics\": [...] }}",
        .path.display()
    )]
    GazetteerFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
