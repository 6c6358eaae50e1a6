use crate::models::NamedEntity;

/// Named-entity recognition capability the pipeline consumes.
///
/// Implementations must return spans in order of first appearance and be
/// deterministic for identical input over the lifetime of the process.
pub trait EntitySource: Send + Sync {
    fn source_name(&self) -> &'static str;
    fn annotate(&self, text: &str) -> Vec<NamedEntity>;
}
