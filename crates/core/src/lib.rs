pub mod composer;
pub mod entities;
pub mod extract;
pub mod intent;
pub mod models;
pub mod pipeline;
pub mod policy;
pub mod salutation;

pub use composer::{ComposerSettings, ResponseComposer, REVIEW_MINUTES_SAVED};
pub use entities::EntitySource;
pub use extract::{extract_case_reference, extract_metadata, extract_metadata_with_usage};
pub use intent::{classify_department, IntentClassifier, KeywordRule};
pub use models::*;
pub use pipeline::{PipelineRun, TriagePipeline};
pub use policy::{QualityGate, RequirementCheck, RequirementRule};
pub use salutation::{
    resolve_salutation, Gender, LexiconDocument, LexiconError, NameLexicon, SalutationResolver,
};
