use serde::Serialize;

use crate::composer::ResponseComposer;
use crate::extract::extract_metadata_with_usage;
use crate::intent::IntentClassifier;
use crate::models::{
    Decision, Department, ExtractedMetadata, FallbackUsage, InboundMessage, NamedEntity,
    OutputRecord, Salutation, Urgency,
};
use crate::policy::QualityGate;
use crate::salutation::SalutationResolver;

#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    pub department: Department,
    pub office_code: &'static str,
    pub metadata: ExtractedMetadata,
    pub fallback: FallbackUsage,
    pub urgency: Urgency,
    pub salutation: Salutation,
    pub decision: Decision,
    pub output: OutputRecord,
}

#[derive(Debug, Clone, Default)]
pub struct TriagePipeline {
    classifier: IntentClassifier,
    resolver: SalutationResolver,
    gate: QualityGate,
    composer: ResponseComposer,
}

impl TriagePipeline {
    pub fn new(
        classifier: IntentClassifier,
        resolver: SalutationResolver,
        gate: QualityGate,
        composer: ResponseComposer,
    ) -> Self {
        Self {
            classifier,
            resolver,
            gate,
            composer,
        }
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn run(&self, message: &InboundMessage, entities: &[NamedEntity]) -> PipelineRun {
        let department = self.classifier.classify(&message.text);
        let (metadata, fallback) = extract_metadata_with_usage(&message.text, entities);
        let salutation = self.resolver.resolve(entities);
        let decision = self.gate.evaluate(department, &metadata, &message.text);
        let output =
            self.composer
                .compose(&decision, department, &metadata, &salutation, &message.sender);

        PipelineRun {
            department,
            office_code: department.office_code(),
            urgency: metadata.urgency(),
            metadata,
            fallback,
            salutation,
            decision,
            output,
        }
    }
}
