mod config;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use desk_core::{
    Department, EntitySource, InboundMessage, IntentClassifier, NamedEntity, Outcome,
    OutputRecord, PipelineRun, QualityGate, ResponseComposer, SalutationResolver,
    TriagePipeline, REVIEW_MINUTES_SAVED,
};
use desk_ner::load_entity_source;
use desk_observability::AppMetrics;
use serde::Serialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub use config::DeskConfig;

#[derive(Debug, Clone, Serialize)]
pub struct TriageReport {
    pub message_id: Uuid,
    pub processed_at: DateTime<Utc>,
    pub sender: String,
    pub sender_looks_like_email: bool,
    pub entity_source: &'static str,
    pub entities: Vec<NamedEntity>,
    #[serde(flatten)]
    pub run: PipelineRun,
}

#[derive(Clone)]
pub struct TriageDesk {
    entity_source: Arc<dyn EntitySource>,
    pipeline: Arc<TriagePipeline>,
    metrics: Arc<AppMetrics>,
}

impl TriageDesk {
    pub fn new(
        entity_source: Arc<dyn EntitySource>,
        pipeline: TriagePipeline,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            entity_source,
            pipeline: Arc::new(pipeline),
            metrics,
        }
    }

    pub fn from_config(config: &DeskConfig, metrics: Arc<AppMetrics>) -> Result<Self> {
        let lexicon = config.name_lexicon()?;
        let entity_source = load_entity_source(&config.entity_source, &lexicon)
            .context("entity recognition is required before messages can be triaged")?;

        let pipeline = TriagePipeline::new(
            IntentClassifier::default(),
            SalutationResolver::new(lexicon),
            QualityGate::default(),
            ResponseComposer::new(config.composer.clone()),
        );

        Ok(Self::new(entity_source, pipeline, metrics))
    }

    pub fn metrics(&self) -> Arc<AppMetrics> {
        self.metrics.clone()
    }

    pub fn classify(&self, text: &str) -> Department {
        self.pipeline.classifier().classify(text)
    }

    pub fn process(&self, sender: &str, text: &str) -> OutputRecord {
        self.process_detailed(&InboundMessage::new(sender, text)).run.output
    }

    #[instrument(skip(self, message), fields(sender = %message.sender))]
    pub fn process_detailed(&self, message: &InboundMessage) -> TriageReport {
        let started = Instant::now();
        let message_id = Uuid::new_v4();
        self.metrics.inc_message();

        let entities = self.entity_source.annotate(&message.text);
        let run = self.pipeline.run(message, &entities);

        if run.fallback.any() {
            debug!(
                message_id = %message_id,
                deadlines = run.fallback.deadlines,
                amounts = run.fallback.amounts,
                "metadata filled from entity spans"
            );
        }
        self.metrics
            .record_fallback(run.fallback.deadlines, run.fallback.amounts);

        match run.decision.outcome() {
            Outcome::Reject => self.metrics.record_rejection(REVIEW_MINUTES_SAVED),
            Outcome::Accept => self.metrics.inc_routed(),
        }

        self.metrics.observe_latency(started.elapsed());
        info!(
            message_id = %message_id,
            department = run.department.as_code(),
            office = run.office_code,
            outcome = ?run.decision.outcome(),
            missing = run.decision.missing_items().len(),
            entities = entities.len(),
            fallback = run.fallback.any(),
            "message triaged"
        );

        TriageReport {
            message_id,
            processed_at: Utc::now(),
            sender: message.sender.clone(),
            sender_looks_like_email: message.sender_looks_like_email(),
            entity_source: self.entity_source.source_name(),
            entities,
            run,
        }
    }
}
