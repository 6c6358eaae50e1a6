use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    messages_total: AtomicU64,
    rejected_total: AtomicU64,
    routed_total: AtomicU64,
    deadline_fallback_total: AtomicU64,
    amount_fallback_total: AtomicU64,
    review_minutes_saved: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub messages_total: u64,
    pub rejected_total: u64,
    pub routed_total: u64,
    pub deadline_fallback_total: u64,
    pub amount_fallback_total: u64,
    pub review_minutes_saved: u64,
    pub avg_latency_micros: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_message(&self) {
        self.messages_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self, minutes_saved: u64) {
        self.rejected_total.fetch_add(1, Ordering::Relaxed);
        self.review_minutes_saved
            .fetch_add(minutes_saved, Ordering::Relaxed);
    }

    pub fn inc_routed(&self) {
        self.routed_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self, deadlines: bool, amounts: bool) {
        if deadlines {
            self.deadline_fallback_total.fetch_add(1, Ordering::Relaxed);
        }
        if amounts {
            self.amount_fallback_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let messages = self.messages_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            messages_total: messages,
            rejected_total: self.rejected_total.load(Ordering::Relaxed),
            routed_total: self.routed_total.load(Ordering::Relaxed),
            deadline_fallback_total: self.deadline_fallback_total.load(Ordering::Relaxed),
            amount_fallback_total: self.amount_fallback_total.load(Ordering::Relaxed),
            review_minutes_saved: self.review_minutes_saved.load(Ordering::Relaxed),
            avg_latency_micros: if messages == 0 {
                0.0
            } else {
                latency as f64 / messages as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,desk_triage=info,desk_ner=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
