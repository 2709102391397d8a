use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use metrics::{counter, histogram};
use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Process-wide router counters. Every increment is also forwarded to the
/// `metrics` facade so an installed recorder sees the same numbers.
#[derive(Debug, Default)]
pub struct AppMetrics {
    requests_total: AtomicU64,
    empty_queries_total: AtomicU64,
    greetings_total: AtomicU64,
    fallback_total: AtomicU64,
    results_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub empty_queries_total: u64,
    pub greetings_total: u64,
    pub fallback_total: u64,
    pub results_total: u64,
    pub avg_latency_micros: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        counter!("superagent_requests_total").increment(1);
    }

    pub fn inc_empty_query(&self) {
        self.empty_queries_total.fetch_add(1, Ordering::Relaxed);
        counter!("superagent_empty_queries_total").increment(1);
    }

    pub fn inc_greeting(&self) {
        self.greetings_total.fetch_add(1, Ordering::Relaxed);
        counter!("superagent_greetings_total").increment(1);
    }

    pub fn inc_fallback(&self) {
        self.fallback_total.fetch_add(1, Ordering::Relaxed);
        counter!("superagent_fallback_total").increment(1);
    }

    pub fn add_results(&self, results: usize) {
        self.results_total
            .fetch_add(results as u64, Ordering::Relaxed);
        counter!("superagent_results_total").increment(results as u64);
    }

    pub fn record_intent(&self, intent: &'static str) {
        counter!("superagent_intent_total", "intent" => intent).increment(1);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        histogram!("superagent_query_latency_seconds").record(duration.as_secs_f64());
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests = self.requests_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: requests,
            empty_queries_total: self.empty_queries_total.load(Ordering::Relaxed),
            greetings_total: self.greetings_total.load(Ordering::Relaxed),
            fallback_total: self.fallback_total.load(Ordering::Relaxed),
            results_total: self.results_total.load(Ordering::Relaxed),
            avg_latency_micros: if requests == 0 {
                0.0
            } else {
                latency as f64 / requests as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,superagent_api=info,superagent_agents=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
