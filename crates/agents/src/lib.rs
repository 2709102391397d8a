use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use superagent_core::{
    build_results_for_family, compose_reply, correct_typos, detect_intent, normalize_query,
    score_intents, AgentReply, ClassificationResult, Family, Intent, IntentScore, ResultRecord,
};
use superagent_observability::AppMetrics;
use tracing::{debug, info, instrument};

/// Classifier internals for one query, as shown by diagnostics tooling.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationTrace {
    pub normalized: String,
    pub corrected: String,
    pub scores: Vec<IntentScore>,
    pub result: ClassificationResult,
}

#[derive(Clone)]
pub struct RoutingAgent {
    metrics: Arc<AppMetrics>,
}

impl RoutingAgent {
    pub fn new(metrics: Arc<AppMetrics>) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &Arc<AppMetrics> {
        &self.metrics
    }

    #[instrument(skip(self, text))]
    pub fn handle_query(&self, text: &str) -> AgentReply {
        let started = Instant::now();
        self.metrics.inc_request();

        let reply = compose_reply(text);

        match reply.intent {
            None => self.metrics.inc_empty_query(),
            Some(Intent::Greeting) => self.metrics.inc_greeting(),
            Some(Intent::Unknown) => self.metrics.inc_fallback(),
            Some(_) => self.metrics.add_results(reply.details.len()),
        }
        if let Some(intent) = reply.intent {
            self.metrics.record_intent(intent.as_str());
        }

        self.metrics.observe_latency(started.elapsed());
        info!(
            intent = ?reply.intent,
            family = ?reply.family,
            results = reply.details.len(),
            "query handled"
        );

        reply
    }

    pub fn explain(&self, text: &str) -> ClassificationTrace {
        let normalized = normalize_query(text);
        let corrected = correct_typos(&normalized);
        let scores = score_intents(&corrected);
        let result = detect_intent(text);

        debug!(%normalized, %corrected, intent = %result.intent, "classification traced");

        ClassificationTrace {
            normalized,
            corrected,
            scores,
            result,
        }
    }

    pub fn build(&self, query: &str, family: Family) -> Vec<ResultRecord> {
        build_results_for_family(query, family)
    }
}
