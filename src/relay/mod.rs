//! The query cache-and-relay orchestrator.
//!
//! `Relay::ask` is the only stateful coordination point: fresh cache hits
//! short-circuit without touching the network; misses build a prompt, make a
//! single completion call, and store the answer on success. Failures are
//! classified into display text and never cached, so an identical follow-up
//! question always retries the service instead of replaying an error.

mod classify;

pub use classify::{classify, GENERIC_FAILURE_MESSAGE};

use crate::cache::{cache_key, AnswerCache, CacheStats};
use crate::metrics;
use crate::ollama::CompletionBackend;
use crate::prompt;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// The outcome of one `ask` call. Always well-formed: failures ride inside
/// with `is_error` set rather than escaping as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Subject echoed back so the caller can route the answer.
    pub subject: String,
    /// The model's answer, or a human-readable failure message.
    pub text: String,
    pub is_error: bool,
    /// Milliseconds since epoch.
    pub produced_at: i64,
}

/// Orchestrator owning the answer cache and the completion backend.
pub struct Relay {
    backend: Arc<dyn CompletionBackend>,
    cache: AnswerCache,
}

impl Relay {
    pub fn new(backend: Arc<dyn CompletionBackend>, cache: AnswerCache) -> Self {
        Self { backend, cache }
    }

    /// Answer a question about a subject, from cache when fresh.
    ///
    /// Subjects are opaque strings; an unknown subject simply produces a
    /// prompt referencing a name with no matching documentation.
    pub async fn ask(&self, subject: &str, question: &str) -> Answer {
        let key = cache_key(subject, question);
        let now = Utc::now().timestamp_millis();

        if let Some(text) = self.cache.lookup(&key, now) {
            metrics::record_cache_hit();
            info!("Returning cached answer for subject: {subject}");
            return Answer {
                subject: subject.to_string(),
                text,
                is_error: false,
                produced_at: now,
            };
        }
        metrics::record_cache_miss();

        let prompt = prompt::build(subject, question);
        let started = Instant::now();
        let result = self.backend.complete(&prompt).await;
        metrics::record_completion_call(
            self.backend.model(),
            result.is_ok(),
            started.elapsed().as_secs_f64(),
        );

        let now = Utc::now().timestamp_millis();
        match result {
            Ok(text) => {
                self.cache.store(key, text.clone(), now);
                metrics::record_cache_store();
                metrics::update_cache_entries(self.cache.len());
                info!("Answered question for subject: {subject}");
                Answer {
                    subject: subject.to_string(),
                    text,
                    is_error: false,
                    produced_at: now,
                }
            }
            Err(err) => {
                warn!("Completion failed for subject {subject}: {err}");
                let text = classify(&err, self.backend.endpoint(), self.backend.model());
                Answer {
                    subject: subject.to_string(),
                    text,
                    is_error: true,
                    produced_at: now,
                }
            }
        }
    }

    /// Snapshot of the cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Number of answers currently cached.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
