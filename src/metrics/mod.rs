// Metrics module for Prometheus observability

mod registry;

pub use registry::{
    gather_metrics, CACHE_ENTRIES, CACHE_OPERATIONS, COMPLETION_CALLS, COMPLETION_DURATION,
    REQUESTS_TOTAL, REQUEST_DURATION,
};

/// Helper to record request metrics
pub fn record_request(method: &str, endpoint: &str, status_code: u16, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status_code.to_string()])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[method, endpoint])
        .observe(duration_secs);
}

/// Helper to record completion service call metrics
pub fn record_completion_call(model: &str, success: bool, duration_secs: f64) {
    let outcome = if success { "success" } else { "failure" };
    COMPLETION_CALLS.with_label_values(&[model, outcome]).inc();

    COMPLETION_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}

/// Helpers to record answer cache operations
pub fn record_cache_hit() {
    CACHE_OPERATIONS.with_label_values(&["hit"]).inc();
}

pub fn record_cache_miss() {
    CACHE_OPERATIONS.with_label_values(&["miss"]).inc();
}

pub fn record_cache_store() {
    CACHE_OPERATIONS.with_label_values(&["store"]).inc();
}

pub fn update_cache_entries(count: usize) {
    CACHE_ENTRIES.with_label_values(&["active"]).set(count as f64);
}
