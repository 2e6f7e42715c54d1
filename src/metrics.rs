//! Prometheus-style metric facade.
//!
//! Thin wrappers around the `metrics` crate macros. No exporter is installed
//! here; without a recorder every call is a no-op. The figures served by
//! `/api/v1/stats` come from [`crate::core::UsageMetrics`], not from this
//! module.
//!
//! Provided metrics:
//! * `showcase_requests_total` (counter, labels: path, method, status)
//! * `showcase_request_duration_seconds` (histogram, labels: path, method)
//! * `showcase_active_connections` (gauge)
//! * `showcase_validation_rejections_total` (counter, label: reason)
use std::time::Instant;

use metrics::{Unit, counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use once_cell::sync::Lazy;

pub const SHOWCASE_REQUESTS_TOTAL: &str = "showcase_requests_total";
pub const SHOWCASE_REQUEST_DURATION_SECONDS: &str = "showcase_request_duration_seconds";
pub const SHOWCASE_ACTIVE_CONNECTIONS: &str = "showcase_active_connections";
pub const SHOWCASE_VALIDATION_REJECTIONS_TOTAL: &str = "showcase_validation_rejections_total";

static DESCRIBED: Lazy<()> = Lazy::new(|| {
    describe_counter!(
        SHOWCASE_REQUESTS_TOTAL,
        Unit::Count,
        "Total number of HTTP requests answered by the router."
    );
    describe_histogram!(
        SHOWCASE_REQUEST_DURATION_SECONDS,
        Unit::Seconds,
        "Latency of HTTP requests answered by the router."
    );
    describe_gauge!(
        SHOWCASE_ACTIVE_CONNECTIONS,
        "Number of currently open client connections."
    );
    describe_counter!(
        SHOWCASE_VALIDATION_REJECTIONS_TOTAL,
        Unit::Count,
        "Form submissions refused by validation (by reason)."
    );
});

/// Register metric descriptions (idempotent).
pub fn init_metrics() -> eyre::Result<()> {
    tracing::info!("Initializing showcase metrics");
    Lazy::force(&DESCRIBED);
    Ok(())
}

pub fn increment_request_total(path: &str, method: &str, status: u16) {
    counter!(
        SHOWCASE_REQUESTS_TOTAL,
        "path" => path.to_string(),
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

pub fn record_request_duration(path: &str, method: &str, duration: std::time::Duration) {
    histogram!(
        SHOWCASE_REQUEST_DURATION_SECONDS,
        "path" => path.to_string(),
        "method" => method.to_string()
    )
    .record(duration.as_secs_f64());
}

pub fn set_active_connections(count: i64) {
    gauge!(SHOWCASE_ACTIVE_CONNECTIONS).set(count as f64);
}

pub fn increment_validation_rejection(reason: &str) {
    counter!(SHOWCASE_VALIDATION_REJECTIONS_TOTAL, "reason" => reason.to_string()).increment(1);
}

/// RAII helper measuring inbound request duration.
pub struct RequestTimer {
    start: Instant,
    path: String,
    method: String,
}

impl RequestTimer {
    pub fn new(path: &str, method: &str) -> Self {
        Self {
            start: Instant::now(),
            path: path.to_string(),
            method: method.to_string(),
        }
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        record_request_duration(&self.path, &self.method, self.start.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_metrics_is_idempotent() {
        assert!(init_metrics().is_ok());
        assert!(init_metrics().is_ok());
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        increment_request_total("/api/v1/hello", "GET", 200);
        increment_validation_rejection("Email is required");
        set_active_connections(3);
        let timer = RequestTimer::new("/api/v1/stats", "GET");
        // Timer will record duration when dropped
        drop(timer);
    }
}
