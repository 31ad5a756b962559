//! Prometheus metrics for the studio API
//!
//! Exposes key operational metrics for monitoring and alerting:
//! - Request rates and latencies
//! - Gemini call rates, latencies, and failures
//! - Records created per type
//!
//! NOTE: We intentionally avoid user_id in metric labels to prevent
//! high-cardinality explosion that can crash Prometheus.

use lazy_static::lazy_static;
use prometheus::{
    Histogram, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry,
};

lazy_static! {
    /// Global metrics registry
    pub static ref METRICS_REGISTRY: Registry = Registry::new();

    // ============================================================================
    // Request Metrics
    // ============================================================================

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "kala_http_request_duration_seconds",
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 15.0, 30.0]),
        &["method", "endpoint", "status"]
    ).unwrap();

    /// Total HTTP requests
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("kala_http_requests_total", "Total HTTP requests"),
        &["method", "endpoint", "status"]
    ).unwrap();

    // ============================================================================
    // Gemini Call Metrics
    // ============================================================================

    /// Gemini generateContent calls by operation
    pub static ref GEMINI_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("kala_gemini_requests_total", "Total Gemini generateContent calls"),
        &["operation", "result"]  // operation: "story", "image", "social", ...
    ).unwrap();

    /// Gemini call duration (generation is slow, buckets reach a minute)
    pub static ref GEMINI_REQUEST_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "kala_gemini_request_duration_seconds",
            "Gemini generateContent call duration"
        )
        .buckets(vec![0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 20.0, 30.0, 60.0]),
        &["operation"]
    ).unwrap();

    // ============================================================================
    // Record Metrics
    // ============================================================================

    /// Records created by type
    pub static ref RECORDS_CREATED_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("kala_records_created_total", "Total records created"),
        &["record"]  // record: "story", "image", "social", ...
    ).unwrap();

    /// Uploaded image size in bytes
    pub static ref UPLOAD_BYTES: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "kala_upload_bytes",
            "Size of uploaded images in bytes"
        )
        .buckets(vec![
            1_024.0, 10_240.0, 102_400.0, 512_000.0,
            1_048_576.0, 5_242_880.0, 10_485_760.0,
        ])
    ).unwrap();

    // ============================================================================
    // Error Metrics
    // ============================================================================

    /// API errors by code
    pub static ref ERRORS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("kala_errors_total", "Total API errors by code"),
        &["code"]
    ).unwrap();
}

/// Register all metrics with the global registry
pub fn register_metrics() -> Result<(), prometheus::Error> {
    // Request metrics
    METRICS_REGISTRY.register(Box::new(HTTP_REQUEST_DURATION.clone()))?;
    METRICS_REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()))?;

    // Gemini call metrics
    METRICS_REGISTRY.register(Box::new(GEMINI_REQUESTS_TOTAL.clone()))?;
    METRICS_REGISTRY.register(Box::new(GEMINI_REQUEST_DURATION.clone()))?;

    // Record metrics
    METRICS_REGISTRY.register(Box::new(RECORDS_CREATED_TOTAL.clone()))?;
    METRICS_REGISTRY.register(Box::new(UPLOAD_BYTES.clone()))?;

    // Error metrics
    METRICS_REGISTRY.register(Box::new(ERRORS_TOTAL.clone()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_metrics_once() {
        // Registering twice must fail, never panic
        let first = register_metrics();
        let second = register_metrics();
        assert!(first.is_ok() || second.is_err());
    }

    #[test]
    fn test_counters_accept_labels() {
        GEMINI_REQUESTS_TOTAL
            .with_label_values(&["story", "success"])
            .inc();
        RECORDS_CREATED_TOTAL.with_label_values(&["story"]).inc();
        ERRORS_TOTAL.with_label_values(&["VALIDATION_ERROR"]).inc();
    }
}
