//! Prometheus metrics for the collection cache and the upstream provider.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Duration;

/// Metric names for the retrieval path.
pub mod names {
    /// Cached retrievals served from the store.
    pub const CACHE_HITS_TOTAL: &str = "photon_cache_hits_total";
    /// Cached retrievals that fell through to the upstream.
    pub const CACHE_MISSES_TOTAL: &str = "photon_cache_misses_total";
    /// Write-backs that failed after a successful fetch.
    pub const CACHE_WRITE_FAILURES_TOTAL: &str = "photon_cache_write_failures_total";
    /// Upstream requests, labelled by outcome.
    pub const UPSTREAM_REQUESTS_TOTAL: &str = "photon_upstream_requests_total";
    /// Upstream round-trip duration in seconds.
    pub const UPSTREAM_DURATION_SECONDS: &str = "photon_upstream_duration_seconds";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CACHE_HITS_TOTAL,
        "Total number of collection reads served from the cache"
    );
    describe_counter!(
        names::CACHE_MISSES_TOTAL,
        "Total number of collection reads that missed the cache"
    );
    describe_counter!(
        names::CACHE_WRITE_FAILURES_TOTAL,
        "Total number of failed cache write-backs"
    );
    describe_counter!(
        names::UPSTREAM_REQUESTS_TOTAL,
        "Total number of upstream collection requests"
    );
    describe_histogram!(
        names::UPSTREAM_DURATION_SECONDS,
        "Upstream collection request duration in seconds"
    );
}

/// Cache metrics recorder.
#[derive(Clone)]
pub struct CacheMetrics;

impl CacheMetrics {
    /// Record a cache hit.
    pub fn hit() {
        counter!(names::CACHE_HITS_TOTAL).increment(1);
    }

    /// Record a cache miss.
    pub fn miss() {
        counter!(names::CACHE_MISSES_TOTAL).increment(1);
    }

    /// Record a failed write-back.
    pub fn write_failed() {
        counter!(names::CACHE_WRITE_FAILURES_TOTAL).increment(1);
    }
}

/// Upstream metrics recorder.
#[derive(Clone)]
pub struct UpstreamMetrics;

impl UpstreamMetrics {
    /// Record one upstream request with its outcome (`success`, `transport` or `decode`).
    pub fn request(outcome: &'static str, duration: Duration) {
        counter!(names::UPSTREAM_REQUESTS_TOTAL, "outcome" => outcome).increment(1);
        histogram!(names::UPSTREAM_DURATION_SECONDS, "outcome" => outcome)
            .record(duration.as_secs_f64());
    }
}
