//! Prometheus metrics for request and page rendering.
//!
//! This module provides metrics for:
//! - HTTP request counts and latency, labelled by matched route
//! - Page renders and render latency
//! - Route lookups that failed and errors caught by the error boundary

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Pages rendered counter metric name.
pub const METRIC_PAGES_RENDERED: &str = "pages_rendered_total";
/// Page render latency metric name.
pub const METRIC_PAGE_RENDER_LATENCY: &str = "page_render_latency_ms";
/// Route-not-found counter metric name.
pub const METRIC_ROUTE_NOT_FOUND: &str = "route_not_found_total";
/// Error boundary counter metric name.
pub const METRIC_ERROR_BOUNDARY: &str = "error_boundary_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_histogram!(
        METRIC_PAGE_RENDER_LATENCY,
        "Page render latency in milliseconds"
    );

    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_counter!(METRIC_PAGES_RENDERED, "Total number of pages rendered");
    describe_counter!(
        METRIC_ROUTE_NOT_FOUND,
        "Total number of route lookups that found no node"
    );
    describe_counter!(
        METRIC_ERROR_BOUNDARY,
        "Total number of page errors rendered by the error boundary"
    );

    debug!("Metrics initialized");
}

/// Record a served HTTP request.
pub fn record_http_request(start: Instant, route: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "route" => route.to_string()).record(latency_ms);
    counter!(
        METRIC_HTTP_REQUESTS,
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Increment pages rendered counter.
pub fn inc_pages_rendered(page: &'static str) {
    counter!(METRIC_PAGES_RENDERED, "page" => page).increment(1);
}

/// Increment route-not-found counter.
pub fn inc_route_not_found() {
    counter!(METRIC_ROUTE_NOT_FOUND).increment(1);
}

/// Increment error boundary counter.
pub fn inc_error_boundary() {
    counter!(METRIC_ERROR_BOUNDARY).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
    label: Option<&'static str>,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
            label: None,
        }
    }

    /// Attach a `page` label to the recorded sample.
    pub fn labelled(mut self, page: &'static str) -> Self {
        self.label = Some(page);
        self
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        let latency_ms = self.elapsed_ms();
        match self.label {
            Some(page) => histogram!(self.metric_name, "page" => page).record(latency_ms),
            None => histogram!(self.metric_name).record(latency_ms),
        }
    }
}

/// Create a latency timer for rendering the named page.
pub fn timer_page_render(page: &'static str) -> LatencyTimer {
    LatencyTimer::new(METRIC_PAGE_RENDER_LATENCY).labelled(page)
}
