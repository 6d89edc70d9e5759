//! Metrics collection and exposition.
//!
//! # Metrics
//! - `usuarios_requests_total` (counter): requests by method, status, route
//! - `usuarios_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Route label is the matched pattern, never the raw path (bounded
//!   cardinality); `none` for the fallback
//! - Exporter failure is logged, not fatal

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Prometheus exporter");
        }
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
        ("route", route.to_string()),
    ];
    counter!("usuarios_requests_total", &labels).increment(1);
    histogram!("usuarios_request_duration_seconds", &labels).record(start.elapsed().as_secs_f64());
}

/// Middleware that times each request from entry to response and records it
/// under the matched route pattern.
///
/// Layered over the whole router, fallback included: the dispatcher inserts
/// `MatchedPath` before route middleware runs, so matched requests carry
/// their pattern and fallback requests record as `none`.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "none".to_string());

    let response = next.run(request).await;

    record_request(&method, response.status().as_u16(), &route, start);
    response
}
