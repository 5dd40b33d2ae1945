//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): responses by method and status
//! - `http_request_duration_seconds` (histogram): latency distribution
//! - `locale_routing_decisions_total` (counter): by classification and action
//! - `locale_dictionary_fallbacks_total` (counter): by requested locale
//!
//! Recording is a no-op until a recorder is installed, so unit tests and the
//! CLI can call these freely.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("http_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_routing_decision(classification: &'static str, action: &'static str) {
    counter!(
        "locale_routing_decisions_total",
        "classification" => classification,
        "action" => action
    )
    .increment(1);
}

pub fn record_dictionary_fallback(requested: &str) {
    counter!("locale_dictionary_fallbacks_total", "requested" => requested.to_string())
        .increment(1);
}

/// Middleware recording count and latency of every response.
pub async fn track_requests(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let response = next.run(req).await;
    record_request(&method, response.status().as_u16(), start);
    response
}
