//! Request identification and request-derived data.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every request
//! - Open the per-request tracing span carrying that ID
//! - Derive the public base URL from forwarded headers when trusted
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - An incoming `x-request-id` is kept, not replaced
//! - Forwarded headers are ignored unless explicitly trusted

use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
pub const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");
pub const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Request ID of `request`, or `"unknown"` before the ID layer ran.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Span for `TraceLayer::make_span_with`.
pub fn make_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
    )
}

/// Public base URL from `X-Forwarded-Proto` / `X-Forwarded-Host`.
///
/// Only the first value of a comma separated list is used. Returns `None`
/// when the host is missing or does not look like a bare authority; a path,
/// userinfo, query or fragment would leak into every canonical URL.
pub fn forwarded_base_url(headers: &HeaderMap) -> Option<String> {
    let host = first_value(headers, &X_FORWARDED_HOST)?;
    if host.is_empty() || host.contains(['/', '\\', '@', ' ', '?', '#']) {
        return None;
    }

    let proto = match first_value(headers, &X_FORWARDED_PROTO) {
        Some(p) if p.eq_ignore_ascii_case("http") => "http",
        _ => "https",
    };

    Some(format!("{proto}://{host}"))
}

fn first_value<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
}
