//! Security response headers.
//!
//! # Responsibilities
//! - Add `X-Content-Type-Options: nosniff`
//! - Add the configured `Referrer-Policy`
//!
//! # Design Decisions
//! - Headers set by a handler are never overwritten
//! - An unusable referrer policy value is logged and skipped, not fatal

use axum::http::{header, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::schema::SecurityConfig;

/// Wrap `router` with the security headers enabled in `config`.
pub fn apply(router: Router, config: &SecurityConfig) -> Router {
    if !config.enable_headers {
        return router;
    }

    let router = router.layer(SetResponseHeaderLayer::if_not_present(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    ));

    match HeaderValue::from_str(&config.referrer_policy) {
        Ok(policy) => router.layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            policy,
        )),
        Err(_) => {
            tracing::warn!(
                referrer_policy = %config.referrer_policy,
                "Invalid Referrer-Policy value, header disabled"
            );
            router
        }
    }
}
