//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Run locale routing before content routing so rewrites take effect
//! - Wire up middleware (request ID, tracing, timeout, metrics, headers)
//! - Serve on a listener until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::HeaderMap, middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::Layer;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::schema::SiteConfig;
use crate::http::handlers;
use crate::http::middleware::locale_routing;
use crate::http::request::{self, UuidRequestId};
use crate::locale::dictionary::DictionarySet;
use crate::observability::metrics;
use crate::routing::{LocaleRouter, RequestPath};
use crate::security::headers;
use crate::seo::CanonicalUrlBuilder;

/// Application state injected into handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<LocaleRouter>,
    pub dictionaries: Arc<DictionarySet>,
    pub urls: Arc<CanonicalUrlBuilder>,
    /// Locale-agnostic content paths that exist in every locale.
    pub routes: Arc<Vec<RequestPath>>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn has_route(&self, content_path: &RequestPath) -> bool {
        self.routes.contains(content_path)
    }

    /// URL builder for this request: forwarded host/proto when trusted,
    /// the configured base URL otherwise.
    pub fn url_builder(&self, headers: &HeaderMap) -> CanonicalUrlBuilder {
        if self.config.site.trust_forwarded_headers {
            if let Some(base) = request::forwarded_base_url(headers) {
                match self.urls.with_base(&base) {
                    Ok(builder) => return builder,
                    Err(e) => tracing::debug!(base = %base, error = %e, "Ignoring forwarded base URL"),
                }
            }
        }
        CanonicalUrlBuilder::clone(&self.urls)
    }
}

/// HTTP server for the locale edge.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(state: AppState) -> Self {
        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(state: AppState) -> Router {
        let timeout = Duration::from_secs(state.config.timeouts.request_secs);
        let security = state.config.security.clone();

        let content = Router::new()
            .route("/sitemap.xml", get(handlers::sitemap))
            .route("/sitemap-main.xml", get(handlers::sitemap))
            .route("/robots.txt", get(handlers::robots))
            .route("/manifest.webmanifest", get(handlers::manifest))
            .route("/api/health", get(handlers::health))
            .fallback(handlers::page_view)
            .with_state(state.clone());

        // Layers on `content` would only run after its routing, too late
        // for a rewrite. Wrapping it as a service runs the decision first.
        let routed = middleware::from_fn_with_state(state, locale_routing).layer(content);

        let app = Router::new()
            .fallback_service(routed)
            .layer(middleware::from_fn(metrics::track_requests))
            .layer(TimeoutLayer::new(timeout))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(request::make_span::<Body>))
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId));

        headers::apply(app, &security)
    }

    /// The assembled router, for serving or in-process testing.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
