//! Content and metadata handlers.
//!
//! Handlers run after [`locale_routing`](crate::http::middleware::locale_routing),
//! so content requests always arrive with a locale-prefixed path.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Uri},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::config::schema::TextDirection;
use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::locale::dictionary::Dictionary;
use crate::routing::path::RequestPath;
use crate::seo::{render_manifest, render_robots, AlternateLink, LocaleLink, SitemapEmitter};

const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";
const MANIFEST_CONTENT_TYPE: &str = "application/manifest+json";

#[derive(Debug, Serialize)]
pub struct LocaleView<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub native_name: &'a str,
    pub direction: TextDirection,
    pub og_locale: Option<&'a str>,
}

/// JSON view of one localized page.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub locale: LocaleView<'a>,
    pub content_path: String,
    pub canonical: String,
    pub alternates: Vec<AlternateLink>,
    pub switch_links: Vec<LocaleLink>,
    /// Locale whose dictionary was served; differs from `locale.code` on fallback.
    pub dictionary_locale: &'a str,
    pub dictionary: &'a Dictionary,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub locales: Vec<String>,
    pub default_locale: String,
}

pub async fn page_view(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    let path = RequestPath::parse(uri.path());
    let (locale, content_path) = state
        .router
        .split_locale(&path)
        .ok_or_else(|| AppError::NotFound(path.to_string()))?;

    if !state.has_route(&content_path) {
        return Err(AppError::NotFound(path.to_string()));
    }

    let urls = state.url_builder(&headers);
    let page = urls.build(&content_path, locale);
    let resolved = state.dictionaries.resolve_entry(&locale.code);

    let view = PageView {
        locale: LocaleView {
            code: &locale.code,
            name: &locale.name,
            native_name: &locale.native_name,
            direction: locale.direction,
            og_locale: locale.og_locale.as_deref(),
        },
        content_path: content_path.to_string(),
        canonical: page.canonical,
        alternates: page.alternates,
        switch_links: urls.switch_links(&content_path, locale),
        dictionary_locale: resolved.served,
        dictionary: resolved.dictionary,
    };

    let mut response = Json(view).into_response();
    if let Ok(lang) = HeaderValue::from_str(&locale.code) {
        response.headers_mut().insert(header::CONTENT_LANGUAGE, lang);
    }
    Ok(response)
}

/// Serves both `/sitemap.xml` and `/sitemap-main.xml`.
pub async fn sitemap(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let urls = state.url_builder(&headers);
    let routes = state.config.effective_routes();
    let xml = SitemapEmitter::new(&urls, &routes, &state.config.sitemap).render(Utc::now());

    (
        [
            (header::CONTENT_TYPE, XML_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-store"),
        ],
        xml,
    )
        .into_response()
}

pub async fn robots(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let urls = state.url_builder(&headers);
    let body = render_robots(&urls.absolute("/sitemap.xml"));
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

pub async fn manifest(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = render_manifest(&state.config.manifest).map_err(|source| AppError::Render {
        what: "manifest",
        source,
    })?;
    Ok(([(header::CONTENT_TYPE, MANIFEST_CONTENT_TYPE)], body).into_response())
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let registry = state.router.registry();
    Json(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        locales: registry.codes().into_iter().map(str::to_string).collect(),
        default_locale: registry.default_locale().code.clone(),
    })
}
