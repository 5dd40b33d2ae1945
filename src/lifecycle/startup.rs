//! Startup orchestration.
//!
//! # Responsibilities
//! - Build every immutable component from a validated config
//! - Load dictionaries from the content directory
//! - Hand the server one `AppState` with everything shared through `Arc`
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Components build in dependency order: registry, router, URL builder,
//!   route table, dictionaries
//! - A relative `content_dir` is resolved against the working directory

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::SiteConfig;
use crate::config::validation::validate_config;
use crate::config::ConfigError;
use crate::http::server::AppState;
use crate::locale::dictionary::{DictionaryError, DictionarySet};
use crate::locale::registry::{LocaleRegistry, RegistryError};
use crate::routing::{LocaleRouter, RequestPath};
use crate::seo::{BaseUrlError, CanonicalUrlBuilder};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("locale registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] BaseUrlError),
}

/// Routing and URL components, everything except content.
#[derive(Debug)]
pub struct Components {
    pub registry: Arc<LocaleRegistry>,
    pub router: LocaleRouter,
    pub urls: CanonicalUrlBuilder,
    pub routes: Vec<RequestPath>,
}

pub fn build_components(config: &SiteConfig) -> Result<Components, StartupError> {
    validate_config(config).map_err(ConfigError::Validation)?;

    let registry = Arc::new(LocaleRegistry::from_config(&config.i18n)?);
    let router = LocaleRouter::new(Arc::clone(&registry), &config.classifier);
    let urls = CanonicalUrlBuilder::new(&config.site.base_url, Arc::clone(&registry))?;

    let mut routes: Vec<RequestPath> = Vec::new();
    for route in config.effective_routes() {
        let path = RequestPath::parse(&route);
        if !routes.contains(&path) {
            routes.push(path);
        }
    }

    tracing::info!(
        locales = ?registry.codes(),
        default_locale = %registry.default_locale().code,
        routes = routes.len(),
        base_url = %urls.base_url(),
        "Routing components ready"
    );

    Ok(Components {
        registry,
        router,
        urls,
        routes,
    })
}

/// Build the full application state, dictionaries included.
pub fn bootstrap(config: SiteConfig) -> Result<AppState, StartupError> {
    let components = build_components(&config)?;
    let dictionaries =
        DictionarySet::load_dir(Path::new(&config.i18n.content_dir), &components.registry)?;

    for locale in components.registry.iter() {
        if !dictionaries.has_bundle(&locale.code) {
            tracing::warn!(locale = %locale.code, "Locale will be served default content");
        }
    }

    Ok(AppState {
        router: Arc::new(components.router),
        dictionaries: Arc::new(dictionaries),
        urls: Arc::new(components.urls),
        routes: Arc::new(components.routes),
        config: Arc::new(config),
    })
}
