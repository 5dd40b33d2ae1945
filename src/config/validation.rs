//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (default locale is a supported locale)
//! - Validate value ranges (priorities, timeouts)
//! - Detect routes that would be ambiguous with locale prefixes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::SiteConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("site.base_url {0:?} is not an absolute http(s) URL")]
    InvalidBaseUrl(String),

    #[error("site.base_url {0:?} must not carry a query or fragment")]
    BaseUrlHasQuery(String),

    #[error("i18n.locales must list at least one locale")]
    NoLocales,

    #[error("locale code {0:?} is listed more than once")]
    DuplicateLocale(String),

    #[error("locale code {0:?} must be a single non-empty path segment without dots")]
    InvalidLocaleCode(String),

    #[error("default locale {0:?} is not among i18n.locales")]
    UnknownDefaultLocale(String),

    #[error("route {0:?} must be empty or start with '/'")]
    InvalidRoute(String),

    #[error("route {route:?} starts with locale segment {locale:?}")]
    RouteShadowsLocale { route: String, locale: String },

    #[error("{field} prefix {value:?} must start with '/'")]
    InvalidPrefix { field: &'static str, value: String },

    #[error("sitemap.{field} must be within 0.0..=1.0, got {value}")]
    PriorityOutOfRange { field: &'static str, value: f32 },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a parsed configuration, collecting every problem.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_base_url(&config.site.base_url, &mut errors);
    let codes = validate_locales(config, &mut errors);
    validate_routes(&config.effective_routes(), &codes, &mut errors);

    for (field, prefixes) in [
        ("classifier.api_prefixes", &config.classifier.api_prefixes),
        ("classifier.asset_prefixes", &config.classifier.asset_prefixes),
        ("classifier.reserved_files", &config.classifier.reserved_files),
    ] {
        for value in prefixes {
            if !value.starts_with('/') {
                errors.push(ValidationError::InvalidPrefix {
                    field,
                    value: value.clone(),
                });
            }
        }
    }

    for (field, value) in [
        ("home_priority", config.sitemap.home_priority),
        ("secondary_priority", config.sitemap.secondary_priority),
    ] {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ValidationError::PriorityOutOfRange { field, value });
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_base_url(raw: &str, errors: &mut Vec<ValidationError>) {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            if url.query().is_some() || url.fragment().is_some() {
                errors.push(ValidationError::BaseUrlHasQuery(raw.to_string()));
            }
        }
        _ => errors.push(ValidationError::InvalidBaseUrl(raw.to_string())),
    }
}

fn validate_locales<'a>(
    config: &'a SiteConfig,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let locales = &config.i18n.locales;
    if locales.is_empty() {
        errors.push(ValidationError::NoLocales);
    }

    let mut seen = HashSet::new();
    for locale in locales {
        let code = locale.code.as_str();
        if code.is_empty() || code.contains('/') || code.contains('.') || code.contains('?') {
            errors.push(ValidationError::InvalidLocaleCode(code.to_string()));
        }
        if !seen.insert(code) {
            errors.push(ValidationError::DuplicateLocale(code.to_string()));
        }
    }

    if !locales.is_empty() && !seen.contains(config.i18n.default_locale.as_str()) {
        errors.push(ValidationError::UnknownDefaultLocale(
            config.i18n.default_locale.clone(),
        ));
    }

    seen
}

fn validate_routes(routes: &[String], codes: &HashSet<&str>, errors: &mut Vec<ValidationError>) {
    for route in routes {
        if route.is_empty() {
            continue;
        }
        if !route.starts_with('/') {
            errors.push(ValidationError::InvalidRoute(route.clone()));
            continue;
        }
        if let Some(first) = route.split('/').find(|s| !s.is_empty()) {
            if codes.contains(first) {
                errors.push(ValidationError::RouteShadowsLocale {
                    route: route.clone(),
                    locale: first.to_string(),
                });
            }
        }
    }
}
