//! Canonical and alternate (hreflang) URL construction.
//!
//! The rule mirrors the routing policy: the default locale lives at the clean
//! root (`https://site/projects`), every other locale carries its code as the
//! first segment (`https://site/ar/projects`). `x-default` always points at
//! the default locale's URL.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::config::schema::LocaleConfig;
use crate::locale::registry::LocaleRegistry;
use crate::routing::path::RequestPath;

/// hreflang value for the locale-neutral fallback link.
pub const X_DEFAULT: &str = "x-default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

/// Canonical URL plus one alternate per locale and `x-default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageUrls {
    pub canonical: String,
    pub alternates: Vec<AlternateLink>,
}

impl PageUrls {
    pub fn x_default(&self) -> Option<&AlternateLink> {
        self.alternates.iter().find(|link| link.hreflang == X_DEFAULT)
    }
}

/// Visible path of the same content in another locale (language switcher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleLink {
    pub code: String,
    pub native_name: String,
    pub path: String,
}

#[derive(Debug, Error)]
pub enum BaseUrlError {
    #[error(transparent)]
    Parse(#[from] url::ParseError),

    #[error("base URL '{0}' must not carry a query or fragment")]
    HasQueryOrFragment(String),

    #[error("base URL '{0}' must use http or https")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone)]
pub struct CanonicalUrlBuilder {
    base: String,
    /// Path component of the base without a trailing slash; empty at the root.
    base_path: String,
    registry: Arc<LocaleRegistry>,
}

impl CanonicalUrlBuilder {
    /// `base_url` must be an absolute http(s) URL without query or fragment;
    /// a trailing slash is ignored.
    pub fn new(base_url: &str, registry: Arc<LocaleRegistry>) -> Result<Self, BaseUrlError> {
        let parsed = Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BaseUrlError::UnsupportedScheme(base_url.to_string()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(BaseUrlError::HasQueryOrFragment(base_url.to_string()));
        }

        Ok(Self {
            base: parsed.as_str().trim_end_matches('/').to_string(),
            base_path: parsed.path().trim_end_matches('/').to_string(),
            registry,
        })
    }

    /// Same registry, different base (e.g. taken from forwarded headers).
    pub fn with_base(&self, base_url: &str) -> Result<Self, BaseUrlError> {
        Self::new(base_url, Arc::clone(&self.registry))
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Site-relative `path` as seen by clients, i.e. under the base path.
    /// `/projects` becomes `/portfolio/projects` for `https://host/portfolio`.
    pub fn public_path(&self, path: &str) -> String {
        match path {
            "" | "/" if !self.base_path.is_empty() => self.base_path.clone(),
            _ => format!("{}{}", self.base_path, path),
        }
    }

    /// Leading locale of `path`, if any, and the content path with every
    /// leading locale segment removed.
    pub fn split_locale(&self, path: &RequestPath) -> (Option<&LocaleConfig>, RequestPath) {
        let mut locale = None;
        let mut content = path.clone();
        while let Some(found) = content.first_segment().and_then(|code| self.registry.get(code)) {
            locale.get_or_insert(found);
            content = content.without_first_segment();
        }
        (locale, content)
    }

    /// Public path of `content_path` in `locale`. A locale prefix already on
    /// `content_path` is replaced, so the default locale always gets the
    /// clean form.
    pub fn locale_path(&self, content_path: &RequestPath, locale: &LocaleConfig) -> RequestPath {
        let (_, content) = self.split_locale(content_path);
        if self.registry.is_default(&locale.code) {
            content
        } else {
            content.with_prefix(&locale.code)
        }
    }

    /// Absolute URL of `content_path` in `locale`.
    pub fn url_for(&self, content_path: &RequestPath, locale: &LocaleConfig) -> String {
        format!("{}{}", self.base, self.locale_path(content_path, locale))
    }

    /// Absolute URL for a path relative to the site root (no locale logic).
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.base, RequestPath::parse(path))
    }

    pub fn build(&self, content_path: &RequestPath, locale: &LocaleConfig) -> PageUrls {
        let mut alternates: Vec<AlternateLink> = self
            .registry
            .iter()
            .map(|alt| AlternateLink {
                hreflang: alt.code.clone(),
                href: self.url_for(content_path, alt),
            })
            .collect();
        alternates.push(AlternateLink {
            hreflang: X_DEFAULT.to_string(),
            href: self.url_for(content_path, self.registry.default_locale()),
        });

        PageUrls {
            canonical: self.url_for(content_path, locale),
            alternates,
        }
    }

    /// Links to the same content in every locale other than `current`.
    pub fn switch_links(&self, content_path: &RequestPath, current: &LocaleConfig) -> Vec<LocaleLink> {
        self.registry
            .iter()
            .filter(|locale| locale.code != current.code)
            .map(|locale| LocaleLink {
                code: locale.code.clone(),
                native_name: locale.native_name.clone(),
                path: self.locale_path(content_path, locale).to_string(),
            })
            .collect()
    }

    /// Recover the locale and content path from a URL this builder produced.
    ///
    /// Returns `None` for URLs outside the base.
    pub fn parse(&self, url: &str) -> Option<(&LocaleConfig, RequestPath)> {
        let rest = url.strip_prefix(&self.base)?;
        if !(rest.is_empty() || rest.starts_with('/')) {
            return None;
        }

        let (prefix, content) = self.split_locale(&RequestPath::parse(rest));
        Some((prefix.unwrap_or_else(|| self.registry.default_locale()), content))
    }
}
