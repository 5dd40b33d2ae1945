//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the locale edge server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Public identity of the site (base URL, display name).
    pub site: SiteIdentityConfig,

    /// Supported locales and where their dictionaries live.
    pub i18n: I18nConfig,

    /// Locale-agnostic content routes that exist in every locale.
    pub routes: Vec<String>,

    /// Path classification rules.
    pub classifier: ClassifierConfig,

    /// Sitemap generation settings.
    pub sitemap: SitemapConfig,

    /// Web app manifest contents.
    pub manifest: ManifestConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub security: SecurityConfig,
}

impl SiteConfig {
    /// Route table used when the config file does not list any routes.
    pub fn default_routes() -> Vec<String> {
        vec!["/".to_string(), "/projects".to_string()]
    }

    /// Routes to serve, falling back to [`SiteConfig::default_routes`].
    pub fn effective_routes(&self) -> Vec<String> {
        if self.routes.is_empty() {
            Self::default_routes()
        } else {
            self.routes.clone()
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Public identity of the site.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteIdentityConfig {
    /// Absolute base URL every canonical link is built from.
    pub base_url: String,

    /// Human readable site name.
    pub name: String,

    /// Derive the base URL from `X-Forwarded-Host`/`X-Forwarded-Proto`
    /// in metadata endpoints. Only enable behind a trusted proxy.
    pub trust_forwarded_headers: bool,
}

impl Default for SiteIdentityConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            name: "Portfolio".to_string(),
            trust_forwarded_headers: false,
        }
    }
}

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// A single supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleConfig {
    /// Locale code, also used as the URL segment (e.g., "en", "ar").
    pub code: String,

    /// English name of the language.
    pub name: String,

    /// Name of the language in the language itself.
    pub native_name: String,

    /// Writing direction for rendered pages.
    #[serde(default)]
    pub direction: TextDirection,

    /// OpenGraph locale tag (e.g., "en_US").
    #[serde(default)]
    pub og_locale: Option<String>,
}

/// Internationalization settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Supported locales, in the order they are advertised.
    pub locales: Vec<LocaleConfig>,

    /// Code of the locale served at the unprefixed root.
    pub default_locale: String,

    /// Directory holding one `<code>.json` dictionary per locale.
    pub content_dir: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: vec![
                LocaleConfig {
                    code: "en".to_string(),
                    name: "English".to_string(),
                    native_name: "English".to_string(),
                    direction: TextDirection::Ltr,
                    og_locale: Some("en_US".to_string()),
                },
                LocaleConfig {
                    code: "ar".to_string(),
                    name: "Arabic".to_string(),
                    native_name: "العربية".to_string(),
                    direction: TextDirection::Rtl,
                    og_locale: Some("ar_EG".to_string()),
                },
            ],
            default_locale: "en".to_string(),
            content_dir: "content".to_string(),
        }
    }
}

/// Path classification rules.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Prefixes of API endpoints.
    pub api_prefixes: Vec<String>,

    /// Prefixes reserved by the framework for internal assets.
    pub asset_prefixes: Vec<String>,

    /// Exact paths of verification and metadata files.
    pub reserved_files: Vec<String>,

    /// Verification file patterns as (file name prefix, suffix) pairs,
    /// e.g. `google` + `.html` for `/google1234.html`.
    pub verification_patterns: Vec<VerificationPattern>,
}

/// Matches root-level files by name prefix and suffix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationPattern {
    pub prefix: String,
    pub suffix: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            api_prefixes: vec!["/api".to_string()],
            asset_prefixes: vec!["/_next".to_string(), "/assets".to_string()],
            reserved_files: vec![
                "/robots.txt".to_string(),
                "/sitemap.xml".to_string(),
                "/sitemap-main.xml".to_string(),
                "/manifest.webmanifest".to_string(),
            ],
            verification_patterns: vec![VerificationPattern {
                prefix: "google".to_string(),
                suffix: ".html".to_string(),
            }],
        }
    }
}

/// How often search engines should expect a page to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// Sitemap generation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub change_frequency: ChangeFrequency,

    /// Priority of each locale's home route.
    pub home_priority: f32,

    /// Priority of every other route.
    pub secondary_priority: f32,

    /// Include `xhtml:link` hreflang alternates under each URL.
    pub include_alternates: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            change_frequency: ChangeFrequency::Monthly,
            home_priority: 1.0,
            secondary_priority: 0.8,
            include_alternates: true,
        }
    }
}

/// Web app manifest icon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Installable-app metadata served at `/manifest.webmanifest`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ManifestConfig {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            short_name: "Portfolio".to_string(),
            description: "Personal portfolio".to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            background_color: "#FAF7F0".to_string(),
            theme_color: "#B3261E".to_string(),
            icons: vec![ManifestIcon {
                src: "/logo.png".to_string(),
                sizes: "any".to_string(),
                mime_type: "image/png".to_string(),
            }],
        }
    }
}

/// Timeout configuration for request handling.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Structured JSON for production, pretty for development.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
    /// Value of the `Referrer-Policy` header.
    pub referrer_policy: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            referrer_policy: "strict-origin-when-cross-origin".to_string(),
        }
    }
}
