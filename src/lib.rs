//! Locale-aware edge routing for a bilingual portfolio site.
//!
//! Decides per request whether to pass through, 308-redirect or invisibly
//! rewrite to the default locale, and builds the canonical/hreflang URLs and
//! sitemap that follow from that policy.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod locale;
pub mod observability;
pub mod routing;
pub mod security;
pub mod seo;

pub use config::schema::SiteConfig;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
