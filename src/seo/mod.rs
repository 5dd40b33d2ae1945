//! Search-engine facing output: canonical/alternate URLs, the sitemap,
//! robots.txt and the web app manifest.

pub mod canonical;
pub mod metadata;
pub mod sitemap;

pub use canonical::{
    AlternateLink, BaseUrlError, CanonicalUrlBuilder, LocaleLink, PageUrls, X_DEFAULT,
};
pub use metadata::{render_manifest, render_robots};
pub use sitemap::{render_xml, SitemapEmitter, SitemapEntry};
