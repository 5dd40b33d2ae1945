//! Sitemap generation.
//!
//! One entry per (locale, route) pair, locales in registry order as the outer
//! loop and routes in configured order as the inner loop. The home route gets
//! the home priority in every locale; everything else gets the secondary one.

use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::schema::{ChangeFrequency, SitemapConfig};
use crate::routing::path::RequestPath;
use crate::seo::canonical::{AlternateLink, CanonicalUrlBuilder};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    pub alternates: Vec<AlternateLink>,
}

pub struct SitemapEmitter<'a> {
    urls: &'a CanonicalUrlBuilder,
    routes: Vec<RequestPath>,
    config: &'a SitemapConfig,
}

impl<'a> SitemapEmitter<'a> {
    /// Routes are normalized and deduplicated, first occurrence wins.
    pub fn new(urls: &'a CanonicalUrlBuilder, routes: &[String], config: &'a SitemapConfig) -> Self {
        let mut normalized: Vec<RequestPath> = Vec::with_capacity(routes.len());
        for route in routes {
            let path = RequestPath::parse(route);
            if !normalized.contains(&path) {
                normalized.push(path);
            }
        }

        Self {
            urls,
            routes: normalized,
            config,
        }
    }

    pub fn entries(&self, last_modified: DateTime<Utc>) -> Vec<SitemapEntry> {
        let registry = self.urls.registry();
        let mut entries = Vec::with_capacity(registry.len() * self.routes.len());

        for locale in registry.iter() {
            for route in &self.routes {
                let page = self.urls.build(route, locale);
                let priority = if route.is_root() {
                    self.config.home_priority
                } else {
                    self.config.secondary_priority
                };
                entries.push(SitemapEntry {
                    url: page.canonical,
                    last_modified,
                    change_frequency: self.config.change_frequency,
                    priority,
                    alternates: page.alternates,
                });
            }
        }

        entries
    }

    /// Render a full `<urlset>` document for `last_modified`.
    pub fn render(&self, last_modified: DateTime<Utc>) -> String {
        render_xml(&self.entries(last_modified), self.config.include_alternates)
    }
}

pub fn render_xml(entries: &[SitemapEntry], include_alternates: bool) -> String {
    let mut xml = String::with_capacity(256 + entries.len() * 384);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    if include_alternates {
        let _ = writeln!(xml, "<urlset xmlns=\"{SITEMAP_NS}\" xmlns:xhtml=\"{XHTML_NS}\">");
    } else {
        let _ = writeln!(xml, "<urlset xmlns=\"{SITEMAP_NS}\">");
    }

    for entry in entries {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.url));
        let _ = writeln!(
            xml,
            "    <lastmod>{}</lastmod>",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        let _ = writeln!(
            xml,
            "    <changefreq>{}</changefreq>",
            entry.change_frequency.as_str()
        );
        let _ = writeln!(xml, "    <priority>{}</priority>", format_priority(entry.priority));
        if include_alternates {
            for alt in &entry.alternates {
                let _ = writeln!(
                    xml,
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>",
                    escape_xml(&alt.hreflang),
                    escape_xml(&alt.href)
                );
            }
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// `1.0`, `0.8`, `0.75`: at least one decimal, no float noise.
fn format_priority(priority: f32) -> String {
    if priority.fract() == 0.0 {
        format!("{priority:.1}")
    } else {
        format!("{priority}")
    }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::TimeZone;

    use crate::config::schema::I18nConfig;
    use crate::locale::registry::LocaleRegistry;

    fn builder() -> CanonicalUrlBuilder {
        let registry =
            Arc::new(LocaleRegistry::from_config(&I18nConfig::default()).expect("valid registry"));
        CanonicalUrlBuilder::new("https://site", registry).expect("valid base")
    }

    fn routes() -> Vec<String> {
        vec!["/".to_string(), "/projects".to_string()]
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).single().expect("valid date")
    }

    #[test]
    fn test_entries_cover_locales_times_routes() {
        let urls = builder();
        let config = SitemapConfig::default();
        let entries = SitemapEmitter::new(&urls, &routes(), &config).entries(timestamp());

        let pairs: Vec<(&str, f32)> = entries
            .iter()
            .map(|e| (e.url.as_str(), e.priority))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("https://site/", 1.0),
                ("https://site/projects", 0.8),
                ("https://site/ar", 1.0),
                ("https://site/ar/projects", 0.8),
            ]
        );
        for entry in &entries {
            assert_eq!(entry.change_frequency, ChangeFrequency::Monthly);
            assert_eq!(entry.last_modified, timestamp());
        }
    }

    #[test]
    fn test_duplicate_routes_collapse() {
        let urls = builder();
        let config = SitemapConfig::default();
        let routes: Vec<String> = ["/", "", "/projects/", "/projects"]
            .iter()
            .map(|r| r.to_string())
            .collect();
        let entries = SitemapEmitter::new(&urls, &routes, &config).entries(timestamp());
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn test_render_xml() {
        let urls = builder();
        let config = SitemapConfig::default();
        let xml = SitemapEmitter::new(&urls, &routes(), &config).render(timestamp());

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("xmlns:xhtml=\"http://www.w3.org/1999/xhtml\""));
        assert!(xml.contains("<loc>https://site/ar/projects</loc>"));
        assert!(xml.contains("<lastmod>2026-10-19T08:30:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.contains(
            "<xhtml:link rel=\"alternate\" hreflang=\"x-default\" href=\"https://site/projects\"/>"
        ));
        assert_eq!(xml.matches("<url>").count(), 4);
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_render_without_alternates() {
        let urls = builder();
        let config = SitemapConfig {
            include_alternates: false,
            ..SitemapConfig::default()
        };
        let xml = SitemapEmitter::new(&urls, &routes(), &config).render(timestamp());
        assert!(!xml.contains("xhtml"));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_xml("https://site/?a=1&b=<2>"), "https://site/?a=1&amp;b=&lt;2&gt;");
        assert_eq!(escape_xml("it's \"q\""), "it&apos;s &quot;q&quot;");
    }

    #[test]
    fn test_priority_formatting() {
        assert_eq!(format_priority(1.0), "1.0");
        assert_eq!(format_priority(0.8), "0.8");
        assert_eq!(format_priority(0.75), "0.75");
        assert_eq!(format_priority(0.0), "0.0");
    }
}
