//! Small site metadata documents: the web app manifest and robots.txt.

use crate::config::schema::ManifestConfig;

/// JSON body for `/manifest.webmanifest`.
pub fn render_manifest(config: &ManifestConfig) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config)
}

/// robots.txt allowing every crawler and pointing at the sitemap.
pub fn render_robots(sitemap_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {sitemap_url}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_fields() {
        let body = render_manifest(&ManifestConfig::default()).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&body).expect("valid json");
        assert_eq!(value["start_url"], "/");
        assert_eq!(value["display"], "standalone");
        assert_eq!(value["theme_color"], "#B3261E");
        assert_eq!(value["icons"][0]["type"], "image/png");
        assert_eq!(value["icons"][0]["src"], "/logo.png");
    }

    #[test]
    fn test_robots() {
        let robots = render_robots("https://site/sitemap.xml");
        assert!(robots.starts_with("User-agent: *\n"));
        assert!(robots.contains("Sitemap: https://site/sitemap.xml"));
    }
}
