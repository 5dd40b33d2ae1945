//! Path classification and locale detection.
//!
//! Rules are evaluated in order, first match wins:
//!
//! 1. API prefix → `ApiEndpoint`
//! 2. framework asset prefix → `StaticAsset`
//! 3. reserved metadata/verification file → `ReservedFile`
//! 4. `.` in the final segment → `StaticAsset`
//! 5. first segment is a supported locale → `LocaleQualified`
//! 6. anything else → `Unqualified`
//!
//! Classification looks at the path's shape only. Every input has a class.

use std::fmt;
use std::sync::Arc;

use crate::config::schema::{ClassifierConfig, LocaleConfig};
use crate::locale::registry::LocaleRegistry;
use crate::routing::matcher::{
    AnyMatcher, ExactPathMatcher, FileExtensionMatcher, FilePatternMatcher, Matcher,
};
use crate::routing::path::RequestPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteClassification {
    StaticAsset,
    ApiEndpoint,
    ReservedFile,
    LocaleQualified,
    Unqualified,
}

impl RouteClassification {
    /// Classes that bypass locale logic entirely.
    pub fn is_bypass(&self) -> bool {
        matches!(
            self,
            RouteClassification::StaticAsset
                | RouteClassification::ApiEndpoint
                | RouteClassification::ReservedFile
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteClassification::StaticAsset => "static_asset",
            RouteClassification::ApiEndpoint => "api_endpoint",
            RouteClassification::ReservedFile => "reserved_file",
            RouteClassification::LocaleQualified => "locale_qualified",
            RouteClassification::Unqualified => "unqualified",
        }
    }
}

impl fmt::Display for RouteClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether a path is eligible for locale logic.
#[derive(Debug)]
pub struct PathClassifier {
    registry: Arc<LocaleRegistry>,
    api: AnyMatcher,
    assets: AnyMatcher,
    reserved: AnyMatcher,
    file_like: FileExtensionMatcher,
}

impl PathClassifier {
    pub fn new(registry: Arc<LocaleRegistry>, config: &ClassifierConfig) -> Self {
        let mut reserved = AnyMatcher::default();
        for file in &config.reserved_files {
            reserved.push(ExactPathMatcher::new(file));
        }
        for pattern in &config.verification_patterns {
            reserved.push(FilePatternMatcher::from(pattern));
        }

        Self {
            registry,
            api: AnyMatcher::prefixes(&config.api_prefixes),
            assets: AnyMatcher::prefixes(&config.asset_prefixes),
            reserved,
            file_like: FileExtensionMatcher,
        }
    }

    pub fn classify(&self, path: &RequestPath) -> RouteClassification {
        if self.api.matches(path) {
            RouteClassification::ApiEndpoint
        } else if self.assets.matches(path) {
            RouteClassification::StaticAsset
        } else if self.reserved.matches(path) {
            RouteClassification::ReservedFile
        } else if self.file_like.matches(path) {
            RouteClassification::StaticAsset
        } else if path
            .first_segment()
            .is_some_and(|segment| self.registry.contains(segment))
        {
            RouteClassification::LocaleQualified
        } else {
            RouteClassification::Unqualified
        }
    }
}

/// Reads the leading locale segment of a classified path.
#[derive(Debug, Clone)]
pub struct LocaleDetector {
    registry: Arc<LocaleRegistry>,
}

impl LocaleDetector {
    pub fn new(registry: Arc<LocaleRegistry>) -> Self {
        Self { registry }
    }

    /// The matched locale for `LocaleQualified` paths, `None` otherwise.
    pub fn detect(
        &self,
        path: &RequestPath,
        classification: RouteClassification,
    ) -> Option<&LocaleConfig> {
        match classification {
            RouteClassification::LocaleQualified => {
                path.first_segment().and_then(|segment| self.registry.get(segment))
            }
            _ => None,
        }
    }
}
