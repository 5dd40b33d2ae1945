//! Routing decision engine.
//!
//! # Responsibilities
//! - Combine classifier and detector output into one routing action
//! - Keep the default locale at the clean, unprefixed root
//! - Permanently redirect explicit default-locale prefixes to the clean form
//! - Internally rewrite unprefixed content paths to the default locale
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Total: every input string yields exactly one action, never an error
//! - Redirect (visible) and rewrite (invisible) are distinct outcomes
//!
//! | Classification                | Detected locale | Action                    |
//! |-------------------------------|-----------------|---------------------------|
//! | asset / api / reserved file   | any             | pass through              |
//! | locale qualified              | default         | 308 to the stripped path  |
//! | locale qualified              | other           | pass through              |
//! | unqualified                   | any             | rewrite to `/<default>…`  |

use std::sync::Arc;

use axum::http::StatusCode;

use crate::config::schema::{ClassifierConfig, LocaleConfig};
use crate::locale::registry::LocaleRegistry;
use crate::routing::classifier::{LocaleDetector, PathClassifier, RouteClassification};
use crate::routing::path::RequestPath;

/// What the edge does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingAction {
    /// Serve the request as-is.
    PassThrough,
    /// Tell the client to re-request `location`.
    Redirect { location: String, status: StatusCode },
    /// Serve `path` instead, without the client noticing.
    InternalRewrite { path: String },
}

impl RoutingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingAction::PassThrough => "pass_through",
            RoutingAction::Redirect { .. } => "redirect",
            RoutingAction::InternalRewrite { .. } => "rewrite",
        }
    }
}

/// Full outcome for one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    /// Normalized request path.
    pub path: RequestPath,
    pub classification: RouteClassification,
    /// Locale spelled out in the path, if any.
    pub detected_locale: Option<String>,
    /// Locale whose content will be served; `None` for bypassed paths.
    pub served_locale: Option<String>,
    pub action: RoutingAction,
}

#[derive(Debug, Clone, Copy)]
enum RoutingState<'a> {
    NeedsClassification,
    Bypass,
    HasLocale(&'a LocaleConfig),
    NeedsDefault,
}

/// Maps request paths to routing actions.
#[derive(Debug)]
pub struct LocaleRouter {
    registry: Arc<LocaleRegistry>,
    classifier: PathClassifier,
    detector: LocaleDetector,
}

impl LocaleRouter {
    pub fn new(registry: Arc<LocaleRegistry>, config: &ClassifierConfig) -> Self {
        Self {
            classifier: PathClassifier::new(Arc::clone(&registry), config),
            detector: LocaleDetector::new(Arc::clone(&registry)),
            registry,
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Decide what to do with a raw request path.
    pub fn decide(&self, raw_path: &str) -> RoutingDecision {
        let path = RequestPath::parse(raw_path);
        let classification = self.classifier.classify(&path);
        let state = self.advance(RoutingState::NeedsClassification, &path, classification);

        let default = self.registry.default_locale();
        let (action, detected, served) = match state {
            RoutingState::Bypass => (RoutingAction::PassThrough, None, None),
            RoutingState::HasLocale(locale) if locale.code == default.code => (
                RoutingAction::Redirect {
                    location: path.without_first_segment().to_string(),
                    status: StatusCode::PERMANENT_REDIRECT,
                },
                Some(locale.code.clone()),
                Some(locale.code.clone()),
            ),
            RoutingState::HasLocale(locale) => (
                RoutingAction::PassThrough,
                Some(locale.code.clone()),
                Some(locale.code.clone()),
            ),
            RoutingState::NeedsDefault | RoutingState::NeedsClassification => (
                RoutingAction::InternalRewrite {
                    path: self.rewrite_target(&path).to_string(),
                },
                None,
                Some(default.code.clone()),
            ),
        };

        RoutingDecision {
            path,
            classification,
            detected_locale: detected,
            served_locale: served,
            action,
        }
    }

    fn advance<'a>(
        &'a self,
        state: RoutingState<'a>,
        path: &RequestPath,
        classification: RouteClassification,
    ) -> RoutingState<'a> {
        match state {
            RoutingState::NeedsClassification if classification.is_bypass() => RoutingState::Bypass,
            RoutingState::NeedsClassification => {
                match self.detector.detect(path, classification) {
                    Some(locale) => RoutingState::HasLocale(locale),
                    None => RoutingState::NeedsDefault,
                }
            }
            settled => settled,
        }
    }

    /// Internal path serving `path` in the default locale. Idempotent.
    pub fn rewrite_target(&self, path: &RequestPath) -> RequestPath {
        path.with_prefix(&self.registry.default_locale().code)
    }

    /// Split an internal, locale-prefixed path into its locale and the
    /// locale-agnostic content path.
    pub fn split_locale(&self, path: &RequestPath) -> Option<(&LocaleConfig, RequestPath)> {
        let locale = path.first_segment().and_then(|code| self.registry.get(code))?;
        Some((locale, path.without_first_segment()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::I18nConfig;

    fn router() -> LocaleRouter {
        let registry =
            Arc::new(LocaleRegistry::from_config(&I18nConfig::default()).expect("valid registry"));
        LocaleRouter::new(registry, &ClassifierConfig::default())
    }

    fn rewrite(path: &str) -> RoutingAction {
        RoutingAction::InternalRewrite {
            path: path.to_string(),
        }
    }

    fn redirect(location: &str) -> RoutingAction {
        RoutingAction::Redirect {
            location: location.to_string(),
            status: StatusCode::PERMANENT_REDIRECT,
        }
    }

    #[test]
    fn test_root_rewrites_to_default() {
        let decision = router().decide("/");
        assert_eq!(decision.classification, RouteClassification::Unqualified);
        assert_eq!(decision.action, rewrite("/en"));
        assert_eq!(decision.detected_locale, None);
        assert_eq!(decision.served_locale.as_deref(), Some("en"));
    }

    #[test]
    fn test_secondary_locale_passes_through() {
        let decision = router().decide("/ar/projects");
        assert_eq!(decision.classification, RouteClassification::LocaleQualified);
        assert_eq!(decision.detected_locale.as_deref(), Some("ar"));
        assert_eq!(decision.action, RoutingAction::PassThrough);
    }

    #[test]
    fn test_explicit_default_prefix_redirects() {
        assert_eq!(router().decide("/en").action, redirect("/"));
        assert_eq!(router().decide("/en/").action, redirect("/"));
        assert_eq!(router().decide("/en/projects").action, redirect("/projects"));
    }

    #[test]
    fn test_redirect_location_never_starts_with_backslash() {
        assert_eq!(router().decide("/en/\\evil").action, redirect("/evil"));
        assert_eq!(router().decide("/en\\\\evil.example").action, redirect("/evil.example"));
    }

    #[test]
    fn test_default_prefix_match_is_whole_segment() {
        assert_eq!(router().decide("/english").action, rewrite("/en/english"));
        assert_eq!(router().decide("/enroll/now").action, rewrite("/en/enroll/now"));
    }

    #[test]
    fn test_assets_pass_through() {
        let decision = router().decide("/favicon.ico");
        assert_eq!(decision.classification, RouteClassification::StaticAsset);
        assert_eq!(decision.action, RoutingAction::PassThrough);
        assert_eq!(decision.served_locale, None);

        assert_eq!(router().decide("/en/logo.png").action, RoutingAction::PassThrough);
        assert_eq!(router().decide("/api/health").action, RoutingAction::PassThrough);
        assert_eq!(router().decide("/robots.txt").action, RoutingAction::PassThrough);
    }

    #[test]
    fn test_unknown_locale_is_content() {
        let decision = router().decide("/fr");
        assert_eq!(decision.classification, RouteClassification::Unqualified);
        assert_eq!(decision.action, rewrite("/en/fr"));
    }

    #[test]
    fn test_query_is_not_part_of_the_decision() {
        assert_eq!(router().decide("/en?ref=home").action, redirect("/"));
        assert_eq!(router().decide("/projects?x=1").action, rewrite("/en/projects"));
    }

    #[test]
    fn test_rewrite_target_is_idempotent() {
        let router = router();
        let once = router.rewrite_target(&RequestPath::parse("/projects"));
        let twice = router.rewrite_target(&once);
        assert_eq!(once.as_str(), "/en/projects");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_split_locale() {
        let router = router();
        let (locale, content) = router
            .split_locale(&RequestPath::parse("/ar/projects"))
            .expect("locale prefix");
        assert_eq!(locale.code, "ar");
        assert_eq!(content.as_str(), "/projects");

        let (locale, content) = router
            .split_locale(&RequestPath::parse("/en"))
            .expect("locale prefix");
        assert_eq!(locale.code, "en");
        assert!(content.is_root());

        assert!(router.split_locale(&RequestPath::parse("/fr/x")).is_none());
    }
}
