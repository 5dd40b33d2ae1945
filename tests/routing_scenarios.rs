//! End-to-end routing and canonicalization behaviour, without HTTP.

use axum::http::StatusCode;
use chrono::Utc;
use proptest::prelude::*;

use locale_edge::lifecycle::{build_components, Components};
use locale_edge::routing::{RequestPath, RouteClassification, RoutingAction};
use locale_edge::seo::SitemapEmitter;

mod common;

fn components() -> Components {
    build_components(&common::test_config()).expect("components")
}

#[test]
fn test_root_is_rewritten_and_canonical_is_clean() {
    let c = components();
    let decision = c.router.decide("/");
    assert_eq!(decision.classification, RouteClassification::Unqualified);
    assert_eq!(
        decision.action,
        RoutingAction::InternalRewrite {
            path: "/en".to_string()
        }
    );

    let en = c.registry.get("en").unwrap();
    assert_eq!(c.urls.build(&RequestPath::root(), en).canonical, "https://site/");
}

#[test]
fn test_secondary_locale_passes_through() {
    let c = components();
    let decision = c.router.decide("/ar/projects");
    assert_eq!(decision.classification, RouteClassification::LocaleQualified);
    assert_eq!(decision.detected_locale.as_deref(), Some("ar"));
    assert_eq!(decision.action, RoutingAction::PassThrough);

    let ar = c.registry.get("ar").unwrap();
    let page = c.urls.build(&RequestPath::parse("/projects"), ar);
    assert_eq!(page.canonical, "https://site/ar/projects");
}

#[test]
fn test_default_prefix_redirects_permanently() {
    let decision = components().router.decide("/en");
    assert_eq!(
        decision.action,
        RoutingAction::Redirect {
            location: "/".to_string(),
            status: StatusCode::PERMANENT_REDIRECT,
        }
    );
}

#[test]
fn test_static_asset_passes_through() {
    let decision = components().router.decide("/favicon.ico");
    assert_eq!(decision.classification, RouteClassification::StaticAsset);
    assert_eq!(decision.action, RoutingAction::PassThrough);
}

#[test]
fn test_unknown_locale_is_treated_as_content() {
    let decision = components().router.decide("/fr");
    assert_eq!(decision.classification, RouteClassification::Unqualified);
    assert_eq!(
        decision.action,
        RoutingAction::InternalRewrite {
            path: "/en/fr".to_string()
        }
    );

    let state = common::test_state();
    assert!(std::ptr::eq(
        state.dictionaries.resolve("fr"),
        state.dictionaries.default_dictionary()
    ));
}

#[test]
fn test_sitemap_lists_every_locale_route_pair() {
    let mut config = common::test_config();
    config.routes = vec!["".to_string(), "/projects".to_string()];
    let c = build_components(&config).expect("components");

    let routes = config.effective_routes();
    let entries = SitemapEmitter::new(&c.urls, &routes, &config.sitemap).entries(Utc::now());
    let got: Vec<(&str, f32)> = entries
        .iter()
        .map(|e| (e.url.as_str(), e.priority))
        .collect();
    assert_eq!(
        got,
        vec![
            ("https://site/", 1.0),
            ("https://site/projects", 0.8),
            ("https://site/ar", 1.0),
            ("https://site/ar/projects", 0.8),
        ]
    );
}

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("en".to_string()),
        Just("ar".to_string()),
        Just("fr".to_string()),
        Just("api".to_string()),
        Just("_next".to_string()),
        Just("robots.txt".to_string()),
        Just("".to_string()),
        "[a-z0-9._-]{1,8}",
    ]
}

fn raw_path() -> impl Strategy<Value = String> {
    (prop::collection::vec(segment(), 0..5), any::<bool>(), any::<bool>()).prop_map(
        |(segments, trailing, query)| {
            let mut path = format!("/{}", segments.join("/"));
            if trailing {
                path.push('/');
            }
            if query {
                path.push_str("?q=1");
            }
            path
        },
    )
}

/// Content paths, including ones that already carry a locale prefix.
fn content_path() -> impl Strategy<Value = RequestPath> {
    let segment = prop_oneof![
        Just("en".to_string()),
        Just("ar".to_string()),
        "[a-z]{1,8}",
    ];
    prop::collection::vec(segment, 0..3)
        .prop_map(|segments| RequestPath::parse(&format!("/{}", segments.join("/"))))
}

proptest! {
    #[test]
    fn prop_every_path_gets_one_consistent_action(raw in raw_path()) {
        let c = components();
        let decision = c.router.decide(&raw);
        match &decision.action {
            RoutingAction::PassThrough => {
                prop_assert!(
                    decision.classification.is_bypass()
                        || decision.detected_locale.as_deref() == Some("ar")
                );
            }
            RoutingAction::Redirect { location, status } => {
                prop_assert_eq!(*status, StatusCode::PERMANENT_REDIRECT);
                prop_assert_eq!(decision.detected_locale.as_deref(), Some("en"));
                prop_assert_eq!(location, &decision.path.without_first_segment().to_string());
            }
            RoutingAction::InternalRewrite { path } => {
                prop_assert_eq!(decision.classification, RouteClassification::Unqualified);
                let target = RequestPath::parse(path);
                prop_assert_eq!(target.first_segment(), Some("en"));
            }
        }
        // Same input, same answer.
        prop_assert_eq!(c.router.decide(&raw), decision);
    }

    #[test]
    fn prop_rewrite_target_is_idempotent(path in content_path()) {
        let c = components();
        let once = c.router.rewrite_target(&path);
        prop_assert_eq!(c.router.rewrite_target(&once), once);
    }

    #[test]
    fn prop_canonical_prefix_matches_locale(path in content_path()) {
        let c = components();
        for locale in c.registry.iter() {
            let canonical = c.urls.build(&path, locale).canonical;
            let rest = canonical.strip_prefix("https://site").unwrap();
            let first = RequestPath::parse(rest).first_segment().map(str::to_string);
            if c.registry.is_default(&locale.code) {
                prop_assert!(!first.as_deref().is_some_and(|s| c.registry.contains(s)));
            } else {
                prop_assert_eq!(first.as_deref(), Some(locale.code.as_str()));
            }
        }
    }

    #[test]
    fn prop_alternates_parse_back_to_themselves(path in content_path()) {
        let c = components();
        for current in c.registry.iter() {
            for alt in c.urls.build(&path, current).alternates {
                let (locale, content) = c.urls.parse(&alt.href).unwrap();
                prop_assert_eq!(c.urls.url_for(&content, locale), alt.href);
            }
        }
    }
}
