//! Locale routing middleware.
//! Applies the routing decision before the content router sees the request.

use axum::{
    body::Body,
    extract::State,
    http::{header, uri::PathAndQuery, HeaderValue, Request, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::{RoutingAction, RoutingDecision};

pub async fn locale_routing(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let decision = state.router.decide(req.uri().path());
    metrics::record_routing_decision(decision.classification.as_str(), decision.action.as_str());

    tracing::debug!(
        request_id = %request_id(&req),
        path = %decision.path,
        classification = %decision.classification,
        action = decision.action.as_str(),
        "Routing decision"
    );

    match &decision.action {
        RoutingAction::PassThrough => {}
        RoutingAction::Redirect { location, status } => {
            let target = with_query(&state.urls.public_path(location), req.uri().query());
            match redirect(*status, &target) {
                Some(response) => return response,
                None => tracing::warn!(location = %target, "Redirect target is not a valid header"),
            }
        }
        RoutingAction::InternalRewrite { path } => match rewrite_uri(req.uri(), path) {
            Ok(uri) => *req.uri_mut() = uri,
            Err(e) => tracing::warn!(path = %path, error = %e, "Rewrite failed, serving as-is"),
        },
    }

    req.extensions_mut().insert(decision);
    next.run(req).await
}

/// `location` with the original query string, if any, appended.
pub fn with_query(location: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{location}?{q}"),
        _ => location.to_string(),
    }
}

fn redirect(status: StatusCode, location: &str) -> Option<Response> {
    let value = HeaderValue::from_str(location).ok()?;
    Some((status, [(header::LOCATION, value)]).into_response())
}

/// Same URI with its path replaced; query preserved.
pub fn rewrite_uri(uri: &Uri, path: &str) -> Result<Uri, axum::http::Error> {
    let path_and_query = with_query(path, uri.query());
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query)?);
    Ok(Uri::from_parts(parts)?)
}

/// Decision attached to the request by [`locale_routing`].
pub fn decision<B>(req: &Request<B>) -> Option<&RoutingDecision> {
    req.extensions().get::<RoutingDecision>()
}
