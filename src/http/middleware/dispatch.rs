//! Zone dispatch middleware.
//!
//! Runs once per request ahead of all route matching: resolves the zone
//! from the Host header, applies the access guard, and rewrites the request
//! URI into the zone's internal namespace. The rewrite is internal dispatch
//! only; the client never sees a redirect or a changed URL.
//!
//! # Design Decisions
//! - Never fails the request: every input resolves to some rewrite
//! - Handlers receive the resolved zone and the ORIGINAL path via
//!   `RouteContext`; the rewrite target is never propagated
//! - Bypassed paths (static assets, favicon) pass through untouched

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header, uri::Uri, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

use crate::observability::metrics;
use crate::routing::{decide, rewrite_path, BypassRules, GuardDecision, Zone, ZoneResolver, LOGIN_PATH};
use crate::session::SessionProvider;

/// Response header carrying the resolved zone label.
pub const X_SUBDOMAIN: &str = "x-subdomain";

/// Response header carrying the original request path.
pub const X_PATHNAME: &str = "x-pathname";

/// State required for zone dispatch.
#[derive(Clone)]
pub struct DispatchState {
    pub resolver: Arc<ZoneResolver>,
    pub sessions: Arc<dyn SessionProvider>,
    pub bypass: Arc<BypassRules>,
}

/// Context attached to every dispatched request.
///
/// `original_path` is the path as received, before any rewrite; downstream
/// consumers read it for display only, never for authorization.
#[derive(Debug, Clone)]
pub struct RouteContext {
    pub zone: Zone,
    pub original_path: String,
}

pub async fn dispatch_middleware(
    State(state): State<DispatchState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    // 1. Static/internal paths skip dispatch entirely.
    if state.bypass.matches(req.uri().path()) {
        return next.run(req).await;
    }

    let start = Instant::now();

    // 2. Resolve the zone. A missing or malformed Host header resolves like
    //    an empty hostname; dispatch must not fail the request.
    let hostname = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let zone = state.resolver.resolve(hostname);

    let original_path = req.uri().path().to_string();

    // 3. Guard. The session read is the only suspension point and is taken
    //    fresh for every request.
    let authenticated = state.sessions.current_session().is_some();
    let decision = decide(&zone, authenticated, &original_path);

    // 4. Rewrite into the zone namespace.
    let target = match decision {
        GuardDecision::Allow => rewrite_path(&zone, &original_path),
        GuardDecision::SubstituteLogin => rewrite_path(&zone, LOGIN_PATH),
    };

    tracing::debug!(
        zone = %zone.label(),
        path = %original_path,
        target = %target,
        decision = decision.as_str(),
        "Dispatching request"
    );

    set_request_path(&mut req, &target);
    req.extensions_mut().insert(RouteContext {
        zone: zone.clone(),
        original_path: original_path.clone(),
    });

    metrics::record_dispatch(zone.label(), decision, start);

    let mut res = next.run(req).await;

    let headers = res.headers_mut();
    if let Ok(value) = HeaderValue::from_str(zone.label()) {
        headers.insert(X_SUBDOMAIN, value);
    }
    if let Ok(value) = HeaderValue::from_str(&original_path) {
        headers.insert(X_PATHNAME, value);
    }
    res
}

/// Replace the request URI path, preserving the query string.
fn set_request_path(req: &mut Request<Body>, path: &str) {
    let path_and_query = match req.uri().query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };

    let mut parts = req.uri().clone().into_parts();
    match path_and_query.parse() {
        Ok(pq) => {
            parts.path_and_query = Some(pq);
            if let Ok(uri) = Uri::from_parts(parts) {
                *req.uri_mut() = uri;
            }
        }
        Err(_) => {
            // An unparseable rewrite target leaves the URI untouched; the
            // request still reaches the fallback handler.
            tracing::warn!(target = %path_and_query, "Rewrite target is not a valid path");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::{Extension, Router};
    use tower::ServiceExt;

    use crate::config::schema::{BypassConfig, ZoneConfig};
    use crate::session::FixedSessionProvider;

    fn dispatch_state(authenticated: bool) -> DispatchState {
        DispatchState {
            resolver: Arc::new(ZoneResolver::from_config(&ZoneConfig::default())),
            sessions: Arc::new(FixedSessionProvider::new(
                authenticated,
                "Sandip",
                "xyz@gmail.com",
            )),
            bypass: Arc::new(BypassRules::from_config(&BypassConfig::default())),
        }
    }

    async fn show_context(Extension(ctx): Extension<RouteContext>) -> String {
        format!("{}|{}", ctx.zone.label(), ctx.original_path)
    }

    fn app(authenticated: bool) -> Router {
        Router::new()
            .route("/main/", get(show_context))
            .route("/app/login", get(show_context))
            .route("/app/settings", get(show_context))
            .route("/tenant/{zone}/billing", get(show_context))
            .fallback(|| async { (StatusCode::NOT_FOUND, "no handler") })
            .layer(from_fn_with_state(
                dispatch_state(authenticated),
                dispatch_middleware,
            ))
    }

    async fn send(app: Router, host: &str, path: &str) -> axum::http::Response<Body> {
        app.oneshot(
            Request::builder()
                .uri(path)
                .header(header::HOST, host)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_string(res: axum::http::Response<Body>) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), 64 * 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn header<'a>(res: &'a axum::http::Response<Body>, name: &str) -> Option<&'a str> {
        res.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_root_zone_rewrites_to_landing_namespace() {
        let res = send(app(false), "localhost:3000", "/").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(header(&res, X_SUBDOMAIN), Some("root"));
        assert_eq!(header(&res, X_PATHNAME), Some("/"));
        assert_eq!(body_string(res).await, "root|/");
    }

    #[tokio::test]
    async fn test_unauthenticated_protected_zone_serves_login() {
        let res = send(app(false), "app.localhost:3000", "/").await;
        assert_eq!(res.status(), StatusCode::OK);
        // The login handler answered, but the propagated path is the original.
        assert_eq!(header(&res, X_SUBDOMAIN), Some("app"));
        assert_eq!(header(&res, X_PATHNAME), Some("/"));
        assert_eq!(body_string(res).await, "app|/");
    }

    #[tokio::test]
    async fn test_login_page_reachable_unauthenticated() {
        let res = send(app(false), "app.localhost:3000", "/login").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(header(&res, X_PATHNAME), Some("/login"));
    }

    #[tokio::test]
    async fn test_authenticated_request_keeps_its_path() {
        let res = send(app(true), "app.localhost:3000", "/settings").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_string(res).await, "app|/settings");
    }

    #[tokio::test]
    async fn test_tenant_zone_needs_no_auth() {
        let res = send(app(false), "acme.localhost:3000", "/billing").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(header(&res, X_SUBDOMAIN), Some("acme"));
        assert_eq!(body_string(res).await, "acme|/billing");
    }

    #[tokio::test]
    async fn test_missing_host_header_dispatches_to_root() {
        let app = app(false);
        let res = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(header(&res, X_SUBDOMAIN), Some("root"));
    }

    #[tokio::test]
    async fn test_bypassed_path_is_untouched() {
        let res = send(app(false), "app.localhost:3000", "/favicon.ico").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(header(&res, X_SUBDOMAIN), None);
        assert_eq!(header(&res, X_PATHNAME), None);
    }

    #[tokio::test]
    async fn test_query_string_survives_rewrite() {
        let app = Router::new()
            .route(
                "/app/settings",
                get(|req: Request<Body>| async move {
                    req.uri().query().unwrap_or("").to_string()
                }),
            )
            .layer(from_fn_with_state(dispatch_state(true), dispatch_middleware));
        let res = send(app, "app.localhost:3000", "/settings?tab=profile").await;
        assert_eq!(body_string(res).await, "tab=profile");
    }

    #[tokio::test]
    async fn test_propagated_path_differs_from_rewrite_target() {
        // Substitution case: the rewrite target is /app/login, yet the
        // propagated path must stay the original request path.
        let res = send(app(false), "app.localhost:3000", "/settings").await;
        let propagated = header(&res, X_PATHNAME).unwrap().to_string();
        assert_eq!(propagated, "/settings");
        assert_ne!(propagated, "/app/login");
    }
}
