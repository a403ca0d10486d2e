//! Generic tenant zone pages (`/tenant/{zone}`).

use axum::response::Html;
use axum::routing::get;
use axum::{Extension, Router};

use crate::http::middleware::RouteContext;
use crate::zones::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index)).fallback(index)
}

/// Tenant page echoing the zone label and the requested path.
async fn index(Extension(ctx): Extension<RouteContext>) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html>
<head><title>{zone}</title></head>
<body>
  <h1>{zone}</h1>
  <p>tenant zone: <code>{zone}</code> · page: <code>{path}</code></p>
</body>
</html>"#,
        zone = ctx.zone.label(),
        path = ctx.original_path,
    ))
}
