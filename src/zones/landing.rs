//! Public landing zone (`/main`).

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::zones::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Landing page with links into the registered zones.
async fn index(State(state): State<AppState>) -> Html<String> {
    let links: String = state
        .config
        .zones
        .protected
        .iter()
        .map(|zone| {
            format!(
                r#"<a href="{url}">Open {zone}</a>"#,
                url = state.config.zone_url(zone)
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ");

    Html(format!(
        r#"<!doctype html>
<html>
<head><title>{domain}</title></head>
<body>
  <h1>Welcome to {domain}</h1>
  <p>This is the public landing page — no login required.</p>
  <nav>
    {links}
  </nav>
</body>
</html>"#,
        domain = state.config.zones.root_domain,
    ))
}
