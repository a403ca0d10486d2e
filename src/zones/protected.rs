//! Protected zone pages (dashboard, login, session endpoint).
//!
//! Served under `/{zone}` for every registered protected zone. The
//! dispatcher has already enforced authentication; these handlers only
//! present the outcome.

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Serialize;

use crate::http::middleware::RouteContext;
use crate::routing::guard::is_login_path;
use crate::zones::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/login", get(login))
        .route("/api/session", get(session_info))
        .fallback(index)
}

/// Dashboard page, also serving section sub-paths.
async fn index(
    State(state): State<AppState>,
    Extension(ctx): Extension<RouteContext>,
) -> Html<String> {
    let session = state.sessions.current_session();
    let signed_in = session
        .map(|s| format!("Logged in as <strong>{}</strong> ({})", s.name, s.email))
        .unwrap_or_else(|| "Not signed in".to_string());

    Html(format!(
        r#"<!doctype html>
<html>
<head><title>{zone} dashboard</title></head>
<body>
  <h1>{zone} Dashboard</h1>
  <p>zone: <code>{zone}</code> · page: <code>{path}</code></p>
  <section>
    <div>Users: 1,240</div>
    <div>Revenue: $8,320</div>
    <div>Requests: 94.2k</div>
  </section>
  <footer>{signed_in}</footer>
</body>
</html>"#,
        zone = ctx.zone.label(),
        path = ctx.original_path,
    ))
}

/// Sign-in form.
///
/// The original path tells the page whether the visitor asked for the login
/// page or was sent here by the guard; either way, no sidebar is rendered.
async fn login(Extension(ctx): Extension<RouteContext>) -> Html<String> {
    let requested_login = is_login_path(&ctx.original_path);
    let note = if requested_login {
        String::new()
    } else {
        format!(
            "<p>Sign in to continue to <code>{}</code>.</p>",
            ctx.original_path
        )
    };

    Html(format!(
        r##"<!doctype html>
<html>
<head><title>Sign in to {zone}</title></head>
<body>
  <h1>Sign in to {zone}</h1>
  {note}
  <form method="post" action="#">
    <label>Email <input type="email" name="email" required></label>
    <label>Password <input type="password" name="password" required></label>
    <button type="submit">Sign In</button>
  </form>
</body>
</html>"##,
        zone = ctx.zone.label(),
    ))
}

#[derive(Serialize)]
struct SessionInfo {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

/// Session presence and display attributes as JSON.
async fn session_info(State(state): State<AppState>) -> Json<SessionInfo> {
    match state.sessions.current_session() {
        Some(session) => Json(SessionInfo {
            authenticated: true,
            name: Some(session.name),
            email: Some(session.email),
        }),
        None => Json(SessionInfo {
            authenticated: false,
            name: None,
            email: None,
        }),
    }
}
