//! Zone handler layer.
//!
//! # Data Flow
//! ```text
//! Dispatched request (URI rewritten into a zone namespace)
//!     → /main/...          landing.rs (public site)
//!     → /{zone}/...        protected.rs (one nest per registered zone)
//!     → /tenant/{zone}/... tenant.rs (generic tenant pages)
//!     → anything else      fallback 404
//! ```
//!
//! # Design Decisions
//! - Handlers are presentation consumers: they read the propagated
//!   `RouteContext` (zone label, original path) and the session provider,
//!   and never re-derive either from the request
//! - Pages are minimal inline HTML; asset serving lives outside this system

pub mod landing;
pub mod protected;
pub mod tenant;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;

use crate::config::RouterConfig;
use crate::session::SessionProvider;

/// Shared state for the handler layer.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RouterConfig>,
    pub sessions: Arc<dyn SessionProvider>,
}

/// Assemble the internal zone routers under their namespaces.
pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .nest("/main", landing::router())
        .nest("/tenant/{zone}", tenant::router());

    // One nest per registered protected zone; the handlers themselves are
    // zone-agnostic and read the label from the propagated context.
    for zone in &state.config.zones.protected {
        router = router.nest(&format!("/{zone}"), protected::router());
    }

    router.fallback(not_found).with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
