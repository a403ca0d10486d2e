//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all zone handlers
//! - Wire up middleware (dispatch, timeout, request ID, tracing)
//! - Bind server to listener and serve with graceful shutdown
//!
//! # Design Decisions
//! - The dispatch middleware wraps the whole router, so the zone rewrite
//!   happens before any route matching
//! - Layer order matches request flow: trace → request ID → timeout →
//!   dispatch → zone routers

use std::sync::Arc;
use std::time::Duration;

use axum::middleware::from_fn_with_state;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RouterConfig;
use crate::http::middleware::{dispatch_middleware, DispatchState};
use crate::http::request::RequestIdLayer;
use crate::routing::{BypassRules, ZoneResolver};
use crate::session::SessionProvider;
use crate::zones::{self, AppState};

/// HTTP server for the zone router.
pub struct HttpServer {
    router: Router,
    config: Arc<RouterConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and session
    /// capability.
    pub fn new(config: RouterConfig, sessions: Arc<dyn SessionProvider>) -> Self {
        let config = Arc::new(config);

        let dispatch_state = DispatchState {
            resolver: Arc::new(ZoneResolver::from_config(&config.zones)),
            sessions: sessions.clone(),
            bypass: Arc::new(BypassRules::from_config(&config.bypass)),
        };

        let app_state = AppState {
            config: config.clone(),
            sessions,
        };

        let router = Self::build_router(&config, app_state, dispatch_state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(
        config: &RouterConfig,
        app_state: AppState,
        dispatch_state: DispatchState,
    ) -> Router {
        zones::router(app_state)
            .layer(from_fn_with_state(dispatch_state, dispatch_middleware))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
