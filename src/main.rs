//! Host-Based Zone Router
//!
//! Routes incoming HTTP requests to logical application zones by hostname,
//! rewriting each request path into a zone-specific internal namespace and
//! enforcing authentication for protected zones before any handler runs.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌───────────────────────────────────────────────┐
//!                       │                 ZONE ROUTER                   │
//!                       │                                               │
//!     Client Request    │  ┌─────────┐   ┌──────────┐   ┌────────────┐  │
//!     ──────────────────┼─▶│  http   │──▶│ dispatch │──▶│   zone     │  │
//!                       │  │ server  │   │middleware│   │  handlers  │  │
//!                       │  └─────────┘   └────┬─────┘   └────────────┘  │
//!                       │                     │                         │
//!                       │        ┌────────────┼────────────┐            │
//!                       │        ▼            ▼            ▼            │
//!                       │  ┌──────────┐ ┌──────────┐ ┌──────────┐       │
//!                       │  │   zone   │ │  access  │ │   path   │       │
//!                       │  │ resolver │ │  guard   │ │ rewriter │       │
//!                       │  └──────────┘ └──────────┘ └──────────┘       │
//!                       │                                               │
//!                       │  ┌─────────────────────────────────────────┐  │
//!                       │  │          Cross-Cutting Concerns         │  │
//!                       │  │  ┌────────┐ ┌─────────┐ ┌─────────────┐ │  │
//!                       │  │  │ config │ │ session │ │observability│ │  │
//!                       │  │  └────────┘ └─────────┘ └─────────────┘ │  │
//!                       │  └─────────────────────────────────────────┘  │
//!                       └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use zone_router::config::loader::load_config;
use zone_router::session::FixedSessionProvider;
use zone_router::HttpServer;

#[derive(Debug, Parser)]
#[command(name = "zone-router", version, about = "Host-based zone router")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    zone_router::observability::logging::init();

    tracing::info!("zone-router v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        mode = ?config.zones.mode,
        root_domain = %config.zones.root_domain,
        protected = ?config.zones.protected,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            zone_router::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let sessions = Arc::new(FixedSessionProvider::from_config(&config.session));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config, sessions);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
