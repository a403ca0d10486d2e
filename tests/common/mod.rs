//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use zone_router::config::RouterConfig;
use zone_router::session::SessionProvider;
use zone_router::{FixedSessionProvider, HttpServer};

/// Start the router on an ephemeral port and return its address.
pub async fn spawn_router(
    mut config: RouterConfig,
    sessions: Arc<dyn SessionProvider>,
) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let server = HttpServer::new(config, sessions);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Start the router with the default config and a fixed session state.
pub async fn spawn_default_router(authenticated: bool) -> SocketAddr {
    let mut config = RouterConfig::default();
    config.session.authenticated = authenticated;
    let sessions = Arc::new(FixedSessionProvider::from_config(&config.session));
    spawn_router(config, sessions).await
}

/// Client that resolves the given hostnames to the router's address.
///
/// Zone routing keys off the Host header, so tests address the server
/// through zone hostnames rather than raw IPs.
pub fn client_for(addr: SocketAddr, hosts: &[&str]) -> reqwest::Client {
    let mut builder = reqwest::Client::builder().no_proxy();
    for host in hosts {
        builder = builder.resolve(host, addr);
    }
    builder.build().unwrap()
}

/// Response header as a string, if present.
pub fn header(res: &reqwest::Response, name: &str) -> Option<String> {
    res.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}
