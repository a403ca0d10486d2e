//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a minimal (or absent) config file works.

use serde::{Deserialize, Serialize};

/// Root configuration for the zone router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Hostname addressing scheme and zone registry.
    pub zones: ZoneConfig,

    /// Fixed session record served by the session provider.
    pub session: SessionConfig,

    /// Paths that skip zone dispatch entirely.
    pub bypass: BypassConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl RouterConfig {
    /// Browser-facing URL for a zone under the configured addressing scheme.
    ///
    /// Used by presentation handlers to link across zones; development mode
    /// keeps the listener port in the URL the way local `.localhost`
    /// addressing needs it.
    pub fn zone_url(&self, label: &str) -> String {
        match self.zones.mode {
            AddressingMode::Development => {
                let port = self
                    .listener
                    .bind_address
                    .rsplit_once(':')
                    .map(|(_, p)| p)
                    .unwrap_or("3000");
                format!("http://{label}.localhost:{port}")
            }
            AddressingMode::Production => {
                format!("https://{label}.{}", self.zones.root_domain)
            }
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Hostname addressing scheme selecting how zone labels are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddressingMode {
    /// Loopback scheme: `localhost` is root, `label.localhost` is the zone.
    #[default]
    Development,
    /// Root-domain scheme: the configured domain (and `www.`) is root, any
    /// other hostname has the domain suffix stripped to yield the zone.
    Production,
}

impl AddressingMode {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Zone registry and addressing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Addressing scheme (development loopback vs production root domain).
    pub mode: AddressingMode,

    /// Root domain used for suffix stripping in production mode.
    pub root_domain: String,

    /// Zone labels that require an authenticated session.
    pub protected: Vec<String>,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            mode: AddressingMode::Development,
            root_domain: "example.com".to_string(),
            protected: vec!["app".to_string(), "dash".to_string()],
        }
    }
}

/// Fixed session record for the built-in session provider.
///
/// Credential verification and session persistence live outside this
/// system; this record only controls what the provider reports.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Whether the provider reports an authenticated principal.
    pub authenticated: bool,

    /// Display name of the principal.
    pub name: String,

    /// Contact identifier of the principal.
    pub email: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            authenticated: true,
            name: "Sandip".to_string(),
            email: "xyz@gmail.com".to_string(),
        }
    }
}

/// Paths excluded from zone dispatch.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BypassConfig {
    /// Exact paths (e.g., "/favicon.ico").
    pub exact_paths: Vec<String>,

    /// Path prefixes (e.g., "/assets/").
    pub path_prefixes: Vec<String>,

    /// File extensions without the dot (e.g., "css").
    pub extensions: Vec<String>,
}

impl Default for BypassConfig {
    fn default() -> Self {
        Self {
            exact_paths: vec!["/favicon.ico".to_string()],
            path_prefixes: vec!["/assets/".to_string(), "/static/".to_string()],
            extensions: ["svg", "png", "jpg", "gif", "ico", "css", "js"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Bind address for the metrics endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
