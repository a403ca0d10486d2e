//! Hostname to zone resolution.
//!
//! # Responsibilities
//! - Strip port suffix and normalize case before matching
//! - Map loopback hosts (development) or root-domain hosts (production)
//!   to zone labels
//! - Classify labels into Root / Protected / Tenant variants
//!
//! # Design Decisions
//! - Host matching is case-insensitive (per HTTP spec)
//! - Total function: every hostname resolves to some zone
//! - An empty stripped label resolves to Root, never a degenerate tenant
//! - Zone is a tagged variant so downstream code pattern-matches instead of
//!   comparing strings

use std::collections::HashSet;

use crate::config::schema::{AddressingMode, ZoneConfig};

/// The logical application area a request belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Public landing site (bare domain, `www.`, or the `root` label).
    Root,
    /// A registered zone that requires an authenticated session.
    Protected(String),
    /// Any other label, served under the generic tenant namespace.
    Tenant(String),
}

impl Zone {
    /// The zone label as exposed to downstream consumers.
    pub fn label(&self) -> &str {
        match self {
            Zone::Root => "root",
            Zone::Protected(name) | Zone::Tenant(name) => name,
        }
    }

    /// Whether this zone requires an authenticated session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Zone::Protected(_))
    }
}

/// Maps request hostnames to zones.
///
/// Immutable after construction; `resolve` is pure and can be shared freely
/// across concurrent requests.
#[derive(Debug, Clone)]
pub struct ZoneResolver {
    mode: AddressingMode,
    root_domain: String,
    protected: HashSet<String>,
}

impl ZoneResolver {
    /// Build a resolver from the zone configuration.
    pub fn from_config(config: &ZoneConfig) -> Self {
        Self {
            mode: config.mode,
            root_domain: config.root_domain.to_lowercase(),
            protected: config.protected.iter().map(|z| z.to_lowercase()).collect(),
        }
    }

    /// Resolve a `Host` header value to a zone.
    ///
    /// Total over its input: a missing, empty, or unrecognized hostname still
    /// yields a zone rather than an error.
    pub fn resolve(&self, hostname: &str) -> Zone {
        let host = strip_port(hostname).to_lowercase();

        let label = match self.mode {
            AddressingMode::Development => {
                if host == "localhost" {
                    return Zone::Root;
                }
                host.strip_suffix(".localhost").unwrap_or(&host).to_string()
            }
            AddressingMode::Production => {
                if host == self.root_domain || host == format!("www.{}", self.root_domain) {
                    return Zone::Root;
                }
                let suffix = format!(".{}", self.root_domain);
                host.strip_suffix(&suffix).unwrap_or(&host).to_string()
            }
        };

        self.classify(label)
    }

    fn classify(&self, label: String) -> Zone {
        if label.is_empty() || label == "root" {
            Zone::Root
        } else if self.protected.contains(&label) {
            Zone::Protected(label)
        } else {
            Zone::Tenant(label)
        }
    }
}

/// Strip a `:port` suffix from a hostname, if present.
fn strip_port(hostname: &str) -> &str {
    hostname.split(':').next().unwrap_or(hostname)
}
