//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//! - Reject zone labels that collide with reserved names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RouterConfig;

/// A single semantic configuration defect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    InvalidMetricsAddress(String),

    #[error("zones.root_domain must be non-empty in production mode")]
    EmptyRootDomain,

    #[error("zones.root_domain '{0}' must not start with a dot")]
    LeadingDotRootDomain(String),

    #[error("protected zone label '{0}' is reserved")]
    ReservedZoneLabel(String),

    #[error("protected zone label '{0}' must be a bare label (no '.', '/', or empty)")]
    MalformedZoneLabel(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("bypass path '{0}' must start with '/'")]
    RelativeBypassPath(String),
}

/// Validate a configuration, collecting every defect.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.zones.mode.is_production() {
        if config.zones.root_domain.is_empty() {
            errors.push(ValidationError::EmptyRootDomain);
        } else if config.zones.root_domain.starts_with('.') {
            errors.push(ValidationError::LeadingDotRootDomain(
                config.zones.root_domain.clone(),
            ));
        }
    }

    for label in &config.zones.protected {
        let lower = label.to_lowercase();
        // `root`/`www` collide with hostname resolution; `main`/`tenant`
        // collide with the fixed internal namespaces.
        if matches!(lower.as_str(), "root" | "www" | "main" | "tenant") {
            errors.push(ValidationError::ReservedZoneLabel(label.clone()));
        } else if label.is_empty() || label.contains('.') || label.contains('/') {
            errors.push(ValidationError::MalformedZoneLabel(label.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    for path in config
        .bypass
        .exact_paths
        .iter()
        .chain(config.bypass.path_prefixes.iter())
    {
        if !path.starts_with('/') {
            errors.push(ValidationError::RelativeBypassPath(path.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
