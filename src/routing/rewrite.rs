//! Internal path rewriting.
//!
//! # Responsibilities
//! - Compute the namespace prefix for a zone
//! - Join the prefix with a request path, normalizing separators
//!
//! # Design Decisions
//! - Pure concatenation/normalization; which path gets joined (original vs
//!   login) is the dispatcher's choice
//! - The rewrite target selects handlers only and is never exposed to
//!   downstream consumers

use crate::routing::zone::Zone;

/// Namespace prefix for a zone, without a trailing separator.
pub fn namespace(zone: &Zone) -> String {
    match zone {
        Zone::Root => "/main".to_string(),
        Zone::Protected(name) => format!("/{name}"),
        Zone::Tenant(name) => format!("/tenant/{name}"),
    }
}

/// Rewrite a request path into a zone's internal namespace.
pub fn rewrite_path(zone: &Zone, path: &str) -> String {
    join(&namespace(zone), path)
}

/// Join a namespace prefix and a path without duplicating separators.
fn join(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if path.is_empty() {
        return format!("{prefix}/");
    }
    if path.starts_with('/') {
        format!("{prefix}{path}")
    } else {
        format!("{prefix}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaces() {
        assert_eq!(namespace(&Zone::Root), "/main");
        assert_eq!(namespace(&Zone::Protected("app".into())), "/app");
        assert_eq!(namespace(&Zone::Tenant("acme".into())), "/tenant/acme");
    }

    #[test]
    fn test_rewrite_root_slash() {
        assert_eq!(rewrite_path(&Zone::Root, "/"), "/main/");
    }

    #[test]
    fn test_rewrite_protected_paths() {
        let app = Zone::Protected("app".into());
        assert_eq!(rewrite_path(&app, "/login"), "/app/login");
        assert_eq!(rewrite_path(&app, "/settings"), "/app/settings");
    }

    #[test]
    fn test_rewrite_tenant_paths() {
        let acme = Zone::Tenant("acme".into());
        assert_eq!(rewrite_path(&acme, "/billing"), "/tenant/acme/billing");
        assert_eq!(rewrite_path(&acme, "/"), "/tenant/acme/");
    }

    #[test]
    fn test_join_normalizes_separators() {
        assert_eq!(join("/main/", "/"), "/main/");
        assert_eq!(join("/main", ""), "/main/");
        assert_eq!(join("/main", "login"), "/main/login");
        assert_eq!(join("/tenant/acme/", "/billing"), "/tenant/acme/billing");
    }
}
