//! Access guard for protected zones.
//!
//! # Responsibilities
//! - Decide whether a request may proceed to its requested path or must be
//!   served the login page instead
//! - Keep the login page reachable while unauthenticated
//!
//! # Design Decisions
//! - Total decision function over (zone, authenticated, path); no errors
//! - Protected-set membership is the sole gate; it is checked before any
//!   rewrite is computed
//! - No side effects, no I/O

use crate::routing::zone::Zone;

/// Login sub-path within each protected zone's namespace.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of the access guard for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Serve the requested path.
    Allow,
    /// Serve the zone's login page instead of the requested path.
    SubstituteLogin,
}

impl GuardDecision {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardDecision::Allow => "allow",
            GuardDecision::SubstituteLogin => "substitute_login",
        }
    }
}

/// Decide whether the request path stands or the login page is substituted.
pub fn decide(zone: &Zone, is_authenticated: bool, original_path: &str) -> GuardDecision {
    if !zone.is_protected() {
        return GuardDecision::Allow;
    }
    if is_authenticated {
        return GuardDecision::Allow;
    }
    if is_login_path(original_path) {
        // The login page must stay reachable or unauthenticated users
        // could never sign in.
        return GuardDecision::Allow;
    }
    GuardDecision::SubstituteLogin
}

/// Whether a path is the login page or one of its sub-paths.
pub fn is_login_path(path: &str) -> bool {
    path == LOGIN_PATH || path.starts_with("/login/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protected() -> Zone {
        Zone::Protected("app".into())
    }

    #[test]
    fn test_unprotected_zones_always_allow() {
        for path in ["/", "/settings", "/login"] {
            assert_eq!(decide(&Zone::Root, false, path), GuardDecision::Allow);
            assert_eq!(
                decide(&Zone::Tenant("acme".into()), false, path),
                GuardDecision::Allow
            );
        }
    }

    #[test]
    fn test_authenticated_always_allows() {
        for path in ["/", "/settings", "/login", "/login/reset"] {
            assert_eq!(decide(&protected(), true, path), GuardDecision::Allow);
        }
    }

    #[test]
    fn test_unauthenticated_protected_substitutes() {
        for path in ["/", "/settings", "/billing/invoices", ""] {
            assert_eq!(
                decide(&protected(), false, path),
                GuardDecision::SubstituteLogin
            );
        }
    }

    #[test]
    fn test_login_page_reachable_unauthenticated() {
        assert_eq!(decide(&protected(), false, "/login"), GuardDecision::Allow);
        assert_eq!(
            decide(&protected(), false, "/login/reset"),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_login_prefix_requires_separator() {
        // `/loginx` is a regular page, not the login page.
        assert_eq!(
            decide(&protected(), false, "/loginx"),
            GuardDecision::SubstituteLogin
        );
    }
}
