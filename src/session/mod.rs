//! Session lookup capability.
//!
//! # Responsibilities
//! - Expose presence/absence of an authenticated principal per request
//! - Carry the principal's display attributes for presentation handlers
//!
//! # Design Decisions
//! - Injected as a trait object so the dispatcher and tests choose the
//!   implementation; no process-global session state
//! - Credential verification and session persistence live elsewhere; this
//!   crate only reads the result
//! - The provider is consulted once per dispatched request and never cached
//!   across requests

use serde::Serialize;

use crate::config::schema::SessionConfig;

/// An authenticated principal's display attributes.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    /// Display name.
    pub name: String,
    /// Contact identifier.
    pub email: String,
}

/// Source of the current request's session, if any.
///
/// Returning `Some` means the request is authenticated.
pub trait SessionProvider: Send + Sync {
    fn current_session(&self) -> Option<Session>;
}

/// Session provider backed by a fixed, configuration-supplied record.
#[derive(Debug, Clone)]
pub struct FixedSessionProvider {
    authenticated: bool,
    session: Session,
}

impl FixedSessionProvider {
    pub fn new(authenticated: bool, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            authenticated,
            session: Session {
                name: name.into(),
                email: email.into(),
            },
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.authenticated, &config.name, &config.email)
    }
}

impl SessionProvider for FixedSessionProvider {
    fn current_session(&self) -> Option<Session> {
        self.authenticated.then(|| self.session.clone())
    }
}
