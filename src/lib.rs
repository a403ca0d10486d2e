//! Host-Based Zone Router Library

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;
pub mod session;
pub mod zones;

pub use config::RouterConfig;
pub use http::HttpServer;
pub use routing::{GuardDecision, Zone, ZoneResolver};
pub use session::{FixedSessionProvider, Session, SessionProvider};
