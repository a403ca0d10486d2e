//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (add request ID)
//!     → middleware/dispatch.rs (zone resolve, guard, rewrite)
//!     → zone handlers
//!     → Send to client (propagated zone/path headers)
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use request::{RequestId, RequestIdExt, RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
