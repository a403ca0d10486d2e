//! HTTP middleware.

pub mod dispatch;

pub use dispatch::{dispatch_middleware, DispatchState, RouteContext, X_PATHNAME, X_SUBDOMAIN};
