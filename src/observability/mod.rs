//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher and server produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; filter driven by RUST_LOG
//! - Request ID flows through all log events on a request's span
//! - Metrics are cheap (atomic increments) and optional

pub mod logging;
pub mod metrics;
