//! Zone routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (Host header, path)
//!     → bypass.rs (static/internal paths skip dispatch)
//!     → zone.rs (hostname → Zone)
//!     → guard.rs (Allow or SubstituteLogin)
//!     → rewrite.rs (zone namespace + path → internal path)
//!     → Return: internal rewrite target for the handler layer
//! ```
//!
//! # Design Decisions
//! - All four operations are pure and total: same input, same output,
//!   no errors, no I/O
//! - The zone is resolved once per request and carried as a tagged variant;
//!   nothing downstream re-parses the hostname
//! - Guard membership is checked before any rewrite is emitted

pub mod bypass;
pub mod guard;
pub mod rewrite;
pub mod zone;

pub use bypass::BypassRules;
pub use guard::{decide, GuardDecision, LOGIN_PATH};
pub use rewrite::{namespace, rewrite_path};
pub use zone::{Zone, ZoneResolver};
