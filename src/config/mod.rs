//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → shared via Arc to server and middleware
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so the router runs with no config file at all
//! - Environment variables (APP_ENV, ROOT_DOMAIN) take precedence over the
//!   file, since deployments select the addressing scheme per environment
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AddressingMode, RouterConfig, ZoneConfig};
pub use validation::{validate_config, ValidationError};
