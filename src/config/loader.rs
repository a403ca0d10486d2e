//! Configuration loading from disk and environment.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{AddressingMode, RouterConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    let mut out = String::new();
    for (i, err) in errors.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{err}");
    }
    out
}

/// Load configuration: optional TOML file, then environment overrides,
/// then validation.
pub fn load_config(path: Option<&Path>) -> Result<RouterConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => RouterConfig::default(),
    };

    apply_env_overrides(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides on top of the file/default configuration.
///
/// `APP_ENV` selects the addressing mode (`production`/`prod` vs anything
/// else); `ROOT_DOMAIN` overrides the configured root domain.
pub fn apply_env_overrides(config: &mut RouterConfig) {
    if let Ok(app_env) = std::env::var("APP_ENV") {
        config.zones.mode = match app_env.to_ascii_lowercase().as_str() {
            "production" | "prod" => AddressingMode::Production,
            _ => AddressingMode::Development,
        };
    }

    if let Ok(root_domain) = std::env::var("ROOT_DOMAIN") {
        if !root_domain.is_empty() {
            config.zones.root_domain = root_domain;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; keep each one to a distinct key
    // set and restore it afterwards.

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = load_config(None).expect("default config");
        assert_eq!(config.zones.root_domain, "example.com");
    }

    #[test]
    fn test_env_overrides_mode_and_domain() {
        let mut config = RouterConfig::default();
        std::env::set_var("APP_ENV", "production");
        std::env::set_var("ROOT_DOMAIN", "zones.dev");
        apply_env_overrides(&mut config);
        std::env::remove_var("APP_ENV");
        std::env::remove_var("ROOT_DOMAIN");

        assert!(config.zones.mode.is_production());
        assert_eq!(config.zones.root_domain, "zones.dev");
    }

    #[test]
    fn test_invalid_config_surfaces_validation_errors() {
        let mut config = RouterConfig::default();
        config.listener.bind_address = "nonsense".into();
        let err = validate_config(&config).unwrap_err();
        let message = format!("{}", ConfigError::Validation(err));
        assert!(message.contains("bind_address"));
    }
}
