//! Dashboard configuration: a small TOML file plus environment fallbacks.
//!
//! Entrypoints:
//! - Parse from a TOML string: [`load_config_str`]
//! - Read and parse a file path: [`load_config_path`]
//! - Resolve from the environment: [`DashboardConfig::from_env`]

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::granularity::{Granularity, ParseGranularityError};

/// Environment variable naming the analytics service base URL.
pub const BASE_URL_ENV: &str = "REVIEW_DASHBOARD_BASE_URL";

/// Environment variable overriding the period granularity (`D`, `W`, `M`).
pub const FREQ_ENV: &str = "REVIEW_DASHBOARD_FREQ";

/// Errors related to dashboard configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable required by the application is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// A granularity code could not be parsed.
    #[error(transparent)]
    Granularity(#[from] ParseGranularityError),

    /// The config file could not be read.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// The config file did not parse as the expected TOML shape.
    #[error("malformed config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for one dashboard deployment.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Base URL of the analytics service (e.g., `http://127.0.0.1:8000`).
    pub base_url: String,

    /// Period granularity for the time-bucketed panels.
    #[serde(default)]
    pub freq: Granularity,
}

impl DashboardConfig {
    /// Resolves the configuration from `REVIEW_DASHBOARD_BASE_URL` and the
    /// optional `REVIEW_DASHBOARD_FREQ`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_var(BASE_URL_ENV)?;
        let freq = match std::env::var(FREQ_ENV) {
            Ok(code) => code.parse()?,
            Err(_) => Granularity::default(),
        };
        Ok(Self { base_url, freq })
    }
}

/// Parses a configuration from a TOML string.
pub fn load_config_str(s: &str) -> Result<DashboardConfig, ConfigError> {
    Ok(toml::from_str(s)?)
}

/// Reads and parses a configuration file.
pub fn load_config_path(path: impl AsRef<Path>) -> Result<DashboardConfig, ConfigError> {
    let s = std::fs::read_to_string(path)?;
    load_config_str(&s)
}

/// Reads an environment variable, returning a structured error if it's
/// missing.
fn get_env_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config = load_config_str(
            r#"
            base_url = "http://127.0.0.1:8000"
            freq = "daily"
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.freq, Granularity::Daily);
    }

    #[test]
    fn freq_defaults_to_monthly() {
        let config = load_config_str(r#"base_url = "http://localhost:8000""#).unwrap();
        assert_eq!(config.freq, Granularity::Monthly);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = load_config_str(
            r#"
            base_url = "http://localhost:8000"
            retries = 3
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    #[serial]
    fn resolves_from_environment() {
        unsafe {
            std::env::set_var(BASE_URL_ENV, "http://reviews.internal:8000");
            std::env::set_var(FREQ_ENV, "W");
        }
        let config = DashboardConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://reviews.internal:8000");
        assert_eq!(config.freq, Granularity::Weekly);
        unsafe {
            std::env::remove_var(BASE_URL_ENV);
            std::env::remove_var(FREQ_ENV);
        }
    }

    #[test]
    #[serial]
    fn missing_base_url_is_a_structured_error() {
        unsafe {
            std::env::remove_var(BASE_URL_ENV);
        }
        match DashboardConfig::from_env() {
            Err(ConfigError::MissingEnvVar(name)) => assert_eq!(name, BASE_URL_ENV),
            other => panic!("expected MissingEnvVar, got {other:?}"),
        }
    }
}
