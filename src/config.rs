//! Designer configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{DEFAULT_CIRCUIT_NAME, DEFAULT_PARTS_LIMIT, DEFAULT_PLATFORM};

/// Error returned by [`DesignerConfig::from_env`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignerConfig {
    /// Name given to a fresh circuit.
    pub circuit_name: String,
    /// Platform tag written into saved documents.
    pub platform: String,
    /// How many catalog parts to request on connect.
    pub parts_limit: u32,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            circuit_name: DEFAULT_CIRCUIT_NAME.to_owned(),
            platform: DEFAULT_PLATFORM.to_owned(),
            parts_limit: DEFAULT_PARTS_LIMIT,
        }
    }
}

impl DesignerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `CIRCUIT_DEFAULT_NAME`: default `New Circuit`
    /// - `CIRCUIT_PLATFORM`: default `Mixed`
    /// - `CIRCUIT_PARTS_LIMIT`: positive integer, default 500
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `CIRCUIT_PARTS_LIMIT` is not
    /// a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Unset or blank values use
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`DesignerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let parts_limit = match get("CIRCUIT_PARTS_LIMIT") {
            None => defaults.parts_limit,
            Some(raw) => parse_limit(&raw)?,
        };

        Ok(Self {
            circuit_name: get("CIRCUIT_DEFAULT_NAME").unwrap_or(defaults.circuit_name),
            platform: get("CIRCUIT_PLATFORM").unwrap_or(defaults.platform),
            parts_limit,
        })
    }
}

fn parse_limit(raw: &str) -> Result<u32, ConfigError> {
    match raw.parse::<u32>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidValue { var: "CIRCUIT_PARTS_LIMIT".into(), value: raw.to_owned() }),
    }
}
