//! Prover configuration: saturation limits.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolution::SaturationLimits;

/// Configuration for proof attempts.
///
/// All limits default to unlimited, which is plain refutation by
/// saturation. A config file is a JSON object:
///
/// ```json
/// { "max_rounds": 20, "max_clauses": 10000 }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProverConfig {
    /// Maximum number of resolution rounds per query (None for unlimited)
    pub max_rounds: Option<usize>,
    /// Maximum size of the working clause set (None for unlimited)
    pub max_clauses: Option<usize>,
}

/// Error while loading or updating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown setting: {0}")]
    UnknownKey(String),

    #[error("invalid value for {key}: {value} (expected a number or 'none')")]
    InvalidValue { key: String, value: String },
}

impl ProverConfig {
    /// Names accepted by [`ProverConfig::set`].
    pub const KEYS: [&'static str; 2] = ["max_rounds", "max_clauses"];

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Update one setting from its textual key and value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let parsed = parse_limit(key, value)?;
        match key {
            "max_rounds" => self.max_rounds = parsed,
            "max_clauses" => self.max_clauses = parsed,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Current value of a setting as text.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "max_rounds" => self.max_rounds,
            "max_clauses" => self.max_clauses,
            _ => return None,
        };
        Some(value.map_or_else(|| "none".to_string(), |n| n.to_string()))
    }

    /// Limits handed to the saturation loop.
    pub fn limits(&self) -> SaturationLimits {
        SaturationLimits {
            max_rounds: self.max_rounds,
            max_clauses: self.max_clauses,
        }
    }
}

fn parse_limit(key: &str, value: &str) -> Result<Option<usize>, ConfigError> {
    if !ProverConfig::KEYS.iter().any(|k| *k == key) {
        return Err(ConfigError::UnknownKey(key.to_string()));
    }
    match value {
        "none" | "unlimited" => Ok(None),
        _ => value
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            }),
    }
}
