//! Layered configuration: defaults, then TOML, then environment overrides.

pub mod engine;
pub mod learning;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::PATTERNS_ENV_VAR;
use crate::errors::ConfigError;

pub use engine::{CircadianConfig, EngineConfig, HourWindow, DEFAULT_HOURLY_CURVE};
pub use learning::LearningConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloqConfig {
    pub engine: EngineConfig,
    pub learning: LearningConfig,
}

impl FloqConfig {
    /// Parse and validate a TOML string. Missing sections use defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: FloqConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, falling back to defaults when it does not exist,
    /// then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_toml(&contents)?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `FLOQ_USE_PATTERNS` if set to a recognizable boolean.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(raw) = std::env::var(PATTERNS_ENV_VAR) {
            self.apply_patterns_override(&raw);
        }
    }

    fn apply_patterns_override(&mut self, raw: &str) {
        match parse_flag(raw) {
            Some(enabled) => self.engine.patterns_enabled = enabled,
            None => tracing::warn!(
                var = PATTERNS_ENV_VAR,
                value = raw,
                "ignoring unrecognized boolean override"
            ),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.learning.validate()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
