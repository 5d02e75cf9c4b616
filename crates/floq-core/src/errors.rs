//! Error types shared across Floq crates.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {message}")]
    Parse { message: String },

    #[error("invalid config value for `{field}`: {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse {
            message: e.to_string(),
        }
    }
}

/// A string did not name a known vibe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vibe: {value}")]
pub struct ParseVibeError {
    pub value: String,
}

/// A string did not name a known evidence channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown component: {value}")]
pub struct ParseComponentError {
    pub value: String,
}
