//! # floq-core
//!
//! Foundation crate for the Floq vibe engine.
//! Shared types, errors, configuration, tracing setup, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::{CircadianConfig, EngineConfig, FloqConfig, LearningConfig};
pub use errors::{ConfigError, ParseComponentError, ParseVibeError};
pub use types::{Component, ComponentScores, Vibe, VibeVector};
