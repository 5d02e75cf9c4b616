//! # floq-napi
//!
//! NAPI-RS v3 bindings for the Floq vibe engine and learning feedback.
//!
//! Architecture:
//! - `conversions`: config resolution, JSON ↔ Rust input mapping, error codes
//! - `bindings`: NAPI-exported classes and functions (engine, feedback, logging)
//!
//! There is no global state: the host owns one `LearningFeedbackHandle`
//! per user session and as many `VibeEngineHandle`s as it likes.

pub mod bindings;
pub mod conversions;
