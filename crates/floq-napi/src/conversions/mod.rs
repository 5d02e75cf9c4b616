//! Rust ↔ JS conversions.

pub mod config;
pub mod error_codes;
pub mod json;
