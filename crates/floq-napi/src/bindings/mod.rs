//! NAPI-exported classes and functions.

pub mod engine;
pub mod feedback;
pub mod logging;
