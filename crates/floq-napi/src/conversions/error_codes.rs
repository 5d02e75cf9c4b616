//! Error codes prefixed onto every `napi::Error` reason as `[CODE] message`.
//!
//! The TypeScript layer matches on the bracketed code.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Build a `napi::Error` carrying `code`.
pub fn error(code: &str, message: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(format!("[{code}] {message}"))
}
