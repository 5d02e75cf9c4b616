//! JSON value mapping between JS objects and engine types.

use floq_core::types::{ComponentScores, Vibe};
use floq_vibe::EngineInputs;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error_codes;

pub fn from_js<T: DeserializeOwned>(value: serde_json::Value, what: &str) -> napi::Result<T> {
    serde_json::from_value(value)
        .map_err(|e| error_codes::error(error_codes::INVALID_INPUT, format!("invalid {what}: {e}")))
}

pub fn to_js<T: Serialize>(value: &T) -> napi::Result<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| error_codes::error(error_codes::SERIALIZATION_ERROR, e))
}

/// Parse engine inputs. An absent or null `patternsEnabled` takes `default_patterns`.
pub fn engine_inputs(value: serde_json::Value, default_patterns: bool) -> napi::Result<EngineInputs> {
    let explicit = value
        .get("patternsEnabled")
        .is_some_and(|flag| !flag.is_null());
    let mut inputs: EngineInputs = from_js(value, "engine inputs")?;
    if !explicit {
        inputs.patterns_enabled = default_patterns;
    }
    Ok(inputs)
}

pub fn vibe(name: &str) -> napi::Result<Vibe> {
    name.parse()
        .map_err(|e| error_codes::error(error_codes::INVALID_INPUT, e))
}

pub fn components(value: Option<serde_json::Value>) -> napi::Result<ComponentScores> {
    match value {
        Some(v) => from_js(v, "component scores"),
        None => Ok(ComponentScores::default()),
    }
}
