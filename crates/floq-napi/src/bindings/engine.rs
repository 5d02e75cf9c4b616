//! Engine bindings: the `VibeEngineHandle` class and `evaluateVibe()`.

use floq_vibe::VibeEngine;
use napi_derive::napi;

use crate::conversions::{config, json};

/// A configured vibe engine.
///
/// `evaluate` takes the camelCase `EngineInputs` object and returns
/// `{ vector, components, confidence01, venueIntelligence?, calcMs }`.
#[napi]
pub struct VibeEngineHandle {
    engine: VibeEngine,
    patterns_enabled: bool,
}

#[napi]
impl VibeEngineHandle {
    /// @param config_toml - Optional TOML configuration string.
    #[napi(constructor)]
    pub fn new(config_toml: Option<String>) -> napi::Result<Self> {
        let config = config::resolve(config_toml.as_deref())?;
        tracing::debug!(
            patterns_enabled = config.engine.patterns_enabled,
            "vibe engine handle created"
        );
        Ok(Self {
            patterns_enabled: config.engine.patterns_enabled,
            engine: VibeEngine::new(config.engine),
        })
    }

    /// Evaluate one snapshot. An absent `patternsEnabled` takes the configured flag.
    #[napi]
    pub fn evaluate(&self, inputs: serde_json::Value) -> napi::Result<serde_json::Value> {
        let inputs = json::engine_inputs(inputs, self.patterns_enabled)?;
        json::to_js(&self.engine.evaluate(&inputs))
    }

    #[napi(getter)]
    pub fn patterns_enabled(&self) -> bool {
        self.patterns_enabled
    }
}

/// Evaluate with default configuration and env overrides.
#[napi(js_name = "evaluateVibe")]
pub fn evaluate_vibe(inputs: serde_json::Value) -> napi::Result<serde_json::Value> {
    let config = config::resolve(None)?;
    let inputs = json::engine_inputs(inputs, config.engine.patterns_enabled)?;
    json::to_js(&VibeEngine::new(config.engine).evaluate(&inputs))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_handle_evaluates_json() {
        let handle = VibeEngineHandle::new(None).unwrap();
        let out = handle
            .evaluate(json!({ "hour": 22, "isDaylight": false, "speedMps": 0.0 }))
            .unwrap();
        assert!(out["vector"]["chill"].is_number());
        assert!(out["confidence01"].as_f64().unwrap() <= 0.95);
        assert!(out.get("venueIntelligence").is_none());
    }

    #[test]
    fn test_handle_rejects_bad_config() {
        let err = VibeEngineHandle::new(Some("[engine]\nnudge_gain = \"lots\"".into()))
            .err()
            .unwrap();
        assert!(err.reason.starts_with("[CONFIG_ERROR]"));
    }
}
