//! Weather scorer.
//!
//! The external weather service supplies an energy offset (added to a 0.5
//! baseline) and a confidence boost the engine folds into overall confidence.

use floq_core::config::EngineConfig;
use floq_core::types::Vibe;

use crate::inputs::EngineInputs;

use super::ScorerOutput;

pub fn score_weather(inputs: &EngineInputs, _config: &EngineConfig) -> ScorerOutput {
    let offset = match inputs.weather_energy_offset {
        Some(o) if o.is_finite() => o,
        _ => return ScorerOutput::neutral(),
    };

    let output = ScorerOutput::new((0.5 + offset).clamp(0.0, 1.0));
    let strength = offset.abs().min(1.0);
    if offset > 0.0 {
        output
            .with_nudge(Vibe::Hype, strength)
            .with_nudge(Vibe::Social, strength * 0.5)
    } else if offset < 0.0 {
        output
            .with_nudge(Vibe::Chill, strength)
            .with_nudge(Vibe::Down, strength * 0.5)
    } else {
        output
    }
}

/// Confidence contributed by the weather service, capped by config.
pub fn weather_confidence(inputs: &EngineInputs, config: &EngineConfig) -> f64 {
    match inputs.weather_confidence_boost {
        Some(b) if b.is_finite() => b.clamp(0.0, config.weather_confidence_cap),
        _ => 0.0,
    }
}
