//! Overall confidence: distribution concentration plus external boosts.

use floq_core::config::EngineConfig;
use floq_core::constants::MAX_CONFIDENCE;
use floq_core::types::VibeVector;

use crate::vector::concentration;

/// Additive confidence contributions from evidence outside the vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfidenceBoosts {
    pub weather: f64,
    pub patterns: f64,
    pub venue: f64,
}

impl ConfidenceBoosts {
    pub fn total(&self) -> f64 {
        [self.weather, self.patterns, self.venue]
            .iter()
            .filter(|b| b.is_finite())
            .map(|b| b.max(0.0))
            .sum()
    }
}

/// `floor + span × concentration + boosts`, clamped to `[0, cap]`.
///
/// The cap is the configured one, never above [`MAX_CONFIDENCE`].
pub fn compute_confidence(
    vector: &VibeVector,
    boosts: &ConfidenceBoosts,
    config: &EngineConfig,
) -> f64 {
    let cap = config.confidence_cap.min(MAX_CONFIDENCE);
    let raw = config.confidence_floor + config.confidence_span * concentration(vector) + boosts.total();
    if raw.is_finite() {
        raw.clamp(0.0, cap)
    } else {
        0.0
    }
}
