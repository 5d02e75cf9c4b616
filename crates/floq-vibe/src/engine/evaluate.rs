//! Top-level VibeEngine: fuses scorer nudges into one distribution.

use std::time::Instant;

use floq_core::config::EngineConfig;
use floq_core::types::{Component, ComponentScores, VibeVector};

use crate::inputs::EngineInputs;
use crate::patterns::{active_patterns, pattern_confidence_boost, pattern_nudges};
use crate::scorers::{self, weather, venue, Nudge, ScorerOutput};
use crate::vector::{adjust_vector, renormalize_vector};

use super::confidence::{compute_confidence, ConfidenceBoosts};
use super::types::{EngineResult, VenueIntelligenceSummary};

/// The vibe inference engine.
///
/// Stateless between calls: each `evaluate` allocates and returns a fresh
/// result, so one engine can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct VibeEngine {
    config: EngineConfig,
    baseline: VibeVector,
}

impl VibeEngine {
    /// Create an engine with the given configuration and a uniform seed vector.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            baseline: VibeVector::uniform(),
        }
    }

    /// Create an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Seed the distribution with a custom prior instead of uniform.
    ///
    /// The prior is renormalized; a zero prior falls back to uniform.
    pub fn with_baseline(mut self, mut baseline: VibeVector) -> Self {
        renormalize_vector(&mut baseline);
        self.baseline = if baseline.is_zero() {
            VibeVector::uniform()
        } else {
            baseline
        };
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate one input snapshot.
    pub fn evaluate(&self, inputs: &EngineInputs) -> EngineResult {
        let started = Instant::now();
        let config = &self.config;

        // Step 1: Run every scorer
        let outputs: [(Component, ScorerOutput); Component::COUNT] = [
            (Component::Circadian, scorers::score_circadian(inputs, config)),
            (Component::Motion, scorers::score_motion(inputs, config)),
            (Component::ScreenActivity, scorers::score_screen_activity(inputs, config)),
            (Component::Daylight, scorers::score_daylight(inputs, config)),
            (Component::Weather, scorers::score_weather(inputs, config)),
            (Component::VenueEnergy, scorers::score_venue(inputs, config)),
        ];

        // Step 2: Seed and apply nudges. A scorer's own score scales its
        // nudges between half and full gain.
        let mut vector = self.baseline;
        for (_, output) in &outputs {
            let scale = config.nudge_gain * (0.5 + 0.5 * bounded(output.score));
            apply_nudges(&mut vector, &output.nudges, scale);
        }

        let patterns = active_patterns(inputs);
        if let Some(p) = patterns {
            apply_nudges(&mut vector, &pattern_nudges(p, inputs.hour_of_day()), config.nudge_gain);
        }

        // Step 3: Renormalize
        renormalize_vector(&mut vector);
        if vector.is_zero() {
            vector = self.baseline;
        }

        // Step 4: Clamp components at the boundary
        let mut components = ComponentScores::default();
        for (component, output) in &outputs {
            components.set(*component, output.score);
        }
        let components = components.clamped();

        // Step 5: Confidence
        let boosts = ConfidenceBoosts {
            weather: weather::weather_confidence(inputs, config),
            patterns: patterns
                .map(|p| pattern_confidence_boost(p, config))
                .unwrap_or(0.0),
            venue: venue::venue_confidence(inputs, config),
        };
        let confidence01 = compute_confidence(&vector, &boosts, config);

        // Step 6: Venue passthrough
        let venue_intelligence = inputs
            .venue_intelligence
            .as_ref()
            .map(VenueIntelligenceSummary::from);

        let result = EngineResult {
            vector,
            components,
            confidence01,
            venue_intelligence,
            calc_ms: started.elapsed().as_secs_f64() * 1000.0,
        };
        if !result.within_budget(config.latency_budget_ms) {
            tracing::warn!(
                calc_ms = result.calc_ms,
                budget_ms = config.latency_budget_ms,
                "vibe evaluation exceeded latency budget"
            );
        }
        tracing::debug!(
            primary = %result.primary_vibe(),
            confidence01,
            patterns_applied = patterns.is_some(),
            calc_ms = result.calc_ms,
            "vibe evaluated"
        );

        result
    }
}

impl Default for VibeEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Evaluate with the default engine configuration.
pub fn evaluate(inputs: &EngineInputs) -> EngineResult {
    VibeEngine::with_defaults().evaluate(inputs)
}

fn apply_nudges(vector: &mut VibeVector, nudges: &[Nudge], scale: f64) {
    for nudge in nudges {
        adjust_vector(vector, nudge.vibe, nudge.weight * scale);
    }
}

fn bounded(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use floq_core::constants::NORMALIZATION_TOLERANCE;
    use floq_core::types::Vibe;

    use super::*;
    use crate::inputs::VenueIntelligence;
    use crate::patterns::{Chronotype, Consistency, PersonalPatterns};

    fn owl() -> PersonalPatterns {
        PersonalPatterns {
            chronotype: Chronotype::Owl,
            consistency: Consistency::VeryConsistent,
            has_enough_data: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_inputs_produce_valid_result() {
        let result = evaluate(&EngineInputs::default());
        assert!(result.vector.is_normalized(NORMALIZATION_TOLERANCE));
        assert!(result.components.is_bounded());
        assert!(result.confidence01 <= 0.95);
        assert!(result.venue_intelligence.is_none());
        assert!(result.calc_ms >= 0.0);
        assert!(result.within_budget(80.0));
        assert!(!result.within_budget(0.0));
    }

    #[test]
    fn test_still_at_night_leans_chill() {
        let result = evaluate(&EngineInputs {
            hour: 23,
            is_daylight: false,
            speed_mps: 0.0,
            screen_on_ratio01: 0.05,
            ..Default::default()
        });
        assert!(result.vector[Vibe::Chill] > result.vector[Vibe::Hype]);
        assert!(result.vector[Vibe::Chill] > 0.1);
    }

    #[test]
    fn test_fast_movement_leans_flowing() {
        let result = evaluate(&EngineInputs {
            hour: 14,
            speed_mps: 8.0,
            screen_on_ratio01: 0.3,
            ..Default::default()
        });
        assert_eq!(result.primary_vibe(), Vibe::Flowing);
    }

    #[test]
    fn test_venue_passthrough_and_nudge() {
        let venue = VenueIntelligence {
            venue_id: "club-9".to_string(),
            name: None,
            primary_vibe: Vibe::Weird,
            vibe_confidence: 1.0,
            energy_level: 0.5,
            hourly_preference: None,
            occupancy: None,
            is_open: Some(true),
            rating: None,
        };
        let base = evaluate(&EngineInputs::default());
        let at_venue = evaluate(&EngineInputs {
            venue_arrived: true,
            venue_intelligence: Some(venue),
            ..Default::default()
        });
        let summary = at_venue.venue_intelligence.as_ref().unwrap();
        assert_eq!(summary.venue_id, "club-9");
        assert_eq!(summary.primary_vibe, Vibe::Weird);
        assert!(at_venue.vector[Vibe::Weird] > base.vector[Vibe::Weird]);
        assert!(at_venue.confidence01 > base.confidence01);
    }

    #[test]
    fn test_patterns_raise_confidence_only_when_enabled() {
        let off = evaluate(&EngineInputs {
            hour: 20,
            patterns: Some(owl()),
            ..Default::default()
        });
        let on = evaluate(&EngineInputs {
            hour: 20,
            patterns: Some(owl()),
            patterns_enabled: true,
            ..Default::default()
        });
        let none = evaluate(&EngineInputs {
            hour: 20,
            ..Default::default()
        });
        assert_eq!(off.vector, none.vector);
        assert_eq!(off.confidence01, none.confidence01);
        assert!(on.confidence01 > off.confidence01);
        assert!(on.components.circadian > off.components.circadian);
    }

    #[test]
    fn test_out_of_range_hour_does_not_panic() {
        let result = evaluate(&EngineInputs {
            hour: 200,
            speed_mps: f64::INFINITY,
            screen_on_ratio01: f64::NAN,
            ..Default::default()
        });
        assert!(result.vector.is_normalized(NORMALIZATION_TOLERANCE));
        assert!(result.components.is_bounded());
    }

    #[test]
    fn test_custom_baseline_is_used() {
        let mut prior = VibeVector::zero();
        prior[Vibe::Romantic] = 4.0;
        prior[Vibe::Chill] = 1.0;
        let engine = VibeEngine::with_defaults().with_baseline(prior);
        let result = engine.evaluate(&EngineInputs::default());
        assert_eq!(result.primary_vibe(), Vibe::Romantic);

        let zero_prior = VibeEngine::with_defaults().with_baseline(VibeVector::zero());
        assert!(zero_prior
            .evaluate(&EngineInputs::default())
            .vector
            .is_normalized(NORMALIZATION_TOLERANCE));
    }

    #[test]
    fn test_deterministic_apart_from_timing() {
        let inputs = EngineInputs {
            hour: 18,
            is_weekend: true,
            speed_mps: 1.2,
            screen_on_ratio01: 0.4,
            weather_energy_offset: Some(0.1),
            ..Default::default()
        };
        let engine = VibeEngine::with_defaults();
        let a = engine.evaluate(&inputs);
        let b = engine.evaluate(&inputs);
        assert_eq!(a.vector, b.vector);
        assert_eq!(a.components, b.components);
        assert_eq!(a.confidence01, b.confidence01);
    }
}
