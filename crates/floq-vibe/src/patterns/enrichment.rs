//! Personal pattern enrichment: how a learned profile biases scorers.
//!
//! Everything here is gated by [`active_patterns`]. With the flag off, or
//! without enough data, no function in this module is reachable from the
//! engine and its output matches the no-patterns path exactly.

use floq_core::config::EngineConfig;
use floq_core::types::Vibe;

use crate::inputs::EngineInputs;
use crate::scorers::{Nudge, Nudges};

use super::types::{Chronotype, EnergyType, PersonalPatterns, SocialType};

/// Strength of the energy/social type nudges before consistency weighting.
const TYPE_NUDGE_WEIGHT: f64 = 0.3;

/// Patterns the engine may use for this evaluation, if any.
pub fn active_patterns(inputs: &EngineInputs) -> Option<&PersonalPatterns> {
    if !inputs.patterns_enabled {
        return None;
    }
    inputs.patterns.as_ref().filter(|p| p.has_enough_data)
}

/// Extra circadian score when the chronotype matches the current hour.
///
/// Capped at `1 - baseline` so the combined score never exceeds 1.
pub fn chronotype_boost(
    patterns: &PersonalPatterns,
    hour: u8,
    baseline: f64,
    config: &EngineConfig,
) -> f64 {
    let circadian = &config.circadian;
    let matches = match patterns.chronotype {
        Chronotype::Lark => circadian.morning_window.contains(hour),
        Chronotype::Owl => circadian.evening_window.contains(hour),
        Chronotype::Balanced => false,
    };
    if !matches {
        return 0.0;
    }
    let boost = circadian.chronotype_boost * patterns.consistency.weight();
    boost.min((1.0 - baseline).max(0.0))
}

/// Vector nudges from temporal preferences and energy/social types.
///
/// Weights are already scaled by consistency; the engine applies them
/// through `adjust_vector` with its nudge gain.
pub fn pattern_nudges(patterns: &PersonalPatterns, hour: u8) -> Nudges {
    let consistency = patterns.consistency.weight();
    let mut nudges = Nudges::new();

    if let Some(prefs) = patterns.preferences_at(hour) {
        for (vibe, weight) in prefs {
            if weight.is_finite() && *weight > 0.0 {
                nudges.push(Nudge::new(*vibe, weight.min(1.0) * consistency));
            }
        }
    }

    match patterns.energy_type {
        EnergyType::High => nudges.push(Nudge::new(Vibe::Hype, TYPE_NUDGE_WEIGHT * consistency)),
        EnergyType::Low => nudges.push(Nudge::new(Vibe::Chill, TYPE_NUDGE_WEIGHT * consistency)),
        EnergyType::Adaptive => {}
    }

    match patterns.social_type {
        SocialType::Social => {
            nudges.push(Nudge::new(Vibe::Social, TYPE_NUDGE_WEIGHT * consistency))
        }
        SocialType::Solo => nudges.push(Nudge::new(Vibe::Solo, TYPE_NUDGE_WEIGHT * consistency)),
        SocialType::Selective => {}
    }

    nudges
}

/// Confidence contributed by an active profile.
pub fn pattern_confidence_boost(patterns: &PersonalPatterns, config: &EngineConfig) -> f64 {
    config.pattern_confidence_boost * patterns.consistency.weight()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::patterns::types::Consistency;

    fn lark() -> PersonalPatterns {
        PersonalPatterns {
            chronotype: Chronotype::Lark,
            consistency: Consistency::VeryConsistent,
            has_enough_data: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_inactive_when_flag_off() {
        let inputs = EngineInputs {
            patterns: Some(lark()),
            patterns_enabled: false,
            ..Default::default()
        };
        assert!(active_patterns(&inputs).is_none());
    }

    #[test]
    fn test_inactive_without_enough_data() {
        let mut patterns = lark();
        patterns.has_enough_data = false;
        let inputs = EngineInputs {
            patterns: Some(patterns),
            patterns_enabled: true,
            ..Default::default()
        };
        assert!(active_patterns(&inputs).is_none());
    }

    #[test]
    fn test_lark_boost_only_in_morning() {
        let config = EngineConfig::default();
        assert!(chronotype_boost(&lark(), 8, 0.55, &config) > 0.0);
        assert_eq!(chronotype_boost(&lark(), 20, 0.82, &config), 0.0);
    }

    #[test]
    fn test_boost_capped_at_headroom() {
        let config = EngineConfig::default();
        let boost = chronotype_boost(&lark(), 8, 0.95, &config);
        assert!((boost - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_balanced_never_boosts() {
        let config = EngineConfig::default();
        let balanced = PersonalPatterns {
            has_enough_data: true,
            ..Default::default()
        };
        for hour in 0..24 {
            assert_eq!(chronotype_boost(&balanced, hour, 0.5, &config), 0.0);
        }
    }

    #[test]
    fn test_pattern_nudges_include_temporal_and_types() {
        let mut prefs = BTreeMap::new();
        prefs.insert(Vibe::Curious, 0.8);
        prefs.insert(Vibe::Down, 0.0);
        let mut temporal = BTreeMap::new();
        temporal.insert(9u8, prefs);

        let patterns = PersonalPatterns {
            energy_type: EnergyType::Low,
            social_type: SocialType::Solo,
            temporal_preferences: Some(temporal),
            ..lark()
        };
        let nudges = pattern_nudges(&patterns, 9);
        let vibes: Vec<Vibe> = nudges.iter().map(|n| n.vibe).collect();
        assert_eq!(vibes, vec![Vibe::Curious, Vibe::Chill, Vibe::Solo]);

        let off_hour = pattern_nudges(&patterns, 15);
        assert_eq!(off_hour.len(), 2);
    }
}
