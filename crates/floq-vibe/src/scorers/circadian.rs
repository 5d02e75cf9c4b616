//! Circadian scorer: time-of-day prior, optionally biased by chronotype.

use floq_core::config::EngineConfig;
use floq_core::types::Vibe;

use crate::inputs::EngineInputs;
use crate::patterns::{active_patterns, chronotype_boost};

use super::ScorerOutput;

/// Coarse part of the day used to pick circadian nudges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    PreDawn,
    Morning,
    Afternoon,
    Evening,
    LateNight,
}

impl DayPart {
    pub fn from_hour(hour: u8) -> Self {
        match hour % 24 {
            3..=5 => Self::PreDawn,
            6..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=21 => Self::Evening,
            _ => Self::LateNight,
        }
    }
}

/// Baseline circadian score from the configured table plus the weekend lift.
pub fn baseline(inputs: &EngineInputs, config: &EngineConfig) -> f64 {
    let hour = inputs.hour_of_day();
    let table = &config.circadian;
    let mut score = table.hourly[hour as usize];
    if inputs.is_weekend && table.weekend_window.contains(hour) {
        score += table.weekend_evening_lift;
    }
    score.clamp(0.0, 1.0)
}

pub fn score_circadian(inputs: &EngineInputs, config: &EngineConfig) -> ScorerOutput {
    let hour = inputs.hour_of_day();
    let mut score = baseline(inputs, config);

    if let Some(patterns) = active_patterns(inputs) {
        score += chronotype_boost(patterns, hour, score, config);
    }

    let output = ScorerOutput::new(score);
    match DayPart::from_hour(hour) {
        DayPart::PreDawn => output.with_nudge(Vibe::Down, 0.4).with_nudge(Vibe::Solo, 0.4),
        DayPart::Morning => output.with_nudge(Vibe::Open, 0.5).with_nudge(Vibe::Curious, 0.3),
        DayPart::Afternoon => output.with_nudge(Vibe::Social, 0.4).with_nudge(Vibe::Flowing, 0.2),
        DayPart::Evening => output.with_nudge(Vibe::Social, 0.5).with_nudge(Vibe::Hype, 0.3),
        DayPart::LateNight => output.with_nudge(Vibe::Weird, 0.4).with_nudge(Vibe::Romantic, 0.3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{Chronotype, Consistency, PersonalPatterns};

    fn at(hour: u8) -> EngineInputs {
        EngineInputs {
            hour,
            ..Default::default()
        }
    }

    #[test]
    fn test_peak_beats_trough() {
        let config = EngineConfig::default();
        let trough = score_circadian(&at(4), &config).score;
        let peak = score_circadian(&at(19), &config).score;
        assert!(peak > trough);
        assert!(peak > 0.8);
        assert!(trough < 0.2);
    }

    #[test]
    fn test_weekend_lifts_late_evening_only() {
        let config = EngineConfig::default();
        let weekday = score_circadian(&at(22), &config).score;
        let weekend = score_circadian(
            &EngineInputs {
                hour: 22,
                is_weekend: true,
                ..Default::default()
            },
            &config,
        )
        .score;
        assert!(weekend > weekday);

        let noon_weekend = score_circadian(
            &EngineInputs {
                hour: 12,
                is_weekend: true,
                ..Default::default()
            },
            &config,
        )
        .score;
        assert_eq!(noon_weekend, score_circadian(&at(12), &config).score);
    }

    #[test]
    fn test_flag_off_matches_no_patterns_bit_for_bit() {
        let config = EngineConfig::default();
        let patterns = PersonalPatterns {
            chronotype: Chronotype::Owl,
            consistency: Consistency::VeryConsistent,
            has_enough_data: true,
            ..Default::default()
        };
        for hour in 0..24 {
            let plain = score_circadian(&at(hour), &config);
            let with_patterns = score_circadian(
                &EngineInputs {
                    hour,
                    patterns: Some(patterns.clone()),
                    patterns_enabled: false,
                    ..Default::default()
                },
                &config,
            );
            assert_eq!(plain.score.to_bits(), with_patterns.score.to_bits());
            assert_eq!(plain.nudges, with_patterns.nudges);
        }
    }

    #[test]
    fn test_owl_boost_never_exceeds_one() {
        let config = EngineConfig::default();
        let inputs = EngineInputs {
            hour: 22,
            is_weekend: true,
            patterns: Some(PersonalPatterns {
                chronotype: Chronotype::Owl,
                consistency: Consistency::VeryConsistent,
                has_enough_data: true,
                ..Default::default()
            }),
            patterns_enabled: true,
            ..Default::default()
        };
        let score = score_circadian(&inputs, &config).score;
        assert!(score <= 1.0);
        assert!(score > baseline(&inputs, &config));
    }

    #[test]
    fn test_day_parts() {
        assert_eq!(DayPart::from_hour(4), DayPart::PreDawn);
        assert_eq!(DayPart::from_hour(8), DayPart::Morning);
        assert_eq!(DayPart::from_hour(14), DayPart::Afternoon);
        assert_eq!(DayPart::from_hour(19), DayPart::Evening);
        assert_eq!(DayPart::from_hour(23), DayPart::LateNight);
        assert_eq!(DayPart::from_hour(1), DayPart::LateNight);
    }
}
