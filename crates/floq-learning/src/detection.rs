//! Pattern heuristics over the correction history.
//!
//! Both detectors only look at the correction that was just recorded and
//! its peers, so an unrelated correction never re-announces an old pattern.

use chrono::{DateTime, Utc};
use floq_core::config::LearningConfig;
use floq_core::types::{Component, ComponentScores, Vibe};

use crate::clock::{hours, saturating_sub};
use crate::types::PatternType;

/// The parts of a correction event the detectors need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionSample {
    pub corrected: Vibe,
    pub components: ComponentScores,
    pub dominant: Component,
    pub hour_of_day: u32,
    pub timestamp: DateTime<Utc>,
}

/// A pattern a detector believes is real.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternFinding {
    pub pattern_type: PatternType,
    pub vibe: Vibe,
    pub description: String,
    pub confidence: f64,
    pub supporting_events: usize,
}

/// Distance between two hours on a 24-hour clock.
pub fn circular_hour_distance(a: u32, b: u32) -> u32 {
    let d = (a % 24).abs_diff(b % 24);
    d.min(24 - d)
}

fn finding_confidence(supporting: usize) -> f64 {
    (0.5 + 0.1 * supporting as f64).min(0.9)
}

/// Same corrected vibe, near the same hour of day, within the lookback.
///
/// `history` must include `latest`.
pub fn detect_temporal(
    latest: &CorrectionSample,
    history: &[CorrectionSample],
    config: &LearningConfig,
) -> Option<PatternFinding> {
    let horizon = saturating_sub(latest.timestamp, hours(config.lookback_hours));
    let supporting = history
        .iter()
        .filter(|s| s.timestamp >= horizon)
        .filter(|s| s.corrected == latest.corrected)
        .filter(|s| {
            circular_hour_distance(s.hour_of_day, latest.hour_of_day) <= config.pattern_hour_window
        })
        .count();

    if supporting < config.min_pattern_corrections {
        return None;
    }

    Some(PatternFinding {
        pattern_type: PatternType::Temporal,
        vibe: latest.corrected,
        description: format!(
            "You tend to feel {} around {}:00",
            latest.corrected,
            latest.hour_of_day % 24
        ),
        confidence: finding_confidence(supporting),
        supporting_events: supporting,
    })
}

fn venue_driven(sample: &CorrectionSample, config: &LearningConfig) -> bool {
    sample.dominant == Component::VenueEnergy
        && sample.components.venue_energy > config.venue_dominance_threshold
}

/// Corrections where venue energy dominated the reading.
pub fn detect_venue(
    latest: &CorrectionSample,
    history: &[CorrectionSample],
    config: &LearningConfig,
) -> Option<PatternFinding> {
    if !venue_driven(latest, config) {
        return None;
    }
    let horizon = saturating_sub(latest.timestamp, hours(config.lookback_hours));
    let supporting = history
        .iter()
        .filter(|s| s.timestamp >= horizon)
        .filter(|s| venue_driven(s, config))
        .count();

    if supporting < config.min_pattern_corrections {
        return None;
    }

    Some(PatternFinding {
        pattern_type: PatternType::Venue,
        vibe: latest.corrected,
        description: format!(
            "Venue energy shapes your vibe. Busy spots lean you {}",
            latest.corrected
        ),
        confidence: finding_confidence(supporting),
        supporting_events: supporting,
    })
}
