//! Venue-intelligence scorer.
//!
//! Score is `VENUE_BASELINE + enhancement`, enhancement ∈ [0, MAX_VENUE_ENHANCEMENT],
//! so venue energy never exceeds 0.85.

use floq_core::config::EngineConfig;

use crate::inputs::{EngineInputs, VenueIntelligence};

use super::ScorerOutput;

pub const VENUE_BASELINE: f64 = 0.5;
pub const MAX_VENUE_ENHANCEMENT: f64 = 0.35;

const OCCUPANCY_WEIGHT: f64 = 0.12;
const DWELL_WEIGHT: f64 = 0.10;
const ENERGY_WEIGHT: f64 = 0.08;
const PREFERENCE_WEIGHT: f64 = 0.05;
const RATING_WEIGHT: f64 = 0.05;
/// Dwell time at which the dwell term saturates.
const FULL_DWELL_MINUTES: f64 = 60.0;
/// Nudge scale when the venue is known but the user has not arrived.
const NEARBY_NUDGE_SCALE: f64 = 0.6;

pub fn score_venue(inputs: &EngineInputs, _config: &EngineConfig) -> ScorerOutput {
    let venue = inputs.venue_intelligence.as_ref();
    if venue.is_none() && !inputs.venue_arrived {
        return ScorerOutput::new(VENUE_BASELINE);
    }

    let output = ScorerOutput::new(VENUE_BASELINE + enhancement(inputs, venue));
    match venue {
        Some(v) => {
            let mut weight = unit(v.vibe_confidence);
            if !inputs.venue_arrived {
                weight *= NEARBY_NUDGE_SCALE;
            }
            if v.is_open == Some(false) {
                weight *= 0.5;
            }
            output.with_nudge(v.primary_vibe, weight)
        }
        None => output,
    }
}

fn enhancement(inputs: &EngineInputs, venue: Option<&VenueIntelligence>) -> f64 {
    let mut total = 0.0;

    if inputs.venue_arrived {
        if let Some(dwell) = inputs.dwell_minutes.filter(|d| d.is_finite()) {
            total += (dwell.max(0.0) / FULL_DWELL_MINUTES).min(1.0) * DWELL_WEIGHT;
        }
    }

    if let Some(v) = venue {
        if let Some(occupancy) = v.occupancy {
            total += occupancy.ratio() * OCCUPANCY_WEIGHT;
        }
        total += unit(v.energy_level) * ENERGY_WEIGHT;
        if let Some(pref) = v.preference_at(inputs.hour_of_day()) {
            total += unit(pref) * PREFERENCE_WEIGHT;
        }
        if let Some(rating) = v.rating.filter(|r| r.is_finite()) {
            total += (rating / 5.0).clamp(0.0, 1.0) * RATING_WEIGHT;
        }
        if v.is_open == Some(false) {
            total *= 0.5;
        }
    }

    total.clamp(0.0, MAX_VENUE_ENHANCEMENT)
}

/// Confidence contributed by a venue classification.
pub fn venue_confidence(inputs: &EngineInputs, config: &EngineConfig) -> f64 {
    inputs
        .venue_intelligence
        .as_ref()
        .map(|v| unit(v.vibe_confidence) * config.venue_confidence_weight)
        .unwrap_or(0.0)
}

fn unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
