//! Per-evaluation input snapshot.

use floq_core::types::Vibe;
use serde::{Deserialize, Serialize};

use crate::patterns::PersonalPatterns;

const DEFAULT_HOUR: u8 = 12;

/// Everything one `evaluate` call looks at.
///
/// Built by the caller from sensor/context readers for each evaluation.
/// Values are not validated: an out-of-range `hour` or a negative speed is a
/// caller contract violation and yields a best-effort result, never a panic.
/// Deserialization is lenient for the same reason: any number is accepted as
/// an hour and wrapped onto the clock, and `null` scalars take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineInputs {
    /// Local wall-clock hour, 0–23.
    #[serde(deserialize_with = "lenient::hour")]
    pub hour: u8,
    #[serde(deserialize_with = "lenient::flag_or_false")]
    pub is_weekend: bool,
    #[serde(deserialize_with = "lenient::finite_or_zero")]
    pub speed_mps: f64,
    /// Fraction of the recent window the screen was on, 0–1.
    #[serde(deserialize_with = "lenient::finite_or_zero")]
    pub screen_on_ratio01: f64,
    #[serde(deserialize_with = "lenient::flag_or_true")]
    pub is_daylight: bool,
    pub weather_energy_offset: Option<f64>,
    pub weather_confidence_boost: Option<f64>,
    #[serde(deserialize_with = "lenient::flag_or_false")]
    pub venue_arrived: bool,
    pub dwell_minutes: Option<f64>,
    pub venue_intelligence: Option<VenueIntelligence>,
    pub patterns: Option<PersonalPatterns>,
    /// Pattern-usage flag, resolved by the caller from configuration.
    #[serde(deserialize_with = "lenient::flag_or_false")]
    pub patterns_enabled: bool,
}

impl Default for EngineInputs {
    fn default() -> Self {
        Self {
            hour: DEFAULT_HOUR,
            is_weekend: false,
            speed_mps: 0.0,
            screen_on_ratio01: 0.0,
            is_daylight: true,
            weather_energy_offset: None,
            weather_confidence_boost: None,
            venue_arrived: false,
            dwell_minutes: None,
            venue_intelligence: None,
            patterns: None,
            patterns_enabled: false,
        }
    }
}

impl EngineInputs {
    /// Hour reduced into 0–23 so table lookups never go out of bounds.
    pub fn hour_of_day(&self) -> u8 {
        self.hour % 24
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};

    use super::DEFAULT_HOUR;

    /// Any finite number, truncated and wrapped onto 0–23.
    pub(super) fn hour<'de, D: Deserializer<'de>>(d: D) -> Result<u8, D::Error> {
        Ok(Option::<f64>::deserialize(d)?
            .filter(|h| h.is_finite())
            .map(|h| (h.trunc() as i64).rem_euclid(24) as u8)
            .unwrap_or(DEFAULT_HOUR))
    }

    pub(super) fn finite_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?
            .filter(|v| v.is_finite())
            .unwrap_or(0.0))
    }

    pub(super) fn flag_or_false<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(Option::<bool>::deserialize(d)?.unwrap_or(false))
    }

    pub(super) fn flag_or_true<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(Option::<bool>::deserialize(d)?.unwrap_or(true))
    }
}

/// Venue snapshot supplied by the external venue-data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueIntelligence {
    pub venue_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub primary_vibe: Vibe,
    /// Confidence in `primary_vibe`, 0–1.
    pub vibe_confidence: f64,
    /// Typical energy of the venue, 0–1.
    #[serde(default)]
    pub energy_level: f64,
    /// How strongly the venue suits each hour of the day (24 entries, 0–1).
    #[serde(default)]
    pub hourly_preference: Option<Vec<f64>>,
    #[serde(default)]
    pub occupancy: Option<Occupancy>,
    #[serde(default)]
    pub is_open: Option<bool>,
    /// Average rating, 0–5.
    #[serde(default)]
    pub rating: Option<f64>,
}

impl VenueIntelligence {
    /// Preference at `hour`, if the curve covers it.
    pub fn preference_at(&self, hour: u8) -> Option<f64> {
        self.hourly_preference
            .as_ref()
            .and_then(|curve| curve.get(hour as usize).copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupancy {
    pub current_count: u32,
    #[serde(default)]
    pub capacity: Option<u32>,
}

impl Occupancy {
    /// Fill ratio in [0, 1]. Without a capacity, 50 people counts as full.
    pub fn ratio(&self) -> f64 {
        const ASSUMED_CAPACITY: f64 = 50.0;
        let capacity = match self.capacity {
            Some(c) if c > 0 => c as f64,
            _ => ASSUMED_CAPACITY,
        };
        (self.current_count as f64 / capacity).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_camel_case() {
        let inputs: EngineInputs =
            serde_json::from_str(r#"{"hour": 21, "isWeekend": true, "speedMps": 1.2}"#).unwrap();
        assert_eq!(inputs.hour, 21);
        assert!(inputs.is_weekend);
        assert!(inputs.is_daylight);
        assert!(inputs.patterns.is_none());
        assert!(!inputs.patterns_enabled);
    }

    #[test]
    fn test_malformed_scalars_take_best_effort_values() {
        let cases = [
            (r#"{"hour": -1}"#, 23),
            (r#"{"hour": 24.5}"#, 0),
            (r#"{"hour": 300}"#, 12),
            (r#"{"hour": 7.9}"#, 7),
            (r#"{"hour": null}"#, DEFAULT_HOUR),
        ];
        for (json, hour) in cases {
            let inputs: EngineInputs = serde_json::from_str(json).unwrap();
            assert_eq!(inputs.hour, hour, "{json}");
        }

        let inputs: EngineInputs = serde_json::from_str(
            r#"{"speedMps": null, "screenOnRatio01": null, "isDaylight": null, "isWeekend": null, "venueArrived": null}"#,
        )
        .unwrap();
        assert_eq!(inputs, EngineInputs::default());
    }

    #[test]
    fn test_hour_of_day_wraps() {
        let inputs = EngineInputs {
            hour: 27,
            ..Default::default()
        };
        assert_eq!(inputs.hour_of_day(), 3);
    }

    #[test]
    fn test_occupancy_ratio() {
        let full = Occupancy {
            current_count: 120,
            capacity: Some(100),
        };
        assert_eq!(full.ratio(), 1.0);
        let unknown = Occupancy {
            current_count: 25,
            capacity: None,
        };
        assert!((unknown.ratio() - 0.5).abs() < 1e-12);
        let zero_capacity = Occupancy {
            current_count: 10,
            capacity: Some(0),
        };
        assert!((zero_capacity.ratio() - 0.2).abs() < 1e-12);
    }
}
