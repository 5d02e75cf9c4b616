//! Learned personal profile consumed (never mutated) by the engine.

use std::collections::BTreeMap;
use std::fmt;

use floq_core::types::Vibe;
use serde::{Deserialize, Serialize};

/// Circadian preference learned from a user's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chronotype {
    Lark,
    Owl,
    #[default]
    Balanced,
}

impl Chronotype {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lark => "lark",
            Self::Owl => "owl",
            Self::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Chronotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyType {
    High,
    Low,
    #[default]
    Adaptive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialType {
    Social,
    Solo,
    #[default]
    Selective,
}

/// How predictable the user's vibes are; scales every pattern effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consistency {
    VeryConsistent,
    Consistent,
    #[default]
    Variable,
    Chaotic,
}

impl Consistency {
    /// Multiplier applied to pattern-derived boosts and nudges.
    pub fn weight(&self) -> f64 {
        match self {
            Self::VeryConsistent => 1.0,
            Self::Consistent => 0.8,
            Self::Variable => 0.6,
            Self::Chaotic => 0.4,
        }
    }
}

/// Per-hour vibe preference weights, keyed by hour of day.
pub type TemporalPreferences = BTreeMap<u8, BTreeMap<Vibe, f64>>;

/// Snapshot of a user's learned patterns.
///
/// Produced asynchronously by an external learning store. The engine only
/// reads it, and only when the pattern flag is on and `has_enough_data` is set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalPatterns {
    pub chronotype: Chronotype,
    pub energy_type: EnergyType,
    pub social_type: SocialType,
    pub consistency: Consistency,
    pub temporal_preferences: Option<TemporalPreferences>,
    pub has_enough_data: bool,
}

impl PersonalPatterns {
    /// Preferences recorded for `hour`, if any.
    pub fn preferences_at(&self, hour: u8) -> Option<&BTreeMap<Vibe, f64>> {
        self.temporal_preferences
            .as_ref()
            .and_then(|prefs| prefs.get(&hour))
    }
}
