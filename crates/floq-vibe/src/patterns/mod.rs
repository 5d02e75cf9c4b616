//! Personal pattern enrichment: profile types, scorer biasing, store lookup.

pub mod enrichment;
pub mod source;
pub mod types;

pub use enrichment::{active_patterns, chronotype_boost, pattern_confidence_boost, pattern_nudges};
pub use source::{CachedPatternSource, PatternSource, PatternStoreError};
pub use types::{
    Chronotype, Consistency, EnergyType, PersonalPatterns, SocialType, TemporalPreferences,
};
