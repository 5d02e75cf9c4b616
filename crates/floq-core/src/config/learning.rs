//! Tunables for the real-time learning feedback service.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_LEARNING_EVENTS;
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Maximum events kept in the log.
    pub capacity: usize,
    /// Events returned in a feedback snapshot.
    pub recent_events: usize,
    /// Hour-of-day distance (either side) for temporal pattern matching.
    pub pattern_hour_window: u32,
    /// How far back pattern detection and "actively learning" look.
    pub lookback_hours: i64,
    /// Corrections needed before a pattern is reported.
    pub min_pattern_corrections: usize,
    /// Venue energy a correction needs for the venue heuristic.
    pub venue_dominance_threshold: f64,
    /// Default age limit for `cleanup_old_events`.
    pub retention_days: i64,
    /// Lifetime correction counts that mark personalization milestones.
    pub milestones: Vec<u64>,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_LEARNING_EVENTS,
            recent_events: 10,
            pattern_hour_window: 2,
            lookback_hours: 24,
            min_pattern_corrections: 2,
            venue_dominance_threshold: 0.6,
            retention_days: 7,
            milestones: vec![5, 10, 20],
        }
    }
}

impl LearningConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_LEARNING_EVENTS).contains(&self.capacity) {
            return Err(ConfigError::invalid(
                "learning.capacity",
                format!("must be between 1 and {MAX_LEARNING_EVENTS}"),
            ));
        }
        if self.recent_events > self.capacity {
            return Err(ConfigError::invalid(
                "learning.recent_events",
                "cannot exceed learning.capacity",
            ));
        }
        if self.pattern_hour_window > 12 {
            return Err(ConfigError::invalid(
                "learning.pattern_hour_window",
                "must be at most 12",
            ));
        }
        if self.lookback_hours <= 0 || self.retention_days <= 0 {
            return Err(ConfigError::invalid(
                "learning.lookback_hours",
                "lookback and retention must be positive",
            ));
        }
        if self.min_pattern_corrections == 0 {
            return Err(ConfigError::invalid(
                "learning.min_pattern_corrections",
                "must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.venue_dominance_threshold) {
            return Err(ConfigError::invalid(
                "learning.venue_dominance_threshold",
                "must be in [0, 1]",
            ));
        }
        if self.milestones.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::invalid(
                "learning.milestones",
                "must be strictly increasing",
            ));
        }
        Ok(())
    }
}
