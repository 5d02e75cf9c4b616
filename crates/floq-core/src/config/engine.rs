//! Tunables for the vibe engine and its scorers.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LATENCY_BUDGET_MS, HOURS_PER_DAY, MAX_CONFIDENCE};
use crate::errors::ConfigError;

/// Baseline circadian energy for each hour of the day.
///
/// Peaks in the early evening, troughs around 04:00.
pub const DEFAULT_HOURLY_CURVE: [f64; HOURS_PER_DAY] = [
    0.35, 0.25, 0.18, 0.12, 0.10, 0.15, // 00-05
    0.30, 0.45, 0.55, 0.62, 0.66, 0.70, // 06-11
    0.72, 0.74, 0.76, 0.78, 0.80, 0.82, // 12-17
    0.84, 0.85, 0.82, 0.74, 0.62, 0.48, // 18-23
];

/// An inclusive range of hours that may wrap past midnight (e.g. 18..=2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    pub start: u8,
    pub end: u8,
}

impl HourWindow {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u8) -> bool {
        if self.start <= self.end {
            hour >= self.start && hour <= self.end
        } else {
            hour >= self.start || hour <= self.end
        }
    }
}

/// Circadian scorer table and chronotype tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircadianConfig {
    /// Baseline score per hour, each in [0, 1].
    pub hourly: [f64; HOURS_PER_DAY],
    /// Added to evening/late-night hours on weekends.
    pub weekend_evening_lift: f64,
    /// Hours that count as "evening" for the weekend lift.
    pub weekend_window: HourWindow,
    /// Maximum chronotype boost before consistency weighting.
    pub chronotype_boost: f64,
    /// Hours where a lark chronotype matches.
    pub morning_window: HourWindow,
    /// Hours where an owl chronotype matches.
    pub evening_window: HourWindow,
}

impl Default for CircadianConfig {
    fn default() -> Self {
        Self {
            hourly: DEFAULT_HOURLY_CURVE,
            weekend_evening_lift: 0.08,
            weekend_window: HourWindow::new(20, 2),
            chronotype_boost: 0.15,
            morning_window: HourWindow::new(6, 11),
            evening_window: HourWindow::new(18, 2),
        }
    }
}

/// Configuration for `VibeEngine::evaluate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default for the pattern-usage flag when the host builds inputs.
    pub patterns_enabled: bool,
    /// Latency target per evaluation; overruns are logged.
    pub latency_budget_ms: f64,
    /// Hard cap on reported confidence.
    pub confidence_cap: f64,
    /// Confidence for a perfectly flat distribution.
    pub confidence_floor: f64,
    /// Confidence added by a fully concentrated distribution.
    pub confidence_span: f64,
    /// Scale from `weight × score` to an `adjust_vector` delta.
    pub nudge_gain: f64,
    /// Maximum confidence contributed by the weather service.
    pub weather_confidence_cap: f64,
    /// Confidence added when active personal patterns were applied.
    pub pattern_confidence_boost: f64,
    /// Confidence added per unit of venue classification confidence.
    pub venue_confidence_weight: f64,
    pub circadian: CircadianConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            patterns_enabled: false,
            latency_budget_ms: DEFAULT_LATENCY_BUDGET_MS,
            confidence_cap: MAX_CONFIDENCE,
            confidence_floor: 0.3,
            confidence_span: 0.6,
            nudge_gain: 0.12,
            weather_confidence_cap: 0.15,
            pattern_confidence_boost: 0.05,
            venue_confidence_weight: 0.05,
            circadian: CircadianConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Check every tunable is within its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.latency_budget_ms > 0.0) {
            return Err(ConfigError::invalid(
                "engine.latency_budget_ms",
                "must be positive",
            ));
        }
        if !(self.confidence_cap > 0.0 && self.confidence_cap <= MAX_CONFIDENCE) {
            return Err(ConfigError::invalid(
                "engine.confidence_cap",
                format!("must be in (0, {MAX_CONFIDENCE}]"),
            ));
        }
        for (field, value) in [
            ("engine.confidence_floor", self.confidence_floor),
            ("engine.confidence_span", self.confidence_span),
            ("engine.nudge_gain", self.nudge_gain),
            ("engine.weather_confidence_cap", self.weather_confidence_cap),
            ("engine.pattern_confidence_boost", self.pattern_confidence_boost),
            ("engine.venue_confidence_weight", self.venue_confidence_weight),
            ("engine.circadian.weekend_evening_lift", self.circadian.weekend_evening_lift),
            ("engine.circadian.chronotype_boost", self.circadian.chronotype_boost),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(field, "must be in [0, 1]"));
            }
        }
        if let Some(hour) = self
            .circadian
            .hourly
            .iter()
            .position(|v| !(0.0..=1.0).contains(v))
        {
            return Err(ConfigError::invalid(
                "engine.circadian.hourly",
                format!("entry for hour {hour} must be in [0, 1]"),
            ));
        }
        for (field, window) in [
            ("engine.circadian.weekend_window", self.circadian.weekend_window),
            ("engine.circadian.morning_window", self.circadian.morning_window),
            ("engine.circadian.evening_window", self.circadian.evening_window),
        ] {
            if window.start > 23 || window.end > 23 {
                return Err(ConfigError::invalid(field, "hours must be in [0, 23]"));
            }
        }
        Ok(())
    }
}
