//! Core types for the learning feedback log.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use floq_core::types::{Component, ComponentScores, Vibe};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What kind of learning moment an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningEventKind {
    Correction,
    PatternDetected,
    ConfidenceBoost,
    Insight,
}

impl LearningEventKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Correction => "correction",
            Self::PatternDetected => "pattern_detected",
            Self::ConfidenceBoost => "confidence_boost",
            Self::Insight => "insight",
        }
    }
}

impl fmt::Display for LearningEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LearningEventKind {
    type Err = ParseLearningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "correction" => Ok(Self::Correction),
            "pattern_detected" => Ok(Self::PatternDetected),
            "confidence_boost" => Ok(Self::ConfidenceBoost),
            "insight" => Ok(Self::Insight),
            other => Err(ParseLearningError::EventKind(other.to_string())),
        }
    }
}

/// Family of a detected pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    Temporal,
    Venue,
    Social,
    Activity,
}

impl PatternType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Temporal => "temporal",
            Self::Venue => "venue",
            Self::Social => "social",
            Self::Activity => "activity",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternType {
    type Err = ParseLearningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "temporal" => Ok(Self::Temporal),
            "venue" => Ok(Self::Venue),
            "social" => Ok(Self::Social),
            "activity" => Ok(Self::Activity),
            other => Err(ParseLearningError::PatternType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLearningError {
    #[error("unknown learning event kind: {0}")]
    EventKind(String),
    #[error("unknown pattern type: {0}")]
    PatternType(String),
}

/// Structured payload of an event, by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventDetail {
    #[serde(rename_all = "camelCase")]
    Correction {
        predicted: Vibe,
        corrected: Vibe,
        components: ComponentScores,
        learning_strength: f64,
        dominant: Component,
        /// Local hour of day the correction was made.
        hour_of_day: u32,
    },
    #[serde(rename_all = "camelCase")]
    Pattern {
        pattern_type: PatternType,
        supporting_events: usize,
    },
    #[serde(rename_all = "camelCase")]
    ConfidenceBoost {
        source: String,
        old_confidence: f64,
        new_confidence: f64,
    },
    None,
}

/// One entry in the learning log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LearningEventKind,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub impact: String,
    pub confidence: f64,
    pub detail: EventDetail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl LearningEvent {
    pub fn is_correction(&self) -> bool {
        self.kind == LearningEventKind::Correction
    }

    pub fn pattern_type(&self) -> Option<PatternType> {
        match self.detail {
            EventDetail::Pattern { pattern_type, .. } => Some(pattern_type),
            _ => None,
        }
    }
}

/// Derived, read-only view of the log for the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningFeedback {
    /// Newest first.
    pub recent_events: Vec<LearningEvent>,
    pub is_actively_learning: bool,
    pub next_milestone: String,
    pub stats: LearningStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStats {
    /// Corrections recorded since construction or the last reset.
    pub total_corrections: u64,
    /// Descriptions of the highest-confidence detected patterns.
    pub strongest_patterns: Vec<String>,
    /// Patterns and insights discovered within the lookback window.
    pub recent_discoveries: Vec<String>,
    /// Mean `new - old` over the most recent confidence boosts.
    pub average_confidence_growth: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in [
            LearningEventKind::Correction,
            LearningEventKind::PatternDetected,
            LearningEventKind::ConfidenceBoost,
            LearningEventKind::Insight,
        ] {
            assert_eq!(kind.name().parse::<LearningEventKind>().unwrap(), kind);
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.name());
        }
        assert!("epiphany".parse::<LearningEventKind>().is_err());
    }

    #[test]
    fn test_pattern_type_parse() {
        assert_eq!("venue".parse::<PatternType>().unwrap(), PatternType::Venue);
        assert_eq!(
            "weather".parse::<PatternType>().unwrap_err(),
            ParseLearningError::PatternType("weather".to_string())
        );
    }

    #[test]
    fn test_correction_detail_serializes_camel_case() {
        let detail = EventDetail::Correction {
            predicted: Vibe::Hype,
            corrected: Vibe::Chill,
            components: ComponentScores::default(),
            learning_strength: 0.7,
            dominant: Component::Circadian,
            hour_of_day: 21,
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["kind"], "correction");
        assert_eq!(json["learningStrength"], 0.7);
        assert_eq!(json["hourOfDay"], 21);
        assert_eq!(json["dominant"], "circadian");
    }
}
