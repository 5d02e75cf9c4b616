//! Real-time learning feedback service.
//!
//! Keeps a bounded, newest-first log of learning events, runs pattern
//! heuristics when corrections arrive, and fans events out to observers.
//! One instance per user session; share it behind an `Arc`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, FixedOffset, Offset, Timelike, Utc};
use floq_core::config::LearningConfig;
use floq_core::constants::MAX_LEARNING_EVENTS;
use floq_core::types::{ComponentScores, Vibe};
use rustc_hash::FxHashSet;
use uuid::Uuid;

use crate::clock::{hours, saturating_sub, Clock, SystemClock};
use crate::detection::{detect_temporal, detect_venue, CorrectionSample, PatternFinding};
use crate::dispatcher::{EventDispatcher, LearningEventHandler, SubscriptionId};
use crate::narrative;
use crate::types::{
    EventDetail, LearningEvent, LearningEventKind, LearningFeedback, LearningStats, PatternType,
};

const STRONGEST_PATTERNS: usize = 3;
const RECENT_DISCOVERIES: usize = 3;
const GROWTH_WINDOW: usize = 5;

/// What one `record_correction` call produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionOutcome {
    pub correction: LearningEvent,
    /// Pattern events the correction triggered, in emission order.
    pub patterns: Vec<LearningEvent>,
}

#[derive(Debug, Default)]
struct LogState {
    /// Newest first.
    events: VecDeque<LearningEvent>,
    total_corrections: u64,
}

pub struct RealTimeLearningFeedback {
    config: LearningConfig,
    clock: Arc<dyn Clock>,
    local_offset: FixedOffset,
    state: Mutex<LogState>,
    dispatcher: EventDispatcher,
}

impl RealTimeLearningFeedback {
    pub fn new(config: LearningConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_defaults() -> Self {
        Self::new(LearningConfig::default())
    }

    /// `config.capacity` is clamped to `1..=MAX_LEARNING_EVENTS` even when
    /// the config was never validated.
    pub fn with_clock(mut config: LearningConfig, clock: Arc<dyn Clock>) -> Self {
        let capacity = config.capacity.clamp(1, MAX_LEARNING_EVENTS);
        if capacity != config.capacity {
            tracing::warn!(
                requested = config.capacity,
                capacity,
                "learning capacity out of range, clamped"
            );
            config.capacity = capacity;
        }
        Self {
            state: Mutex::new(LogState {
                events: VecDeque::with_capacity(capacity),
                total_corrections: 0,
            }),
            config,
            clock,
            local_offset: Utc.fix(),
            dispatcher: EventDispatcher::default(),
        }
    }

    /// Offset used to derive the user's local hour of day for corrections.
    pub fn with_local_offset(mut self, offset: FixedOffset) -> Self {
        self.local_offset = offset;
        self
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    // ---- observers ----

    pub fn subscribe(&self, handler: Arc<dyn LearningEventHandler>) -> SubscriptionId {
        self.dispatcher.subscribe(handler)
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.dispatcher.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.dispatcher.len()
    }

    // ---- recording ----

    /// Record a free-form event.
    pub fn record_event(
        &self,
        kind: LearningEventKind,
        description: impl Into<String>,
        impact: impl Into<String>,
        confidence: f64,
        metadata: Option<serde_json::Value>,
    ) -> LearningEvent {
        let event = self.build_event(
            kind,
            description.into(),
            impact.into(),
            confidence,
            EventDetail::None,
            metadata,
        );
        self.commit(event)
    }

    /// Record a user correcting the predicted vibe, then run pattern detection.
    pub fn record_correction(
        &self,
        predicted: Vibe,
        corrected: Vibe,
        components: &ComponentScores,
        learning_strength: f64,
    ) -> CorrectionOutcome {
        let components = components.clamped();
        let (dominant, _) = components.dominant();
        let now = self.clock.now();
        let hour_of_day = self.local_hour(now);
        let learning_strength = unit(learning_strength);

        let event = LearningEvent {
            id: Uuid::new_v4().to_string(),
            kind: LearningEventKind::Correction,
            timestamp: now,
            description: narrative::correction_description(predicted, corrected),
            impact: narrative::correction_impact(dominant, corrected),
            confidence: learning_strength,
            detail: EventDetail::Correction {
                predicted,
                corrected,
                components,
                learning_strength,
                dominant,
                hour_of_day,
            },
            metadata: None,
        };
        // Step 1: Commit the correction and snapshot the history it joined
        let (correction, history) = self.commit_with(event, correction_samples);

        // Step 2: Detect patterns against that history
        let latest = CorrectionSample {
            corrected,
            components,
            dominant,
            hour_of_day,
            timestamp: now,
        };
        let findings = [
            detect_temporal(&latest, &history, &self.config),
            detect_venue(&latest, &history, &self.config),
        ];

        let patterns: Vec<LearningEvent> = findings
            .into_iter()
            .flatten()
            .map(|finding| self.record_finding(finding))
            .collect();

        tracing::debug!(
            %predicted,
            %corrected,
            dominant = %dominant,
            hour_of_day,
            patterns = patterns.len(),
            "correction recorded"
        );

        CorrectionOutcome {
            correction,
            patterns,
        }
    }

    /// Record a pattern found elsewhere (e.g. a server-side analysis job).
    pub fn record_pattern_detection(
        &self,
        pattern_type: PatternType,
        description: impl Into<String>,
        confidence: f64,
        supporting_events: usize,
    ) -> LearningEvent {
        let description = description.into();
        let event = self.build_event(
            LearningEventKind::PatternDetected,
            description,
            narrative::pattern_impact(pattern_type.name()),
            confidence,
            EventDetail::Pattern {
                pattern_type,
                supporting_events,
            },
            None,
        );
        tracing::info!(pattern_type = %pattern_type, "learning pattern detected");
        self.commit(event)
    }

    pub fn record_confidence_boost(
        &self,
        source: impl Into<String>,
        old_confidence: f64,
        new_confidence: f64,
    ) -> LearningEvent {
        let source = source.into();
        let old_confidence = unit(old_confidence);
        let new_confidence = unit(new_confidence);
        let verb = if new_confidence >= old_confidence {
            "improved"
        } else {
            "dropped"
        };
        let event = self.build_event(
            LearningEventKind::ConfidenceBoost,
            format!("Confidence from {source} {verb}"),
            narrative::confidence_impact(&source, old_confidence, new_confidence),
            new_confidence,
            EventDetail::ConfidenceBoost {
                source,
                old_confidence,
                new_confidence,
            },
            None,
        );
        self.commit(event)
    }

    pub fn record_insight(
        &self,
        description: impl Into<String>,
        impact: impl Into<String>,
        confidence: f64,
    ) -> LearningEvent {
        self.record_event(LearningEventKind::Insight, description, impact, confidence, None)
    }

    // ---- reading ----

    /// Snapshot of the log for the UI.
    pub fn get_current_feedback(&self) -> LearningFeedback {
        let now = self.clock.now();
        let horizon = saturating_sub(now, hours(self.config.lookback_hours));
        let state = self.lock();

        let recent_events: Vec<LearningEvent> = state
            .events
            .iter()
            .take(self.config.recent_events)
            .cloned()
            .collect();

        let is_actively_learning = state
            .events
            .iter()
            .any(|e| e.is_correction() && e.timestamp >= horizon);

        let stats = LearningStats {
            total_corrections: state.total_corrections,
            strongest_patterns: strongest_patterns(&state.events),
            recent_discoveries: state
                .events
                .iter()
                .filter(|e| {
                    matches!(
                        e.kind,
                        LearningEventKind::PatternDetected | LearningEventKind::Insight
                    )
                })
                .filter(|e| e.timestamp >= horizon)
                .take(RECENT_DISCOVERIES)
                .map(|e| e.description.clone())
                .collect(),
            average_confidence_growth: average_confidence_growth(&state.events),
        };

        LearningFeedback {
            recent_events,
            is_actively_learning,
            next_milestone: narrative::next_milestone(
                state.total_corrections,
                &self.config.milestones,
            ),
            stats,
        }
    }

    /// All buffered events, newest first.
    pub fn events(&self) -> Vec<LearningEvent> {
        self.lock().events.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().events.is_empty()
    }

    pub fn total_corrections(&self) -> u64 {
        self.lock().total_corrections
    }

    // ---- maintenance ----

    /// Drop events older than `max_age`. Returns how many were removed.
    ///
    /// The lifetime correction count is unaffected.
    pub fn cleanup_old_events(&self, max_age: Duration) -> usize {
        let cutoff = saturating_sub(self.clock.now(), max_age);
        let mut state = self.lock();
        let before = state.events.len();
        state.events.retain(|e| e.timestamp >= cutoff);
        let removed = before - state.events.len();
        if removed > 0 {
            tracing::debug!(removed, "expired learning events dropped");
        }
        removed
    }

    /// `cleanup_old_events` with the configured retention.
    pub fn cleanup_expired(&self) -> usize {
        let retention = Duration::try_days(self.config.retention_days).unwrap_or(Duration::MAX);
        self.cleanup_old_events(retention)
    }

    /// Clear the log and the lifetime correction count.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.events.clear();
        state.total_corrections = 0;
    }

    // ---- internals ----

    fn lock(&self) -> MutexGuard<'_, LogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn local_hour(&self, at: DateTime<Utc>) -> u32 {
        at.with_timezone(&self.local_offset).hour()
    }

    fn build_event(
        &self,
        kind: LearningEventKind,
        description: String,
        impact: String,
        confidence: f64,
        detail: EventDetail,
        metadata: Option<serde_json::Value>,
    ) -> LearningEvent {
        LearningEvent {
            id: Uuid::new_v4().to_string(),
            kind,
            timestamp: self.clock.now(),
            description,
            impact,
            confidence: unit(confidence),
            detail,
            metadata,
        }
    }

    /// Insert at the front, evict past capacity, then notify.
    fn commit(&self, event: LearningEvent) -> LearningEvent {
        self.commit_with(event, |_| ()).0
    }

    /// `commit`, also reading the log under the same lock as the insert.
    /// Observers run after the lock is released.
    fn commit_with<R>(
        &self,
        event: LearningEvent,
        read: impl FnOnce(&VecDeque<LearningEvent>) -> R,
    ) -> (LearningEvent, R) {
        let snapshot = {
            let mut state = self.lock();
            if event.is_correction() {
                state.total_corrections += 1;
            }
            state.events.push_front(event.clone());
            state.events.truncate(self.config.capacity);
            read(&state.events)
        };
        self.dispatcher.dispatch(&event);
        (event, snapshot)
    }

    fn record_finding(&self, finding: PatternFinding) -> LearningEvent {
        self.record_pattern_detection(
            finding.pattern_type,
            finding.description,
            finding.confidence,
            finding.supporting_events,
        )
    }
}

impl Default for RealTimeLearningFeedback {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for RealTimeLearningFeedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealTimeLearningFeedback")
            .field("config", &self.config)
            .field("local_offset", &self.local_offset)
            .field("events", &self.len())
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

fn unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.5
    }
}

fn correction_samples(events: &VecDeque<LearningEvent>) -> Vec<CorrectionSample> {
    events
        .iter()
        .filter_map(|e| match &e.detail {
            EventDetail::Correction {
                corrected,
                components,
                dominant,
                hour_of_day,
                ..
            } => Some(CorrectionSample {
                corrected: *corrected,
                components: *components,
                dominant: *dominant,
                hour_of_day: *hour_of_day,
                timestamp: e.timestamp,
            }),
            _ => None,
        })
        .collect()
}

fn strongest_patterns(events: &VecDeque<LearningEvent>) -> Vec<String> {
    let mut patterns: Vec<&LearningEvent> = events
        .iter()
        .filter(|e| e.kind == LearningEventKind::PatternDetected)
        .collect();
    // Stable sort keeps newer events first among equal confidences.
    patterns.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut seen = FxHashSet::default();
    patterns
        .into_iter()
        .filter(|e| seen.insert(e.description.as_str()))
        .take(STRONGEST_PATTERNS)
        .map(|e| e.description.clone())
        .collect()
}

fn average_confidence_growth(events: &VecDeque<LearningEvent>) -> f64 {
    let deltas: Vec<f64> = events
        .iter()
        .filter_map(|e| match e.detail {
            EventDetail::ConfidenceBoost {
                old_confidence,
                new_confidence,
                ..
            } => Some(new_confidence - old_confidence),
            _ => None,
        })
        .take(GROWTH_WINDOW)
        .collect();
    if deltas.is_empty() {
        0.0
    } else {
        deltas.iter().sum::<f64>() / deltas.len() as f64
    }
}
