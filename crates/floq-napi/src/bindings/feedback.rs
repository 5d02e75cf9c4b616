//! NAPI bindings for real-time learning feedback: the `LearningFeedbackHandle` class.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use floq_learning::{LearningEvent, LearningEventKind, PatternType, RealTimeLearningFeedback};
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::conversions::{config, error_codes, json};

#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsCorrectionInput {
    pub predicted: String,
    pub corrected: String,
    /// Component scores at prediction time, camelCase keys.
    pub components: Option<serde_json::Value>,
    pub learning_strength: Option<f64>,
}

#[napi(object)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsLearningEventInput {
    /// One of correction, pattern_detected, confidence_boost, insight.
    pub kind: String,
    pub description: String,
    pub impact: String,
    pub confidence: f64,
    pub metadata: Option<serde_json::Value>,
}

type NotificationQueue = Arc<Mutex<VecDeque<LearningEvent>>>;

/// One user's learning feedback log.
///
/// Every recorded event is also queued for `takeNotifications()`, which
/// the host polls to drive toasts and the "learning" indicator.
#[napi]
pub struct LearningFeedbackHandle {
    feedback: Arc<RealTimeLearningFeedback>,
    notifications: NotificationQueue,
}

#[napi]
impl LearningFeedbackHandle {
    /// @param config_toml - Optional TOML configuration string.
    /// @param utc_offset_minutes - Optional local offset, minutes east of UTC.
    #[napi(constructor)]
    pub fn new(config_toml: Option<String>, utc_offset_minutes: Option<i32>) -> napi::Result<Self> {
        let config = config::resolve(config_toml.as_deref())?;

        let mut feedback = RealTimeLearningFeedback::new(config.learning);
        if let Some(minutes) = utc_offset_minutes {
            feedback = feedback.with_local_offset(config::utc_offset(minutes)?);
        }
        let feedback = Arc::new(feedback);
        let capacity = feedback.config().capacity;

        // Bounded like the log itself so an idle host cannot grow it.
        let notifications: NotificationQueue =
            Arc::new(Mutex::new(VecDeque::with_capacity(capacity)));
        let queue = Arc::clone(&notifications);
        feedback.subscribe(Arc::new(move |event: &LearningEvent| {
            let mut queue = queue.lock().unwrap_or_else(PoisonError::into_inner);
            queue.push_back(event.clone());
            while queue.len() > capacity {
                queue.pop_front();
            }
        }));

        Ok(Self {
            feedback,
            notifications,
        })
    }

    /// Returns `{ correction, patterns }`.
    #[napi]
    pub fn record_correction(&self, input: JsCorrectionInput) -> napi::Result<serde_json::Value> {
        let predicted = json::vibe(&input.predicted)?;
        let corrected = json::vibe(&input.corrected)?;
        let components = json::components(input.components)?;
        let outcome = self.feedback.record_correction(
            predicted,
            corrected,
            &components,
            input.learning_strength.unwrap_or(0.5),
        );
        Ok(serde_json::json!({
            "correction": json::to_js(&outcome.correction)?,
            "patterns": json::to_js(&outcome.patterns)?,
        }))
    }

    #[napi]
    pub fn record_event(&self, input: JsLearningEventInput) -> napi::Result<serde_json::Value> {
        let kind: LearningEventKind = input
            .kind
            .parse()
            .map_err(|e| error_codes::error(error_codes::INVALID_INPUT, e))?;
        let event = self.feedback.record_event(
            kind,
            input.description,
            input.impact,
            input.confidence,
            input.metadata,
        );
        json::to_js(&event)
    }

    #[napi]
    pub fn record_pattern_detection(
        &self,
        pattern_type: String,
        description: String,
        confidence: f64,
        supporting_events: Option<u32>,
    ) -> napi::Result<serde_json::Value> {
        let pattern_type: PatternType = pattern_type
            .parse()
            .map_err(|e| error_codes::error(error_codes::INVALID_INPUT, e))?;
        let event = self.feedback.record_pattern_detection(
            pattern_type,
            description,
            confidence,
            supporting_events.unwrap_or(0) as usize,
        );
        json::to_js(&event)
    }

    #[napi]
    pub fn record_confidence_boost(
        &self,
        source: String,
        old_confidence: f64,
        new_confidence: f64,
    ) -> napi::Result<serde_json::Value> {
        let event = self
            .feedback
            .record_confidence_boost(source, old_confidence, new_confidence);
        json::to_js(&event)
    }

    #[napi]
    pub fn record_insight(
        &self,
        description: String,
        impact: String,
        confidence: f64,
    ) -> napi::Result<serde_json::Value> {
        json::to_js(&self.feedback.record_insight(description, impact, confidence))
    }

    #[napi]
    pub fn get_current_feedback(&self) -> napi::Result<serde_json::Value> {
        json::to_js(&self.feedback.get_current_feedback())
    }

    /// Drop events older than `max_age_ms` (default: configured retention).
    /// Returns the number removed.
    #[napi]
    pub fn cleanup_old_events(&self, max_age_ms: Option<f64>) -> napi::Result<u32> {
        let removed = match max_age_ms {
            Some(ms) if ms.is_finite() && ms >= 0.0 => {
                let max_age = chrono::Duration::try_milliseconds(ms as i64)
                    .unwrap_or(chrono::Duration::MAX);
                self.feedback.cleanup_old_events(max_age)
            }
            Some(ms) => {
                return Err(error_codes::error(
                    error_codes::INVALID_INPUT,
                    format!("max_age_ms must be a non-negative number, got {ms}"),
                ))
            }
            None => self.feedback.cleanup_expired(),
        };
        Ok(u32::try_from(removed).unwrap_or(u32::MAX))
    }

    /// Drain events recorded since the last call, oldest first.
    #[napi]
    pub fn take_notifications(&self) -> napi::Result<serde_json::Value> {
        let drained: Vec<LearningEvent> = self
            .notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        json::to_js(&drained)
    }

    #[napi]
    pub fn reset(&self) {
        self.feedback.reset();
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    #[napi(getter)]
    pub fn event_count(&self) -> u32 {
        u32::try_from(self.feedback.len()).unwrap_or(u32::MAX)
    }
}
