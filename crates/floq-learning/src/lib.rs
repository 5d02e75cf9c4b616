//! Real-time learning feedback for the vibe engine.
//!
//! Records user corrections and other learning moments in a bounded
//! log, detects simple temporal and venue patterns as corrections
//! arrive, and exposes a snapshot the UI renders as "what I've learned".

pub mod clock;
pub mod detection;
pub mod dispatcher;
pub mod feedback;
mod narrative;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use dispatcher::{LearningEventHandler, SubscriptionId};
pub use feedback::{CorrectionOutcome, RealTimeLearningFeedback};
pub use narrative::next_milestone;
pub use types::{
    EventDetail, LearningEvent, LearningEventKind, LearningFeedback, LearningStats,
    ParseLearningError, PatternType,
};
