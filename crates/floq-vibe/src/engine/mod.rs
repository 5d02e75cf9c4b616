//! Vibe engine: orchestration, confidence, and result types.

pub mod confidence;
pub mod evaluate;
pub mod types;

pub use confidence::{compute_confidence, ConfidenceBoosts};
pub use evaluate::{evaluate, VibeEngine};
pub use types::{EngineResult, VenueIntelligenceSummary};
