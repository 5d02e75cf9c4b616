//! # floq-vibe
//!
//! Real-time vibe inference for the Floq engine.
//! Fuses circadian priors, motion, screen activity, daylight, weather,
//! venue intelligence and learned personal patterns into a probability
//! distribution over vibes with bounded confidence.
//!
//! Architecture:
//! - `vector`: renormalize / adjust / concentration over a `VibeVector`
//! - `scorers`: one pure scorer per evidence source
//! - `patterns`: personal profile types, scorer biasing, cached store lookup
//! - `engine`: `VibeEngine::evaluate`, confidence, result types

pub mod engine;
pub mod inputs;
pub mod patterns;
pub mod scorers;
pub mod vector;

pub use engine::{evaluate, EngineResult, VenueIntelligenceSummary, VibeEngine};
pub use inputs::{EngineInputs, Occupancy, VenueIntelligence};
pub use patterns::PersonalPatterns;
pub use vector::{adjust_vector, concentration, renormalize_vector};
