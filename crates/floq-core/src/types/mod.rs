//! Shared value types: vibe categories, vibe vectors, evidence channels.

pub mod components;
pub mod vibe;

pub use components::{Component, ComponentScores};
pub use vibe::{Vibe, VibeVector};
