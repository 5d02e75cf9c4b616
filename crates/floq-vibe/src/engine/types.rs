//! Engine output types.

use floq_core::types::{ComponentScores, Vibe, VibeVector};
use serde::{Deserialize, Serialize};

use crate::inputs::VenueIntelligence;

/// Result of one `evaluate` call. Owned by the caller; never mutated after return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineResult {
    /// Probability distribution over vibes; sums to 1.
    pub vector: VibeVector,
    /// Per-channel scores, each in [0, 1].
    pub components: ComponentScores,
    /// Overall confidence in [0, 0.95].
    pub confidence01: f64,
    /// Venue passthrough for display, present when venue intelligence was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_intelligence: Option<VenueIntelligenceSummary>,
    /// Wall-clock time spent computing this result.
    pub calc_ms: f64,
}

impl EngineResult {
    /// The most likely vibe.
    pub fn primary_vibe(&self) -> Vibe {
        self.vector.dominant()
    }

    pub fn within_budget(&self, budget_ms: f64) -> bool {
        self.calc_ms < budget_ms
    }
}

/// The slice of venue intelligence the UI shows next to the vibe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueIntelligenceSummary {
    pub venue_id: String,
    pub name: Option<String>,
    pub primary_vibe: Vibe,
    pub vibe_confidence: f64,
    pub energy_level: f64,
    pub is_open: Option<bool>,
    pub rating: Option<f64>,
}

impl From<&VenueIntelligence> for VenueIntelligenceSummary {
    fn from(venue: &VenueIntelligence) -> Self {
        Self {
            venue_id: venue.venue_id.clone(),
            name: venue.name.clone(),
            primary_vibe: venue.primary_vibe,
            vibe_confidence: venue.vibe_confidence,
            energy_level: venue.energy_level,
            is_open: venue.is_open,
            rating: venue.rating,
        }
    }
}
