//! Component scorers, one pure function per evidence source.
//!
//! Scorers are independent of each other; the engine composes them.
//! Each returns a score (nominally [0, 1]) and signed nudges toward the vibes
//! the evidence supports. The engine clamps scores at its boundary.

pub mod circadian;
pub mod daylight;
pub mod motion;
pub mod screen;
pub mod venue;
pub mod weather;

use floq_core::types::Vibe;
use smallvec::SmallVec;

/// A signed push toward (positive) or away from (negative) one vibe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nudge {
    pub vibe: Vibe,
    pub weight: f64,
}

impl Nudge {
    pub const fn new(vibe: Vibe, weight: f64) -> Self {
        Self { vibe, weight }
    }
}

pub type Nudges = SmallVec<[Nudge; 4]>;

/// What a scorer reports for one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerOutput {
    pub score: f64,
    pub nudges: Nudges,
}

impl ScorerOutput {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            nudges: Nudges::new(),
        }
    }

    /// A score with no opinion about the distribution.
    pub fn neutral() -> Self {
        Self::new(0.5)
    }

    pub fn with_nudge(mut self, vibe: Vibe, weight: f64) -> Self {
        self.nudges.push(Nudge::new(vibe, weight));
        self
    }
}

pub use circadian::score_circadian;
pub use daylight::score_daylight;
pub use motion::score_motion;
pub use screen::score_screen_activity;
pub use venue::score_venue;
pub use weather::score_weather;
