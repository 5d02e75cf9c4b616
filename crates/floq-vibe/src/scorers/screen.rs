//! Screen-activity scorer.

use floq_core::config::EngineConfig;
use floq_core::types::Vibe;

use crate::inputs::EngineInputs;

use super::ScorerOutput;

pub fn score_screen_activity(inputs: &EngineInputs, _config: &EngineConfig) -> ScorerOutput {
    let ratio = inputs.screen_on_ratio01;
    if !ratio.is_finite() {
        return ScorerOutput::neutral();
    }
    let ratio = ratio.clamp(0.0, 1.0);
    let output = ScorerOutput::new(ratio);

    if ratio > 0.7 {
        // Heads-down on the phone: browsing, looking for something.
        output.with_nudge(Vibe::Curious, 0.4)
    } else if ratio < 0.15 {
        // Phone away: present with whoever is around.
        output.with_nudge(Vibe::Open, 0.3)
    } else {
        output
    }
}
