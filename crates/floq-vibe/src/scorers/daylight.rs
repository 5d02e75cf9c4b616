//! Daylight scorer.
//!
//! Polarity: daylight favors open/social and pushes away from down;
//! darkness favors chill/romantic.

use floq_core::config::EngineConfig;
use floq_core::types::Vibe;

use crate::inputs::EngineInputs;

use super::ScorerOutput;

const DAYLIGHT_SCORE: f64 = 0.7;
const DARK_SCORE: f64 = 0.3;

pub fn score_daylight(inputs: &EngineInputs, _config: &EngineConfig) -> ScorerOutput {
    if inputs.is_daylight {
        ScorerOutput::new(DAYLIGHT_SCORE)
            .with_nudge(Vibe::Open, 0.4)
            .with_nudge(Vibe::Social, 0.3)
            .with_nudge(Vibe::Down, -0.3)
    } else {
        ScorerOutput::new(DARK_SCORE)
            .with_nudge(Vibe::Chill, 0.4)
            .with_nudge(Vibe::Romantic, 0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity() {
        let config = EngineConfig::default();
        let day = score_daylight(&EngineInputs::default(), &config);
        let night = score_daylight(
            &EngineInputs {
                is_daylight: false,
                ..Default::default()
            },
            &config,
        );
        assert!(day.score > night.score);
        assert!(day.nudges.iter().any(|n| n.vibe == Vibe::Down && n.weight < 0.0));
        assert!(night.nudges.iter().all(|n| n.weight > 0.0));
    }
}
