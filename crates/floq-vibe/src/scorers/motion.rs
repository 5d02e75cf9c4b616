//! Motion scorer: movement speed blended with screen activity.

use floq_core::config::EngineConfig;
use floq_core::types::Vibe;

use crate::inputs::EngineInputs;

use super::ScorerOutput;

/// Speed at which the activity term saturates (brisk cycling).
const SATURATION_SPEED_MPS: f64 = 6.0;
/// Below this the user is treated as stationary.
const STILL_SPEED_MPS: f64 = 0.5;
/// Above this the user is moving faster than walking pace.
const FAST_SPEED_MPS: f64 = 4.0;
const SPEED_WEIGHT: f64 = 0.7;
const SCREEN_WEIGHT: f64 = 0.3;

pub fn score_motion(inputs: &EngineInputs, _config: &EngineConfig) -> ScorerOutput {
    let speed = finite_or_zero(inputs.speed_mps).max(0.0);
    let screen = finite_or_zero(inputs.screen_on_ratio01).clamp(0.0, 1.0);

    let speed_term = (speed / SATURATION_SPEED_MPS).min(1.0);
    let score = SPEED_WEIGHT * speed_term + SCREEN_WEIGHT * screen;
    let output = ScorerOutput::new(score);

    if speed < STILL_SPEED_MPS {
        if screen < 0.3 {
            output.with_nudge(Vibe::Chill, 0.6).with_nudge(Vibe::Solo, 0.4)
        } else {
            output.with_nudge(Vibe::Chill, 0.3)
        }
    } else if speed > FAST_SPEED_MPS {
        output.with_nudge(Vibe::Flowing, 1.0).with_nudge(Vibe::Hype, 0.3)
    } else {
        output.with_nudge(Vibe::Flowing, 0.8)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving(speed_mps: f64, screen_on_ratio01: f64) -> EngineInputs {
        EngineInputs {
            speed_mps,
            screen_on_ratio01,
            ..Default::default()
        }
    }

    #[test]
    fn test_still_and_idle_nudges_chill_solo() {
        let out = score_motion(&moving(0.1, 0.1), &EngineConfig::default());
        let vibes: Vec<Vibe> = out.nudges.iter().map(|n| n.vibe).collect();
        assert_eq!(vibes, vec![Vibe::Chill, Vibe::Solo]);
        assert!(out.score < 0.1);
    }

    #[test]
    fn test_walking_nudges_flowing() {
        let out = score_motion(&moving(1.4, 0.2), &EngineConfig::default());
        assert_eq!(out.nudges[0].vibe, Vibe::Flowing);
    }

    #[test]
    fn test_fast_saturates() {
        let out = score_motion(&moving(30.0, 1.0), &EngineConfig::default());
        assert!((out.score - 1.0).abs() < 1e-12);
        assert!(out.nudges.iter().any(|n| n.vibe == Vibe::Hype));
    }

    #[test]
    fn test_garbage_speed_is_treated_as_still() {
        let out = score_motion(&moving(f64::NAN, -3.0), &EngineConfig::default());
        assert_eq!(out.score, 0.0);
        assert_eq!(out.nudges[0].vibe, Vibe::Chill);
    }
}
