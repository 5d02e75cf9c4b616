//! User-facing copy for learning events and milestones.

use floq_core::types::{Component, Vibe};

const MILESTONE_LABELS: [&str; 3] = [
    "unlock personal patterns",
    "sharpen your time-of-day predictions",
    "reach full personalization",
];

pub(crate) fn correction_description(predicted: Vibe, corrected: Vibe) -> String {
    if predicted == corrected {
        format!("You confirmed {corrected}")
    } else {
        format!("You corrected {predicted} to {corrected}")
    }
}

pub(crate) fn correction_impact(dominant: Component, corrected: Vibe) -> String {
    format!(
        "Learning how {} relates to feeling {corrected}",
        dominant.label()
    )
}

pub(crate) fn pattern_impact(pattern: &str) -> String {
    format!("Future {pattern} predictions will lean on this")
}

pub(crate) fn confidence_impact(source: &str, old: f64, new: f64) -> String {
    let delta = (new - old) * 100.0;
    if delta >= 0.0 {
        format!("{source} confidence up {delta:.0} points")
    } else {
        format!("{source} confidence down {:.0} points", -delta)
    }
}

/// Text for the next milestone above `total` corrections.
pub fn next_milestone(total: u64, milestones: &[u64]) -> String {
    match milestones.iter().position(|&m| m > total) {
        Some(index) => {
            let remaining = milestones[index] - total;
            let label = MILESTONE_LABELS
                .get(index)
                .copied()
                .unwrap_or("reach the next milestone");
            let noun = if remaining == 1 { "correction" } else { "corrections" };
            format!("{remaining} more {noun} to {label}")
        }
        None => "Fully personalized. Keep correcting to stay in tune".to_string(),
    }
}
