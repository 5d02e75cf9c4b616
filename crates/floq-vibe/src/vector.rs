//! Numeric operations over a [`VibeVector`].
//!
//! `adjust_vector` is the only path scorers use to bias the distribution.
//! Shrinkage of the non-target categories is proportional to their current
//! share, so relative ordering among them is preserved.

use floq_core::types::{Vibe, VibeVector};

/// Scale every weight in place so the vector sums to 1.
///
/// A zero (or non-finite) sum leaves the vector all-zero: the "no
/// information" sentinel. Callers must check for it before treating the
/// result as a probability distribution.
pub fn renormalize_vector(vector: &mut VibeVector) {
    let sum = vector.sum();
    if sum > 0.0 && sum.is_finite() {
        for vibe in Vibe::ALL {
            vector[vibe] /= sum;
        }
    } else {
        *vector = VibeVector::zero();
    }
}

/// Move `delta` of probability mass onto (or off) `target`.
///
/// The target weight is clamped to [0, 1]; the remaining mass is spread over
/// the other categories in proportion to their current weights, or uniformly
/// if they are all zero. A zero or non-finite delta is a no-op.
pub fn adjust_vector(vector: &mut VibeVector, target: Vibe, delta: f64) {
    if delta == 0.0 || !delta.is_finite() {
        return;
    }

    let old = vector[target];
    let new = (old + delta).clamp(0.0, 1.0);
    if new == old {
        return;
    }

    let others_sum: f64 = vector
        .iter()
        .filter(|(vibe, _)| *vibe != target)
        .map(|(_, w)| w.max(0.0))
        .sum();
    let remaining = 1.0 - new;

    if others_sum > f64::EPSILON {
        let scale = remaining / others_sum;
        for vibe in Vibe::ALL {
            if vibe != target {
                vector[vibe] = vector[vibe].max(0.0) * scale;
            }
        }
    } else {
        let share = remaining / (Vibe::COUNT - 1) as f64;
        for vibe in Vibe::ALL {
            if vibe != target {
                vector[vibe] = share;
            }
        }
    }
    vector[target] = new;
}

/// How peaked the distribution is: 0 for uniform, 1 for a single category.
///
/// Computed as one minus the normalized Shannon entropy. The zero vector
/// carries no information and reports 0.
pub fn concentration(vector: &VibeVector) -> f64 {
    let sum = vector.sum();
    if !(sum > 0.0) || !sum.is_finite() {
        return 0.0;
    }
    let entropy: f64 = vector
        .iter()
        .map(|(_, w)| w / sum)
        .filter(|p| *p > 0.0)
        .map(|p| -p * p.ln())
        .sum();
    let max_entropy = (Vibe::COUNT as f64).ln();
    (1.0 - entropy / max_entropy).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-5;

    #[test]
    fn test_renormalize_scales_to_one() {
        let mut v = VibeVector::zero();
        v[Vibe::Chill] = 3.0;
        v[Vibe::Social] = 1.0;
        renormalize_vector(&mut v);
        assert!((v[Vibe::Chill] - 0.75).abs() < 1e-12);
        assert!((v.sum() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_renormalize_zero_stays_zero() {
        let mut v = VibeVector::zero();
        renormalize_vector(&mut v);
        assert!(v.is_zero());
        assert_eq!(v.sum(), 0.0);
    }

    #[test]
    fn test_renormalize_non_finite_becomes_sentinel() {
        let mut v = VibeVector::uniform();
        v[Vibe::Weird] = f64::INFINITY;
        renormalize_vector(&mut v);
        assert!(v.is_zero());
    }

    #[test]
    fn test_adjust_boosts_target_and_keeps_sum() {
        let mut v = VibeVector::uniform();
        adjust_vector(&mut v, Vibe::Hype, 0.2);
        assert!((v[Vibe::Hype] - 0.3).abs() < 1e-12);
        assert!((v.sum() - 1.0).abs() < TOL);
        // Others shrink evenly from a uniform start.
        assert!((v[Vibe::Chill] - v[Vibe::Down]).abs() < 1e-12);
    }

    #[test]
    fn test_adjust_is_proportional() {
        let mut v = VibeVector::zero();
        v[Vibe::Chill] = 0.5;
        v[Vibe::Solo] = 0.25;
        v[Vibe::Open] = 0.25;
        adjust_vector(&mut v, Vibe::Open, 0.25);
        assert!((v[Vibe::Open] - 0.5).abs() < 1e-12);
        assert!((v[Vibe::Chill] - 2.0 * v[Vibe::Solo]).abs() < 1e-12);
        assert!((v.sum() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_adjust_negative_delta_clamps_at_zero() {
        let mut v = VibeVector::uniform();
        adjust_vector(&mut v, Vibe::Down, -5.0);
        assert_eq!(v[Vibe::Down], 0.0);
        assert!((v.sum() - 1.0).abs() < TOL);
        assert!(v.iter().all(|(_, w)| w >= 0.0));
    }

    #[test]
    fn test_adjust_large_delta_clamps_at_one() {
        let mut v = VibeVector::uniform();
        adjust_vector(&mut v, Vibe::Flowing, 7.0);
        assert_eq!(v[Vibe::Flowing], 1.0);
        assert!(v.iter().filter(|(vibe, _)| *vibe != Vibe::Flowing).all(|(_, w)| w == 0.0));
    }

    #[test]
    fn test_adjust_from_one_hot_spreads_uniformly() {
        let mut v = VibeVector::zero();
        v[Vibe::Hype] = 1.0;
        adjust_vector(&mut v, Vibe::Hype, -0.9);
        assert!((v[Vibe::Hype] - 0.1).abs() < 1e-12);
        assert!((v[Vibe::Social] - 0.1).abs() < 1e-12);
        assert!((v.sum() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_adjust_zero_delta_is_noop() {
        let mut v = VibeVector::uniform();
        adjust_vector(&mut v, Vibe::Curious, 0.13);
        let before = v;
        for _ in 0..5 {
            adjust_vector(&mut v, Vibe::Chill, 0.0);
        }
        assert_eq!(v, before);
        adjust_vector(&mut v, Vibe::Chill, f64::NAN);
        assert_eq!(v, before);
    }

    #[test]
    fn test_concentration_bounds() {
        assert!(concentration(&VibeVector::uniform()) < 1e-9);
        let mut one_hot = VibeVector::zero();
        one_hot[Vibe::Romantic] = 1.0;
        assert!((concentration(&one_hot) - 1.0).abs() < 1e-9);
        assert_eq!(concentration(&VibeVector::zero()), 0.0);
    }
}
