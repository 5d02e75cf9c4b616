//! The closed set of vibe categories and the fixed-shape distribution over them.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseVibeError;

/// One category describing a user's current social/emotional state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Hype,
    Social,
    Chill,
    Flowing,
    Open,
    Curious,
    Solo,
    Romantic,
    Weird,
    Down,
}

impl Vibe {
    /// Number of categories.
    pub const COUNT: usize = 10;

    /// Every category, in declaration order.
    pub const ALL: [Vibe; Vibe::COUNT] = [
        Self::Hype,
        Self::Social,
        Self::Chill,
        Self::Flowing,
        Self::Open,
        Self::Curious,
        Self::Solo,
        Self::Romantic,
        Self::Weird,
        Self::Down,
    ];

    /// Position of this category inside a [`VibeVector`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hype => "hype",
            Self::Social => "social",
            Self::Chill => "chill",
            Self::Flowing => "flowing",
            Self::Open => "open",
            Self::Curious => "curious",
            Self::Solo => "solo",
            Self::Romantic => "romantic",
            Self::Weird => "weird",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vibe {
    type Err = ParseVibeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Vibe::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == needle)
            .ok_or_else(|| ParseVibeError {
                value: s.to_string(),
            })
    }
}

/// A weight for every [`Vibe`].
///
/// Valid vectors sum to 1.0 within floating-point tolerance. A provisional
/// vector may violate this until renormalized; the all-zero vector is the
/// "no information" sentinel and is never silently turned into a uniform one.
///
/// Serialized as a `{vibe: weight}` object. Missing keys deserialize to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Vibe, f64>", into = "BTreeMap<Vibe, f64>")]
pub struct VibeVector {
    weights: [f64; Vibe::COUNT],
}

impl VibeVector {
    /// All weights zero.
    pub const fn zero() -> Self {
        Self {
            weights: [0.0; Vibe::COUNT],
        }
    }

    /// Equal weight on every category.
    pub fn uniform() -> Self {
        Self {
            weights: [1.0 / Vibe::COUNT as f64; Vibe::COUNT],
        }
    }

    /// Build from raw weights in [`Vibe::ALL`] order.
    pub const fn from_weights(weights: [f64; Vibe::COUNT]) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &[f64; Vibe::COUNT] {
        &self.weights
    }

    pub fn get(&self, vibe: Vibe) -> f64 {
        self.weights[vibe.index()]
    }

    pub fn set(&mut self, vibe: Vibe, weight: f64) {
        self.weights[vibe.index()] = weight;
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// True when every weight is zero.
    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|w| *w == 0.0)
    }

    /// True when the weights sum to 1 within `tolerance` and none is negative.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        self.weights.iter().all(|w| *w >= 0.0) && (self.sum() - 1.0).abs() < tolerance
    }

    /// Category with the highest weight. Ties resolve to declaration order.
    pub fn dominant(&self) -> Vibe {
        let mut best = Vibe::ALL[0];
        for vibe in Vibe::ALL.iter().copied().skip(1) {
            if self.get(vibe) > self.get(best) {
                best = vibe;
            }
        }
        best
    }

    /// `(vibe, weight)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Vibe, f64)> + '_ {
        Vibe::ALL.iter().map(move |v| (*v, self.weights[v.index()]))
    }

    /// Categories sorted by descending weight.
    pub fn ranked(&self) -> Vec<(Vibe, f64)> {
        let mut ranked: Vec<(Vibe, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

impl Default for VibeVector {
    fn default() -> Self {
        Self::uniform()
    }
}

impl Index<Vibe> for VibeVector {
    type Output = f64;

    fn index(&self, vibe: Vibe) -> &f64 {
        &self.weights[vibe.index()]
    }
}

impl IndexMut<Vibe> for VibeVector {
    fn index_mut(&mut self, vibe: Vibe) -> &mut f64 {
        &mut self.weights[vibe.index()]
    }
}

impl From<BTreeMap<Vibe, f64>> for VibeVector {
    fn from(map: BTreeMap<Vibe, f64>) -> Self {
        let mut vector = Self::zero();
        for (vibe, weight) in map {
            vector[vibe] = weight;
        }
        vector
    }
}

impl From<VibeVector> for BTreeMap<Vibe, f64> {
    fn from(vector: VibeVector) -> Self {
        vector.iter().collect()
    }
}
