//! Evidence channels and their per-evaluation contribution scores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseComponentError;

/// A named evidence channel feeding the vibe engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Component {
    Circadian,
    Motion,
    ScreenActivity,
    Daylight,
    Weather,
    VenueEnergy,
}

impl Component {
    pub const COUNT: usize = 6;

    pub const ALL: [Component; Component::COUNT] = [
        Self::Circadian,
        Self::Motion,
        Self::ScreenActivity,
        Self::Daylight,
        Self::Weather,
        Self::VenueEnergy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Circadian => "circadian",
            Self::Motion => "motion",
            Self::ScreenActivity => "screenActivity",
            Self::Daylight => "daylight",
            Self::Weather => "weather",
            Self::VenueEnergy => "venueEnergy",
        }
    }

    /// Short human label used in learning feedback text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Circadian => "time of day",
            Self::Motion => "movement",
            Self::ScreenActivity => "phone activity",
            Self::Daylight => "daylight",
            Self::Weather => "weather",
            Self::VenueEnergy => "venue energy",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = ParseComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseComponentError {
                value: s.to_string(),
            })
    }
}

/// One bounded [0, 1] score per evidence channel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentScores {
    pub circadian: f64,
    pub motion: f64,
    pub screen_activity: f64,
    pub daylight: f64,
    pub weather: f64,
    pub venue_energy: f64,
}

impl ComponentScores {
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Circadian => self.circadian,
            Component::Motion => self.motion,
            Component::ScreenActivity => self.screen_activity,
            Component::Daylight => self.daylight,
            Component::Weather => self.weather,
            Component::VenueEnergy => self.venue_energy,
        }
    }

    pub fn set(&mut self, component: Component, value: f64) {
        let slot = match component {
            Component::Circadian => &mut self.circadian,
            Component::Motion => &mut self.motion,
            Component::ScreenActivity => &mut self.screen_activity,
            Component::Daylight => &mut self.daylight,
            Component::Weather => &mut self.weather,
            Component::VenueEnergy => &mut self.venue_energy,
        };
        *slot = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        Component::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Channel with the highest score. Ties resolve to declaration order.
    pub fn dominant(&self) -> (Component, f64) {
        let mut best = (Component::ALL[0], self.get(Component::ALL[0]));
        for (component, value) in self.iter().skip(1) {
            if value > best.1 {
                best = (component, value);
            }
        }
        best
    }

    /// Copy with every channel clamped to [0, 1]. Non-finite values become 0.5.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for component in Component::ALL {
            let value = self.get(component);
            let bounded = if value.is_finite() {
                value.clamp(0.0, 1.0)
            } else {
                0.5
            };
            out.set(component, bounded);
        }
        out
    }

    /// True when every channel is within [0, 1].
    pub fn is_bounded(&self) -> bool {
        self.iter().all(|(_, v)| (0.0..=1.0).contains(&v))
    }
}
