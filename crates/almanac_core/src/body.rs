//! Bodies supported by the position model.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::CoreError;

/// Bodies with an orbital solution in this engine.
///
/// The Sun and Moon use dedicated geocentric models; the planets are
/// solved heliocentrically and translated to Earth with the Sun's solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    /// Every supported body, Sun and Moon first.
    pub const ALL: [Body; 9] = [
        Self::Sun,
        Self::Moon,
        Self::Mercury,
        Self::Venus,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
    ];

    /// Lower-case English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
        }
    }

    /// Whether the body is one of the seven planets (not Sun or Moon).
    pub const fn is_planet(self) -> bool {
        !matches!(self, Self::Sun | Self::Moon)
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|b| b.name() == lower)
            .ok_or(CoreError::UnsupportedBody(s.to_string()))
    }
}
