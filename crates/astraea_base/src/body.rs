//! Chart bodies and their orb classes.
//!
//! The 10 placeable bodies (Sun through Pluto) carry an orb multiplier used
//! to widen aspect windows: luminaries get the widest orbs, outer planets
//! the tightest. The Ascendant and Midheaven are frame angles: they define
//! the house cusps and are never placed into houses themselves.

use serde::{Deserialize, Serialize};

/// Every point the engine knows how to talk about.
///
/// Declaration order is the canonical ordering used throughout the engine
/// (maps, retrograde summaries, pattern member lists).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ChartBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Ascendant,
    Midheaven,
}

/// The 10 placeable bodies, excluding the frame angles.
pub const ALL_PLANETS: [ChartBody; 10] = [
    ChartBody::Sun,
    ChartBody::Moon,
    ChartBody::Mercury,
    ChartBody::Venus,
    ChartBody::Mars,
    ChartBody::Jupiter,
    ChartBody::Saturn,
    ChartBody::Uranus,
    ChartBody::Neptune,
    ChartBody::Pluto,
];

/// All bodies including the frame angles.
pub const ALL_BODIES: [ChartBody; 12] = [
    ChartBody::Sun,
    ChartBody::Moon,
    ChartBody::Mercury,
    ChartBody::Venus,
    ChartBody::Mars,
    ChartBody::Jupiter,
    ChartBody::Saturn,
    ChartBody::Uranus,
    ChartBody::Neptune,
    ChartBody::Pluto,
    ChartBody::Ascendant,
    ChartBody::Midheaven,
];

/// Orb class of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyClass {
    /// Sun and Moon.
    Luminary,
    /// Mercury, Venus, Mars.
    Personal,
    /// Jupiter, Saturn.
    Social,
    /// Uranus, Neptune, Pluto.
    Outer,
    /// Ascendant, Midheaven.
    AnglePoint,
}

impl ChartBody {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::Ascendant => "Ascendant",
            Self::Midheaven => "Midheaven",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
            Self::Ascendant => 10,
            Self::Midheaven => 11,
        }
    }

    /// Orb class of the body.
    pub const fn class(self) -> BodyClass {
        match self {
            Self::Sun | Self::Moon => BodyClass::Luminary,
            Self::Mercury | Self::Venus | Self::Mars => BodyClass::Personal,
            Self::Jupiter | Self::Saturn => BodyClass::Social,
            Self::Uranus | Self::Neptune | Self::Pluto => BodyClass::Outer,
            Self::Ascendant | Self::Midheaven => BodyClass::AnglePoint,
        }
    }

    /// Aspect orb widening factor for the body.
    ///
    /// Luminaries 1.2, personal 1.0, social 0.9, outer 0.8. Frame angles use
    /// 1.0 so aspects to the Ascendant keep the partner's widening.
    pub const fn orb_multiplier(self) -> f64 {
        match self.class() {
            BodyClass::Luminary => 1.2,
            BodyClass::Personal | BodyClass::AnglePoint => 1.0,
            BodyClass::Social => 0.9,
            BodyClass::Outer => 0.8,
        }
    }

    /// True for Sun and Moon.
    pub const fn is_luminary(self) -> bool {
        matches!(self.class(), BodyClass::Luminary)
    }

    /// True for Ascendant and Midheaven.
    pub const fn is_angle_point(self) -> bool {
        matches!(self.class(), BodyClass::AnglePoint)
    }
}

impl std::fmt::Display for ChartBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
