//! Tropical zodiac signs and sign/degree positions.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. A position is expressed either as an
//! absolute longitude in [0, 360) or as a (sign, degree-in-sign) pair;
//! the two forms are exact inverses of each other.

use serde::{Deserialize, Serialize};

use crate::angle::normalize_360;

/// The 12 tropical zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// The three modalities (quadruplicities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Sign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign by 0-based index; `None` if index >= 12.
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= 12 {
            return None;
        }
        Some(ALL_SIGNS[index as usize])
    }

    /// Classical element of the sign (fire/earth/air/water repeating).
    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    /// Modality of the sign (cardinal/fixed/mutable repeating).
    pub const fn modality(self) -> Modality {
        match self {
            Self::Aries | Self::Cancer | Self::Libra | Self::Capricorn => Modality::Cardinal,
            Self::Taurus | Self::Leo | Self::Scorpio | Self::Aquarius => Modality::Fixed,
            Self::Gemini | Self::Virgo | Self::Sagittarius | Self::Pisces => Modality::Mutable,
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A body position expressed as a sign plus degrees within the sign.
///
/// `degree` is always in [0, 30). The pair is equivalent to the absolute
/// longitude `sign.index() * 30 + degree`; [`PlanetPosition::from_longitude`]
/// and [`PlanetPosition::longitude`] are exact inverses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    /// The zodiac sign the position falls in.
    pub sign: Sign,
    /// Decimal degrees within the sign, [0.0, 30.0).
    pub degree: f64,
}

impl PlanetPosition {
    /// Determine sign and degree-in-sign from an ecliptic longitude.
    ///
    /// The longitude may be any finite real value; it is normalized first.
    /// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let lon = normalize_360(longitude_deg);
        // Clamp to 11 in case of floating point edge (exactly 360.0)
        let mut sign_idx = ((lon / 30.0).floor() as u8).min(11);
        let mut degree = lon - (sign_idx as f64) * 30.0;
        // A float artifact at a sign boundary belongs to the next sign.
        if degree >= 30.0 {
            sign_idx = (sign_idx + 1) % 12;
            degree = 0.0;
        }
        Self {
            sign: ALL_SIGNS[sign_idx as usize],
            degree,
        }
    }

    /// Absolute ecliptic longitude in [0, 360).
    pub fn longitude(self) -> f64 {
        (self.sign.index() as f64) * 30.0 + self.degree
    }
}

impl std::fmt::Display for PlanetPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}\u{00b0} {}", self.degree, self.sign.name())
    }
}
