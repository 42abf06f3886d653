//! Aspect definitions and result records.

use serde::{Deserialize, Serialize};

use astraea_base::ChartBody;

/// The 9 recognized aspects.
///
/// Declaration order is the matching priority: for a pair sitting inside
/// more than one orb window, the first kind listed here wins. Majors come
/// first so a wide conjunction never gets labeled as a semisextile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
    Semisextile,
    Semisquare,
    Sesquisquare,
}

/// All aspects in matching priority order.
pub const ALL_ASPECTS: [AspectKind; 9] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
    AspectKind::Quincunx,
    AspectKind::Semisextile,
    AspectKind::Semisquare,
    AspectKind::Sesquisquare,
];

/// Major (Ptolemaic) vs minor aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectClass {
    Major,
    Minor,
}

/// Traditional benefic/malefic quality of an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectNature {
    Soft,
    Hard,
    Neutral,
}

impl AspectKind {
    /// English name of the aspect.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Opposition => "Opposition",
            Self::Trine => "Trine",
            Self::Square => "Square",
            Self::Sextile => "Sextile",
            Self::Quincunx => "Quincunx",
            Self::Semisextile => "Semisextile",
            Self::Semisquare => "Semisquare",
            Self::Sesquisquare => "Sesquisquare",
        }
    }

    /// Exact target angle in degrees.
    pub const fn target_angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
            Self::Quincunx => 150.0,
            Self::Semisextile => 30.0,
            Self::Semisquare => 45.0,
            Self::Sesquisquare => 135.0,
        }
    }

    /// Base natal orb in degrees, before per-body widening.
    pub const fn base_orb(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition | Self::Trine => 8.0,
            Self::Square => 7.0,
            Self::Sextile => 6.0,
            Self::Quincunx => 3.0,
            Self::Semisextile | Self::Semisquare | Self::Sesquisquare => 2.0,
        }
    }

    /// Major or minor.
    pub const fn class(self) -> AspectClass {
        match self {
            Self::Conjunction
            | Self::Opposition
            | Self::Trine
            | Self::Square
            | Self::Sextile => AspectClass::Major,
            Self::Quincunx | Self::Semisextile | Self::Semisquare | Self::Sesquisquare => {
                AspectClass::Minor
            }
        }
    }

    /// Harmonious, tense, or neutral.
    pub const fn nature(self) -> AspectNature {
        match self {
            Self::Trine | Self::Sextile => AspectNature::Soft,
            Self::Opposition | Self::Square | Self::Semisquare | Self::Sesquisquare => {
                AspectNature::Hard
            }
            Self::Conjunction | Self::Quincunx | Self::Semisextile => AspectNature::Neutral,
        }
    }
}

impl std::fmt::Display for AspectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One matched aspect between two bodies. Produced fresh per call, never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    /// First body of the unordered pair.
    pub body_a: ChartBody,
    /// Second body of the unordered pair.
    pub body_b: ChartBody,
    /// The matched aspect.
    pub kind: AspectKind,
    /// Absolute deviation from the exact target angle, >= 0.
    pub orb_deviation: f64,
    /// Effective orb the match was made under, > 0.
    pub max_orb: f64,
    /// Strength in [0, 100]: 100 at exact, 0 at the orb edge.
    pub strength_pct: f64,
}

impl AspectRecord {
    /// Nature of the matched aspect.
    pub const fn nature(&self) -> AspectNature {
        self.kind.nature()
    }

    /// Class of the matched aspect.
    pub const fn class(&self) -> AspectClass {
        self.kind.class()
    }

    /// True if `body` participates in this aspect.
    pub fn involves(&self, body: ChartBody) -> bool {
        self.body_a == body || self.body_b == body
    }
}

/// Read-only aspect engine configuration, constructed once by the caller
/// and passed by reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectConfig {
    /// Matches weaker than this are dropped from query results.
    pub min_strength_pct: f64,
    /// Cap on the "major aspects" query.
    pub major_cap: usize,
}

impl Default for AspectConfig {
    fn default() -> Self {
        Self {
            min_strength_pct: 0.0,
            major_cap: 5,
        }
    }
}
