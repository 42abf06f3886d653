//! Transit positions, records, and configuration.

use serde::{Deserialize, Serialize};

use astraea_base::ChartBody;

/// A transiting body's state at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitPosition {
    /// Ecliptic longitude in degrees (any finite real; normalized on use).
    pub longitude: f64,
    /// Signed daily longitude velocity in degrees per day.
    pub speed_deg_per_day: f64,
}

impl TransitPosition {
    /// Apparent backward motion: negative daily velocity.
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}

/// One matched transiting-to-natal aspect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitRecord {
    /// The moving body.
    pub transiting: ChartBody,
    /// The fixed natal body.
    pub natal: ChartBody,
    /// The matched aspect.
    pub kind: crate::aspect_types::AspectKind,
    /// Absolute deviation from the exact target angle.
    pub orb_deviation: f64,
    /// Tight transit orb the match was made under.
    pub max_orb: f64,
    /// Strength in [0, 100].
    pub strength_pct: f64,
    /// Retrograde flag of the transiting body.
    pub is_retrograde: bool,
}

/// Read-only transit engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitConfig {
    /// Cap on returned records; callers keep this small for readability.
    pub result_cap: usize,
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self { result_cap: 10 }
    }
}
