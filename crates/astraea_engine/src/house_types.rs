//! House cusp and placement types.

use serde::{Deserialize, Serialize};

use astraea_base::{ChartBody, PlanetPosition, Sign};

/// One of the 12 houses, described by its starting cusp.
///
/// The cusps are supplied externally (Placidus or another system); this
/// engine only derives sign, degree-in-sign, and span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number, 1..=12.
    pub number: u8,
    /// Cusp ecliptic longitude in [0, 360).
    pub cusp_longitude: f64,
    /// Sign the cusp falls in.
    pub cusp_sign: Sign,
    /// Degrees within the cusp sign, [0, 30).
    pub cusp_degree: f64,
    /// Width of the house up to the next cusp; the 12 spans sum to 360.
    pub span_degrees: f64,
}

/// A body placed into a house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HousePlacement {
    /// The placed body.
    pub body: ChartBody,
    /// House number, 1..=12.
    pub house: u8,
    /// The body's sign/degree position.
    pub position: PlanetPosition,
}
