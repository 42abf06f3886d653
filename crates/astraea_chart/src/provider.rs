//! Seam to the external ephemeris computation.

use serde::{Deserialize, Serialize};

use astraea_base::{AstraeaError, ChartBody};

/// Geographic observer location, already validated upstream (latitude in
/// [-90, 90], longitude in [-180, 180]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, positive north.
    pub latitude_deg: f64,
    /// Longitude in degrees, positive east.
    pub longitude_deg: f64,
}

/// The house frame for one (instant, location): 12 cusps plus the angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseFrame {
    /// 12 cusp longitudes in zodiacal order.
    pub cusps: [f64; 12],
    /// Ascendant longitude.
    pub ascendant: f64,
    /// Midheaven (MC) longitude.
    pub midheaven: f64,
}

/// Supplier of raw ecliptic positions and house frames.
///
/// Implementations typically wrap a native ephemeris library that is not
/// safe for concurrent use; such an implementation must serialize access
/// internally (a mutex or a single-threaded actor). The engines downstream
/// of this trait are pure and need no locking of their own.
pub trait EphemerisProvider {
    /// Geocentric ecliptic longitude of a body, in degrees (any real value;
    /// the engine normalizes).
    fn body_longitude(&self, body: ChartBody, jd_utc: f64) -> Result<f64, AstraeaError>;

    /// Longitude plus signed daily angular velocity in degrees/day.
    fn body_state(&self, body: ChartBody, jd_utc: f64) -> Result<(f64, f64), AstraeaError>;

    /// House cusps, Ascendant, and Midheaven for an instant and location,
    /// computed under the provider's configured house system.
    fn houses(&self, jd_utc: f64, location: &GeoLocation) -> Result<HouseFrame, AstraeaError>;
}
