//! Ecliptic angle normalization and angular distance.

/// Normalize an angle to [0, 360) degrees.
///
/// Idempotent and congruent to the input modulo 360 for any finite value,
/// including negative angles and angles beyond a full circle.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // A tiny negative remainder rounds up to exactly 360.0; fold it back.
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest angular separation between two ecliptic longitudes, in [0, 180].
///
/// Both inputs are normalized first, so callers may pass raw longitudes.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (normalize_360(a) - normalize_360(b)).abs();
    d.min(360.0 - d)
}
