//! House placement with circular wrap-around semantics.
//!
//! The 12 cusp longitudes arrive from the external houses computation in
//! zodiacal order. Each house is the half-open interval from its cusp to the
//! next; the house containing 0 deg Aries wraps, and roughly half of all
//! charts have at least one wrapping house.

use std::collections::BTreeMap;

use tracing::warn;

use astraea_base::{AstraeaError, ChartBody, PlanetPosition, normalize_360};

use crate::house_types::{HouseCusp, HousePlacement};

/// Spans outside this band are logged as anomalous (expected near the poles).
const SPAN_SANE_MIN_DEG: f64 = 5.0;
const SPAN_SANE_MAX_DEG: f64 = 60.0;

/// Whether a longitude falls inside the half-open house interval.
///
/// Non-wrapping house (`start < end`): `start <= lon < end`.
/// Wrapping house (`start >= end`, crosses 0 deg Aries):
/// `lon >= start || lon < end`.
pub fn is_in_house(longitude: f64, cusp_start: f64, cusp_end: f64) -> bool {
    let lon = normalize_360(longitude);
    if cusp_start < cusp_end {
        cusp_start <= lon && lon < cusp_end
    } else {
        lon >= cusp_start || lon < cusp_end
    }
}

/// Width of a house interval in degrees.
pub fn house_span(cusp_start: f64, cusp_end: f64) -> f64 {
    if cusp_start < cusp_end {
        cusp_end - cusp_start
    } else {
        (360.0 - cusp_start) + cusp_end
    }
}

/// Verify the cusps describe one full trip around the zodiac.
///
/// For circularly ordered cusps the forward spans sum to exactly 360;
/// out-of-order or duplicate cusps wind the circle more than once and
/// push the sum to a higher multiple.
pub fn check_cusps(cusps: &[f64; 12]) -> Result<(), AstraeaError> {
    if cusps.iter().any(|c| !c.is_finite()) {
        return Err(AstraeaError::InvalidCusps("non-finite cusp longitude"));
    }
    let total: f64 = (0..12)
        .map(|i| {
            house_span(
                normalize_360(cusps[i]),
                normalize_360(cusps[(i + 1) % 12]),
            )
        })
        .sum();
    if (total - 360.0).abs() > 1e-6 {
        return Err(AstraeaError::InvalidCusps(
            "cusps are not in circular zodiacal order",
        ));
    }
    Ok(())
}

/// Build the 12 house descriptions from cusp longitudes in zodiacal order.
///
/// Spans outside [5, 60] degrees are warned about but never fatal.
pub fn build_houses(cusps: &[f64; 12]) -> [HouseCusp; 12] {
    let mut houses = [HouseCusp {
        number: 0,
        cusp_longitude: 0.0,
        cusp_sign: astraea_base::Sign::Aries,
        cusp_degree: 0.0,
        span_degrees: 0.0,
    }; 12];

    for i in 0..12 {
        let start = normalize_360(cusps[i]);
        let end = normalize_360(cusps[(i + 1) % 12]);
        let span = house_span(start, end);
        let number = (i as u8) + 1;
        if !(SPAN_SANE_MIN_DEG..=SPAN_SANE_MAX_DEG).contains(&span) {
            warn!(house = number, span_deg = span, "anomalous house span");
        }
        let pos = PlanetPosition::from_longitude(start);
        houses[i] = HouseCusp {
            number,
            cusp_longitude: start,
            cusp_sign: pos.sign,
            cusp_degree: pos.degree,
            span_degrees: span,
        };
    }
    houses
}

/// Place each body into the house containing its longitude.
///
/// Frame angles (Ascendant/Midheaven) define the cusps and are excluded.
/// A body with a non-finite longitude is warned about and skipped; the rest
/// of the placements still complete.
pub fn house_placements(
    houses: &[HouseCusp; 12],
    positions: &BTreeMap<ChartBody, f64>,
) -> Vec<HousePlacement> {
    let mut placements = Vec::new();
    for (&body, &longitude) in positions {
        if body.is_angle_point() {
            continue;
        }
        if !longitude.is_finite() {
            warn!(%body, "skipping body with non-finite longitude in house placement");
            continue;
        }
        for (i, house) in houses.iter().enumerate() {
            let end = houses[(i + 1) % 12].cusp_longitude;
            if is_in_house(longitude, house.cusp_longitude, end) {
                placements.push(HousePlacement {
                    body,
                    house: house.number,
                    position: PlanetPosition::from_longitude(longitude),
                });
                break;
            }
        }
    }
    placements
}
