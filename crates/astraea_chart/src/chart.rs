//! Natal chart and transit report assembly.
//!
//! The facade requests raw longitudes and the house frame from the
//! provider, then fans out to the aspect, house, and transit engines. A
//! body the provider cannot resolve is skipped with a warning and surfaces
//! in the quality report; a failed house frame aborts the chart, since
//! nothing downstream is meaningful without it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use astraea_base::{ALL_PLANETS, AstraeaError, ChartBody, PlanetPosition, normalize_360};
use astraea_engine::{
    AspectConfig, AspectRecord, HouseCusp, HousePlacement, Pattern, TransitConfig,
    TransitPosition, TransitRecord, all_aspects, build_houses, check_cusps, detect_patterns,
    house_placements, retrograde_bodies, transit_aspects,
};

use crate::provider::{EphemerisProvider, GeoLocation};
use crate::quality::{ChartQuality, validate_quality};

/// One chart computation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Astronomical instant as a UTC Julian Date.
    pub jd_utc: f64,
    /// Observer location (already validated upstream).
    pub location: GeoLocation,
}

/// A fully assembled natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    /// Sign/degree position per resolved body.
    pub positions: BTreeMap<ChartBody, PlanetPosition>,
    /// Ascendant position.
    pub ascendant: PlanetPosition,
    /// Midheaven position.
    pub midheaven: PlanetPosition,
    /// The 12 houses with cusp sign/degree and span.
    pub houses: [HouseCusp; 12],
    /// Body-to-house placements.
    pub placements: Vec<HousePlacement>,
    /// All matched aspects including minors, strongest first.
    pub aspects: Vec<AspectRecord>,
    /// Detected stelliums, grand trines, T-squares.
    pub patterns: Vec<Pattern>,
    /// Completeness verdict for the run.
    pub quality: ChartQuality,
}

/// Transit snapshot for one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitReport {
    /// The instant the snapshot was computed for.
    pub jd_utc: f64,
    /// Matched transiting-to-natal aspects, strongest first.
    pub transits: Vec<TransitRecord>,
    /// Non-luminary bodies currently retrograde.
    pub retrogrades: Vec<ChartBody>,
}

/// Fetch each planet's longitude, tolerating per-body failures.
fn fetch_longitudes<P: EphemerisProvider>(
    provider: &P,
    jd_utc: f64,
) -> BTreeMap<ChartBody, f64> {
    let mut longitudes = BTreeMap::new();
    for body in ALL_PLANETS {
        match provider.body_longitude(body, jd_utc) {
            Ok(lon) => {
                longitudes.insert(body, normalize_360(lon));
            }
            Err(e) => {
                warn!(%body, error = %e, "ephemeris failed for body, skipping");
            }
        }
    }
    longitudes
}

/// Compute a complete natal chart for one request.
///
/// Per-body ephemeris failures are tolerated and quantified in
/// [`NatalChart::quality`]; a house-frame failure or an out-of-order
/// cusp set is propagated.
pub fn compute_natal_chart<P: EphemerisProvider>(
    provider: &P,
    request: &ChartRequest,
    aspect_config: &AspectConfig,
) -> Result<NatalChart, AstraeaError> {
    debug!(jd_utc = request.jd_utc, "computing natal chart");

    let longitudes = fetch_longitudes(provider, request.jd_utc);
    let frame = provider.houses(request.jd_utc, &request.location)?;

    let mut cusps = frame.cusps;
    for c in &mut cusps {
        *c = normalize_360(*c);
    }
    check_cusps(&cusps)?;
    let houses = build_houses(&cusps);
    let placements = house_placements(&houses, &longitudes);

    let aspects = all_aspects(&longitudes, aspect_config, true);
    let patterns = detect_patterns(&aspects);

    let positions: BTreeMap<ChartBody, PlanetPosition> = longitudes
        .iter()
        .map(|(&b, &lon)| (b, PlanetPosition::from_longitude(lon)))
        .collect();
    let quality = validate_quality(&positions);
    debug!(
        aspects = aspects.len(),
        patterns = patterns.len(),
        quality = %quality.message,
        "natal chart assembled"
    );

    Ok(NatalChart {
        positions,
        ascendant: PlanetPosition::from_longitude(frame.ascendant),
        midheaven: PlanetPosition::from_longitude(frame.midheaven),
        houses,
        placements,
        aspects,
        patterns,
        quality,
    })
}

/// Compute a transit snapshot of the current sky against natal positions.
///
/// `natal` maps each natal body to its (normalized) longitude; callers
/// typically reuse the longitudes behind [`NatalChart::positions`].
pub fn compute_transit_report<P: EphemerisProvider>(
    provider: &P,
    natal: &BTreeMap<ChartBody, f64>,
    jd_utc: f64,
    config: &TransitConfig,
) -> Result<TransitReport, AstraeaError> {
    let mut current = BTreeMap::new();
    for body in ALL_PLANETS {
        match provider.body_state(body, jd_utc) {
            Ok((longitude, speed_deg_per_day)) => {
                current.insert(
                    body,
                    TransitPosition {
                        longitude: normalize_360(longitude),
                        speed_deg_per_day,
                    },
                );
            }
            Err(e) => {
                warn!(%body, error = %e, "ephemeris failed for transiting body, skipping");
            }
        }
    }

    Ok(TransitReport {
        jd_utc,
        transits: transit_aspects(natal, &current, config),
        retrogrades: retrograde_bodies(&current),
    })
}

/// Daily transit reports over a date range starting at `start_jd_utc`.
///
/// One snapshot per day for `days` days; the engine itself is stateless in
/// time, so this is just repeated snapshot computation.
pub fn transit_forecast<P: EphemerisProvider>(
    provider: &P,
    natal: &BTreeMap<ChartBody, f64>,
    start_jd_utc: f64,
    days: u32,
    config: &TransitConfig,
) -> Result<Vec<TransitReport>, AstraeaError> {
    let mut reports = Vec::with_capacity(days as usize);
    for day in 0..days {
        reports.push(compute_transit_report(
            provider,
            natal,
            start_jd_utc + day as f64,
            config,
        )?);
    }
    Ok(reports)
}
