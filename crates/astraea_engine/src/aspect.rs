//! Pairwise aspect matching with orb widening and strength scoring.
//!
//! For every unordered pair of bodies the shortest angular separation is
//! compared against each aspect's orb window, widened by the larger of the
//! two bodies' multipliers. The first in-orb aspect in declaration order is
//! the match; strength falls linearly from 100% at the exact angle to 0% at
//! the orb edge.

use std::collections::BTreeMap;

use tracing::warn;

use astraea_base::{AstraeaError, ChartBody, angular_distance};

use crate::aspect_types::{ALL_ASPECTS, AspectClass, AspectConfig, AspectKind, AspectRecord};

/// Effective orb for a body pair: base orb widened by the larger multiplier.
pub fn effective_orb(kind: AspectKind, a: ChartBody, b: ChartBody) -> f64 {
    kind.base_orb() * a.orb_multiplier().max(b.orb_multiplier())
}

/// Linear strength score: 100 at zero deviation, 0 at the orb edge.
pub fn strength_pct(deviation: f64, max_orb: f64) -> f64 {
    ((max_orb - deviation) / max_orb * 100.0).clamp(0.0, 100.0)
}

/// Match a single body pair against the aspect table.
///
/// Returns `Ok(None)` when no aspect window contains the separation, and an
/// error when either longitude is non-finite. The result is symmetric under
/// swapping the two bodies.
pub fn match_pair(
    body_a: ChartBody,
    lon_a: f64,
    body_b: ChartBody,
    lon_b: f64,
) -> Result<Option<AspectRecord>, AstraeaError> {
    if !lon_a.is_finite() {
        return Err(AstraeaError::NonFiniteLongitude { body: body_a });
    }
    if !lon_b.is_finite() {
        return Err(AstraeaError::NonFiniteLongitude { body: body_b });
    }

    let separation = angular_distance(lon_a, lon_b);
    for kind in ALL_ASPECTS {
        let deviation = (separation - kind.target_angle()).abs();
        let max_orb = effective_orb(kind, body_a, body_b);
        if deviation <= max_orb {
            return Ok(Some(AspectRecord {
                body_a,
                body_b,
                kind,
                orb_deviation: deviation,
                max_orb,
                strength_pct: strength_pct(deviation, max_orb),
            }));
        }
    }
    Ok(None)
}

/// All matched aspects over every unordered body pair, strongest first.
///
/// A pair that fails to evaluate is warned about and skipped; the rest of
/// the pairwise matrix still completes. Minor aspects are dropped unless
/// `include_minor` is set. No match anywhere yields an empty vec.
pub fn all_aspects(
    positions: &BTreeMap<ChartBody, f64>,
    config: &AspectConfig,
    include_minor: bool,
) -> Vec<AspectRecord> {
    let bodies: Vec<(ChartBody, f64)> = positions.iter().map(|(b, l)| (*b, *l)).collect();
    let mut records = Vec::new();

    for (i, &(body_a, lon_a)) in bodies.iter().enumerate() {
        for &(body_b, lon_b) in &bodies[i + 1..] {
            match match_pair(body_a, lon_a, body_b, lon_b) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(e) => {
                    warn!(%body_a, %body_b, error = %e, "skipping pair in aspect matrix");
                }
            }
        }
    }

    records.retain(|r| {
        r.strength_pct >= config.min_strength_pct
            && (include_minor || r.class() == AspectClass::Major)
    });
    records.sort_by(|x, y| y.strength_pct.total_cmp(&x.strength_pct));
    records
}

/// The strongest major aspects, capped at `config.major_cap`.
pub fn major_aspects(
    positions: &BTreeMap<ChartBody, f64>,
    config: &AspectConfig,
) -> Vec<AspectRecord> {
    let mut records = all_aspects(positions, config, false);
    records.truncate(config.major_cap);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    fn positions(entries: &[(ChartBody, f64)]) -> BTreeMap<ChartBody, f64> {
        entries.iter().copied().collect()
    }

    #[test]
    fn effective_orb_takes_max_multiplier() {
        // Sun (1.2) with Pluto (0.8): conjunction orb = 8 * 1.2
        let orb = effective_orb(AspectKind::Conjunction, ChartBody::Sun, ChartBody::Pluto);
        assert!((orb - 9.6).abs() < EPS);
        // Jupiter (0.9) with Pluto (0.8): 8 * 0.9
        let orb = effective_orb(AspectKind::Conjunction, ChartBody::Jupiter, ChartBody::Pluto);
        assert!((orb - 7.2).abs() < EPS);
    }

    #[test]
    fn strength_exact_is_100() {
        assert!((strength_pct(0.0, 8.0) - 100.0).abs() < EPS);
    }

    #[test]
    fn strength_at_edge_is_0() {
        assert!(strength_pct(8.0, 8.0).abs() < EPS);
    }

    #[test]
    fn strength_strictly_decreasing() {
        let mut prev = strength_pct(0.0, 8.0);
        for i in 1..=80 {
            let s = strength_pct(i as f64 * 0.1, 8.0);
            assert!(s < prev, "strength not decreasing at deviation {}", i as f64 * 0.1);
            prev = s;
        }
    }

    #[test]
    fn spec_sun_mercury_conjunction() {
        // Sun at 24, Mercury at 20: separation 4, orb 8*1.2 = 9.6
        let r = match_pair(ChartBody::Sun, 24.0, ChartBody::Mercury, 20.0)
            .unwrap()
            .unwrap();
        assert_eq!(r.kind, AspectKind::Conjunction);
        assert!((r.orb_deviation - 4.0).abs() < EPS);
        assert!((r.max_orb - 9.6).abs() < EPS);
        assert!((r.strength_pct - (9.6 - 4.0) / 9.6 * 100.0).abs() < EPS);
        assert!((r.strength_pct - 58.333333333333).abs() < 1e-6);
    }

    #[test]
    fn spec_exact_opposition() {
        let r = match_pair(ChartBody::Sun, 0.0, ChartBody::Moon, 180.0)
            .unwrap()
            .unwrap();
        assert_eq!(r.kind, AspectKind::Opposition);
        assert!(r.orb_deviation.abs() < EPS);
        assert!((r.strength_pct - 100.0).abs() < EPS);
    }

    #[test]
    fn match_symmetric_under_swap() {
        let ab = match_pair(ChartBody::Sun, 24.0, ChartBody::Mercury, 20.0)
            .unwrap()
            .unwrap();
        let ba = match_pair(ChartBody::Mercury, 20.0, ChartBody::Sun, 24.0)
            .unwrap()
            .unwrap();
        assert_eq!(ab.kind, ba.kind);
        assert!((ab.orb_deviation - ba.orb_deviation).abs() < EPS);
        assert!((ab.max_orb - ba.max_orb).abs() < EPS);
        assert!((ab.strength_pct - ba.strength_pct).abs() < EPS);
    }

    #[test]
    fn wraparound_conjunction() {
        // 355 and 3: separation 8, inside Sun-widened orb 9.6
        let r = match_pair(ChartBody::Sun, 355.0, ChartBody::Venus, 3.0)
            .unwrap()
            .unwrap();
        assert_eq!(r.kind, AspectKind::Conjunction);
        assert!((r.orb_deviation - 8.0).abs() < EPS);
    }

    #[test]
    fn no_aspect_outside_all_windows() {
        // Separation 75: nearest targets 60 (orb <= 7.2) and 90 (orb <= 8.4)
        let r = match_pair(ChartBody::Uranus, 0.0, ChartBody::Neptune, 75.0).unwrap();
        assert!(r.is_none());
    }

    #[test]
    fn declaration_order_tie_break() {
        // Separation 174 for two luminaries: opposition window (180 +- 9.6)
        // wins before the quincunx window (150 +- 3.6) is even reachable.
        let r = match_pair(ChartBody::Sun, 0.0, ChartBody::Moon, 174.0)
            .unwrap()
            .unwrap();
        assert_eq!(r.kind, AspectKind::Opposition);
    }

    #[test]
    fn non_finite_is_error() {
        let e = match_pair(ChartBody::Sun, f64::NAN, ChartBody::Moon, 0.0).unwrap_err();
        assert_eq!(e, AstraeaError::NonFiniteLongitude { body: ChartBody::Sun });
    }

    #[test]
    fn all_aspects_sorted_desc() {
        let pos = positions(&[
            (ChartBody::Sun, 0.0),
            (ChartBody::Moon, 180.0),  // exact opposition, 100%
            (ChartBody::Mercury, 4.0), // conjunction, weaker
        ]);
        let records = all_aspects(&pos, &AspectConfig::default(), true);
        assert!(!records.is_empty());
        for w in records.windows(2) {
            assert!(w[0].strength_pct >= w[1].strength_pct);
        }
        assert_eq!(records[0].kind, AspectKind::Opposition);
    }

    #[test]
    fn all_aspects_skips_bad_pair() {
        let pos = positions(&[
            (ChartBody::Sun, 0.0),
            (ChartBody::Moon, 180.0),
            (ChartBody::Mars, f64::NAN),
        ]);
        let records = all_aspects(&pos, &AspectConfig::default(), true);
        // Sun-Moon still matched; every Mars pair dropped.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, AspectKind::Opposition);
    }

    #[test]
    fn all_aspects_empty_input() {
        let records = all_aspects(&BTreeMap::new(), &AspectConfig::default(), true);
        assert!(records.is_empty());
    }

    #[test]
    fn minor_aspects_filtered_by_default() {
        // Separation 45 between two personal bodies: semisquare (orb 2)
        let pos = positions(&[(ChartBody::Mercury, 0.0), (ChartBody::Venus, 45.0)]);
        let without = all_aspects(&pos, &AspectConfig::default(), false);
        assert!(without.is_empty());
        let with = all_aspects(&pos, &AspectConfig::default(), true);
        assert_eq!(with.len(), 1);
        assert_eq!(with[0].kind, AspectKind::Semisquare);
    }

    #[test]
    fn min_strength_filter() {
        let pos = positions(&[(ChartBody::Sun, 24.0), (ChartBody::Mercury, 20.0)]);
        let config = AspectConfig {
            min_strength_pct: 90.0,
            ..AspectConfig::default()
        };
        assert!(all_aspects(&pos, &config, true).is_empty());
    }

    #[test]
    fn major_aspects_capped() {
        // Six bodies clustered: many conjunctions
        let pos = positions(&[
            (ChartBody::Sun, 0.0),
            (ChartBody::Moon, 2.0),
            (ChartBody::Mercury, 4.0),
            (ChartBody::Venus, 6.0),
            (ChartBody::Mars, 1.0),
            (ChartBody::Jupiter, 3.0),
        ]);
        let config = AspectConfig {
            major_cap: 3,
            ..AspectConfig::default()
        };
        let records = major_aspects(&pos, &config);
        assert_eq!(records.len(), 3);
        for r in &records {
            assert_eq!(r.class(), AspectClass::Major);
        }
    }
}
