//! Transiting-to-natal aspect matching against a tight orb table.
//!
//! Same angular-distance logic as the natal aspect engine, but transit
//! windows are conventionally much narrower (under a degree) and every
//! ordered (transiting, natal) pair is checked against every aspect rather
//! than stopping at the first match. The engine is stateless in time:
//! callers supply the current-position map for whichever instant they want.

use std::collections::BTreeMap;

use tracing::warn;

use astraea_base::{BodyClass, ChartBody, angular_distance};

use crate::aspect::strength_pct;
use crate::aspect_types::{ALL_ASPECTS, AspectKind};
use crate::transit_types::{TransitConfig, TransitPosition, TransitRecord};

/// Tight per-body, per-aspect transit orb in degrees.
///
/// Factored as an aspect base (1.0 for conjunction/opposition down to 0.5
/// for the minors) scaled by the transiting body's class, keeping every
/// value in the conventional sub-degree band.
pub fn transit_orb(transiting: ChartBody, kind: AspectKind) -> f64 {
    let base = match kind {
        AspectKind::Conjunction | AspectKind::Opposition => 1.0,
        AspectKind::Trine | AspectKind::Square => 0.8,
        AspectKind::Sextile => 0.7,
        AspectKind::Quincunx
        | AspectKind::Semisextile
        | AspectKind::Semisquare
        | AspectKind::Sesquisquare => 0.5,
    };
    let factor = match transiting.class() {
        BodyClass::Luminary | BodyClass::AnglePoint => 1.0,
        BodyClass::Personal => 0.9,
        BodyClass::Social | BodyClass::Outer => 0.8,
    };
    base * factor
}

/// All transiting-to-natal matches, strongest first, capped at
/// `config.result_cap`.
///
/// Every ordered (transiting, natal) pair is checked against every aspect
/// definition; all in-orb matches are collected and annotated with the
/// transiting body's retrograde flag. A pair with a non-finite longitude is
/// warned about and skipped.
pub fn transit_aspects(
    natal: &BTreeMap<ChartBody, f64>,
    current: &BTreeMap<ChartBody, TransitPosition>,
    config: &TransitConfig,
) -> Vec<TransitRecord> {
    let mut records = Vec::new();

    for (&transiting, state) in current {
        if !state.longitude.is_finite() {
            warn!(body = %transiting, "skipping transiting body with non-finite longitude");
            continue;
        }
        for (&natal_body, &natal_lon) in natal {
            if !natal_lon.is_finite() {
                warn!(body = %natal_body, "skipping natal body with non-finite longitude");
                continue;
            }
            let separation = angular_distance(state.longitude, natal_lon);
            for kind in ALL_ASPECTS {
                let deviation = (separation - kind.target_angle()).abs();
                let max_orb = transit_orb(transiting, kind);
                if deviation <= max_orb {
                    records.push(TransitRecord {
                        transiting,
                        natal: natal_body,
                        kind,
                        orb_deviation: deviation,
                        max_orb,
                        strength_pct: strength_pct(deviation, max_orb),
                        is_retrograde: state.is_retrograde(),
                    });
                }
            }
        }
    }

    records.sort_by(|x, y| y.strength_pct.total_cmp(&x.strength_pct));
    records.truncate(config.result_cap);
    records
}

/// Non-luminary bodies currently in retrograde, in canonical body order.
///
/// The Sun and Moon never retrograde geocentrically and are excluded even
/// if the provider reports a negative velocity.
pub fn retrograde_bodies(current: &BTreeMap<ChartBody, TransitPosition>) -> Vec<ChartBody> {
    current
        .iter()
        .filter(|(body, state)| {
            !body.is_luminary() && !body.is_angle_point() && state.is_retrograde()
        })
        .map(|(body, _)| *body)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    fn natal(entries: &[(ChartBody, f64)]) -> BTreeMap<ChartBody, f64> {
        entries.iter().copied().collect()
    }

    fn current(
        entries: &[(ChartBody, f64, f64)],
    ) -> BTreeMap<ChartBody, TransitPosition> {
        entries
            .iter()
            .map(|&(b, longitude, speed_deg_per_day)| {
                (
                    b,
                    TransitPosition {
                        longitude,
                        speed_deg_per_day,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn orbs_are_sub_degree() {
        for b in astraea_base::ALL_PLANETS {
            for kind in ALL_ASPECTS {
                let orb = transit_orb(b, kind);
                assert!((0.4..=1.0).contains(&orb), "{b} {kind} orb {orb}");
            }
        }
    }

    #[test]
    fn orbs_tighter_than_natal() {
        for b in astraea_base::ALL_PLANETS {
            for kind in ALL_ASPECTS {
                assert!(transit_orb(b, kind) < kind.base_orb() * b.orb_multiplier());
            }
        }
    }

    #[test]
    fn exact_transit_conjunction() {
        let n = natal(&[(ChartBody::Sun, 100.0)]);
        let c = current(&[(ChartBody::Jupiter, 100.0, 0.1)]);
        let records = transit_aspects(&n, &c, &TransitConfig::default());
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.transiting, ChartBody::Jupiter);
        assert_eq!(r.natal, ChartBody::Sun);
        assert_eq!(r.kind, AspectKind::Conjunction);
        assert!(r.orb_deviation.abs() < EPS);
        assert!((r.strength_pct - 100.0).abs() < EPS);
        assert!(!r.is_retrograde);
    }

    #[test]
    fn retrograde_flag_carried_onto_record() {
        let n = natal(&[(ChartBody::Sun, 100.0)]);
        let c = current(&[(ChartBody::Mercury, 100.2, -0.3)]);
        let records = transit_aspects(&n, &c, &TransitConfig::default());
        assert_eq!(records.len(), 1);
        assert!(records[0].is_retrograde);
    }

    #[test]
    fn wide_separation_no_match() {
        // 4 degrees off a conjunction is a natal-orb match but far outside
        // any transit window.
        let n = natal(&[(ChartBody::Sun, 100.0)]);
        let c = current(&[(ChartBody::Mercury, 104.0, 0.5)]);
        assert!(transit_aspects(&n, &c, &TransitConfig::default()).is_empty());
    }

    #[test]
    fn square_within_tight_orb() {
        // Saturn square orb = 0.8 * 0.8 = 0.64
        let n = natal(&[(ChartBody::Moon, 10.0)]);
        let c = current(&[(ChartBody::Saturn, 100.5, 0.03)]);
        let records = transit_aspects(&n, &c, &TransitConfig::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, AspectKind::Square);
        assert!((records[0].orb_deviation - 0.5).abs() < EPS);
        assert!((records[0].max_orb - 0.64).abs() < EPS);
    }

    #[test]
    fn ordered_pairs_checked_both_ways() {
        // Two bodies transit each other's natal places.
        let n = natal(&[(ChartBody::Sun, 0.0), (ChartBody::Moon, 180.0)]);
        let c = current(&[(ChartBody::Sun, 180.0, 1.0), (ChartBody::Moon, 0.0, 13.0)]);
        let records = transit_aspects(&n, &c, &TransitConfig::default());
        // Each transiting body is conjunct one natal body and opposed the other.
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn results_sorted_and_capped() {
        let n = natal(&[
            (ChartBody::Sun, 0.0),
            (ChartBody::Moon, 90.0),
            (ChartBody::Mercury, 180.0),
            (ChartBody::Venus, 270.0),
        ]);
        // A body at 0.1 aspects all four natal points within orb.
        let c = current(&[(ChartBody::Jupiter, 0.1, 0.08), (ChartBody::Mars, 180.2, 0.5)]);
        let config = TransitConfig { result_cap: 3 };
        let records = transit_aspects(&n, &c, &config);
        assert_eq!(records.len(), 3);
        for w in records.windows(2) {
            assert!(w[0].strength_pct >= w[1].strength_pct);
        }
    }

    #[test]
    fn non_finite_transiting_body_skipped() {
        let n = natal(&[(ChartBody::Sun, 100.0)]);
        let c = current(&[
            (ChartBody::Mercury, f64::NAN, 0.5),
            (ChartBody::Venus, 100.0, 1.1),
        ]);
        let records = transit_aspects(&n, &c, &TransitConfig::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].transiting, ChartBody::Venus);
    }

    #[test]
    fn no_transits_is_empty_not_error() {
        let n = natal(&[(ChartBody::Sun, 0.0)]);
        let c = current(&[(ChartBody::Pluto, 137.0, 0.01)]);
        assert!(transit_aspects(&n, &c, &TransitConfig::default()).is_empty());
    }

    #[test]
    fn retrograde_summary_excludes_luminaries() {
        let c = current(&[
            (ChartBody::Sun, 10.0, -1.0), // bogus provider value, still excluded
            (ChartBody::Mercury, 50.0, -1.2),
            (ChartBody::Venus, 80.0, 0.9),
            (ChartBody::Saturn, 200.0, -0.05),
        ]);
        assert_eq!(
            retrograde_bodies(&c),
            vec![ChartBody::Mercury, ChartBody::Saturn]
        );
    }

    #[test]
    fn retrograde_summary_empty_when_all_direct() {
        let c = current(&[(ChartBody::Mars, 10.0, 0.6), (ChartBody::Jupiter, 40.0, 0.2)]);
        assert!(retrograde_bodies(&c).is_empty());
    }

    #[test]
    fn retrograde_summary_canonical_order() {
        let c = current(&[
            (ChartBody::Pluto, 10.0, -0.01),
            (ChartBody::Mercury, 50.0, -1.2),
            (ChartBody::Neptune, 80.0, -0.02),
        ]);
        assert_eq!(
            retrograde_bodies(&c),
            vec![ChartBody::Mercury, ChartBody::Neptune, ChartBody::Pluto]
        );
    }
}
