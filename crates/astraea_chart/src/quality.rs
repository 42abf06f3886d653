//! Completeness and consistency validation for a computed position set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use astraea_base::{ALL_PLANETS, ChartBody, PlanetPosition};

/// Verdict on one computation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartQuality {
    /// True when every expected body is present and in range.
    pub complete: bool,
    /// Found-over-expected ratio as a percentage.
    pub completeness_pct: f64,
    /// Short human-readable summary for the facade's caller.
    pub message: String,
}

/// Validate a position set against the expected 10 placeable bodies.
///
/// Fails when bodies are missing or any degree sits outside [0, 30) or is
/// non-finite. Frame angles do not count toward completeness. A partial
/// run is reported, not rejected: the ratio quantifies what was produced.
pub fn validate_quality(positions: &BTreeMap<ChartBody, PlanetPosition>) -> ChartQuality {
    let expected = ALL_PLANETS.len();
    let mut found = 0usize;
    let mut bad_degrees: Vec<ChartBody> = Vec::new();

    for body in ALL_PLANETS {
        let Some(pos) = positions.get(&body) else {
            continue;
        };
        if pos.degree.is_finite() && (0.0..30.0).contains(&pos.degree) {
            found += 1;
        } else {
            bad_degrees.push(body);
        }
    }

    let completeness_pct = found as f64 / expected as f64 * 100.0;
    let complete = found == expected && bad_degrees.is_empty();
    let message = if complete {
        format!("complete: {found}/{expected} bodies")
    } else if bad_degrees.is_empty() {
        format!("incomplete: {found}/{expected} bodies")
    } else {
        let names: Vec<&str> = bad_degrees.iter().map(|b| b.name()).collect();
        format!(
            "incomplete: {found}/{expected} bodies, out-of-range degree for {}",
            names.join(", ")
        )
    };

    ChartQuality {
        complete,
        completeness_pct,
        message,
    }
}
