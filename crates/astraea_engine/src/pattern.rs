//! Multi-body pattern detection over matched aspects.
//!
//! Stelliums are found exactly, as connected components of the strong
//! conjunction graph. Grand trines and T-squares are count-based heuristics
//! over qualifying aspects; they flag that the ingredients are present
//! without verifying the closed shape.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use astraea_base::ChartBody;

use crate::aspect_types::{AspectKind, AspectRecord};

/// Minimum conjunction strength for a stellium edge.
const STELLIUM_MIN_STRENGTH: f64 = 70.0;
/// Minimum aspect strength for grand-trine and T-square ingredients.
const SHAPE_MIN_STRENGTH: f64 = 60.0;
/// Minimum bodies in a stellium cluster.
const STELLIUM_MIN_BODIES: usize = 3;

/// Recognized chart patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    Stellium,
    GrandTrine,
    TSquare,
}

impl PatternKind {
    /// English name of the pattern.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stellium => "Stellium",
            Self::GrandTrine => "Grand Trine",
            Self::TSquare => "T-Square",
        }
    }
}

/// A named grouping of bodies derived from a set of aspect records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Which shape was detected.
    pub kind: PatternKind,
    /// Participating bodies in canonical order.
    pub bodies: Vec<ChartBody>,
    /// Human-readable label, e.g. "Stellium: Sun, Mercury, Venus".
    pub label: String,
}

impl Pattern {
    fn new(kind: PatternKind, bodies: BTreeSet<ChartBody>) -> Self {
        let bodies: Vec<ChartBody> = bodies.into_iter().collect();
        let names: Vec<&str> = bodies.iter().map(|b| b.name()).collect();
        let label = format!("{}: {}", kind.name(), names.join(", "));
        Self { kind, bodies, label }
    }
}

/// Detect stelliums, grand trines, and T-squares in a set of aspects.
///
/// Empty input produces empty output; absence of patterns is not an error.
pub fn detect_patterns(aspects: &[AspectRecord]) -> Vec<Pattern> {
    let mut patterns = stelliums(aspects);
    if let Some(p) = grand_trine(aspects) {
        patterns.push(p);
    }
    if let Some(p) = t_square(aspects) {
        patterns.push(p);
    }
    patterns
}

/// Connected components of the strong conjunction graph, size >= 3.
fn stelliums(aspects: &[AspectRecord]) -> Vec<Pattern> {
    let mut adjacency: BTreeMap<ChartBody, Vec<ChartBody>> = BTreeMap::new();
    for r in aspects {
        if r.kind == AspectKind::Conjunction && r.strength_pct >= STELLIUM_MIN_STRENGTH {
            adjacency.entry(r.body_a).or_default().push(r.body_b);
            adjacency.entry(r.body_b).or_default().push(r.body_a);
        }
    }

    let mut visited: BTreeSet<ChartBody> = BTreeSet::new();
    let mut patterns = Vec::new();
    for &start in adjacency.keys() {
        if visited.contains(&start) {
            continue;
        }
        // Depth-first walk of one component.
        let mut component: BTreeSet<ChartBody> = BTreeSet::new();
        let mut stack = vec![start];
        while let Some(body) = stack.pop() {
            if !component.insert(body) {
                continue;
            }
            visited.insert(body);
            if let Some(neighbors) = adjacency.get(&body) {
                stack.extend(neighbors.iter().copied());
            }
        }
        if component.len() >= STELLIUM_MIN_BODIES {
            patterns.push(Pattern::new(PatternKind::Stellium, component));
        }
    }
    patterns
}

/// Count heuristic: three or more strong trines flag a grand trine.
fn grand_trine(aspects: &[AspectRecord]) -> Option<Pattern> {
    let trines: Vec<&AspectRecord> = aspects
        .iter()
        .filter(|r| r.kind == AspectKind::Trine && r.strength_pct >= SHAPE_MIN_STRENGTH)
        .collect();
    if trines.len() < 3 {
        return None;
    }
    Some(Pattern::new(PatternKind::GrandTrine, participants(&trines)))
}

/// Count heuristic: one strong opposition plus two strong squares.
fn t_square(aspects: &[AspectRecord]) -> Option<Pattern> {
    let strong = |kind: AspectKind| -> Vec<&AspectRecord> {
        aspects
            .iter()
            .filter(|r| r.kind == kind && r.strength_pct >= SHAPE_MIN_STRENGTH)
            .collect()
    };
    let oppositions = strong(AspectKind::Opposition);
    let squares = strong(AspectKind::Square);
    if oppositions.is_empty() || squares.len() < 2 {
        return None;
    }
    let mut members = participants(&oppositions);
    members.extend(participants(&squares));
    Some(Pattern::new(PatternKind::TSquare, members))
}

/// Distinct bodies participating in a set of records.
fn participants(records: &[&AspectRecord]) -> BTreeSet<ChartBody> {
    let mut bodies = BTreeSet::new();
    for r in records {
        bodies.insert(r.body_a);
        bodies.insert(r.body_b);
    }
    bodies
}
