//! Geometry analysis engines for natal charts.
//!
//! This crate provides:
//! - Aspect matching with per-pair orb widening and strength scoring
//! - Multi-body pattern detection (stelliums, grand trines, T-squares)
//! - House placement with circular wrap-around semantics
//! - Transit matching against a tighter orb table, with retrograde flags
//!
//! All engines are stateless, synchronous transformations; inputs are
//! already-fetched longitudes and the engines never touch the ephemeris.

pub mod aspect;
pub mod aspect_types;
pub mod house;
pub mod house_types;
pub mod pattern;
pub mod transit;
pub mod transit_types;

pub use aspect::{all_aspects, effective_orb, major_aspects, match_pair, strength_pct};
pub use aspect_types::{
    ALL_ASPECTS, AspectClass, AspectConfig, AspectKind, AspectNature, AspectRecord,
};
pub use house::{build_houses, check_cusps, house_placements, house_span, is_in_house};
pub use house_types::{HouseCusp, HousePlacement};
pub use pattern::{Pattern, PatternKind, detect_patterns};
pub use transit::{retrograde_bodies, transit_aspects, transit_orb};
pub use transit_types::{TransitConfig, TransitPosition, TransitRecord};
