//! Foundation types for the astraea chart engine.
//!
//! This crate provides:
//! - The 12 tropical zodiac signs and sign/degree positions
//! - The chart bodies (Sun through Pluto plus the frame angles)
//! - Ecliptic angle normalization and angular distance
//!
//! Everything here is a pure transformation over already-fetched numeric
//! inputs; no I/O, no shared state.

pub mod angle;
pub mod body;
pub mod error;
pub mod sign;

pub use angle::{angular_distance, normalize_360};
pub use body::{ALL_BODIES, ALL_PLANETS, BodyClass, ChartBody};
pub use error::AstraeaError;
pub use sign::{ALL_SIGNS, Element, Modality, PlanetPosition, Sign};
