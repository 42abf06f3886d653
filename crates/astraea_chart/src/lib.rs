//! Chart assembly facade over the astraea geometry engines.
//!
//! This crate owns the seam to the external ephemeris computation (the
//! [`EphemerisProvider`] trait), orchestrates the aspect/house/transit
//! engines into complete natal charts and transit reports, and validates
//! that a computation run produced a complete, internally consistent chart.

pub mod chart;
pub mod provider;
pub mod quality;

pub use chart::{
    ChartRequest, NatalChart, TransitReport, compute_natal_chart, compute_transit_report,
    transit_forecast,
};
pub use provider::{EphemerisProvider, GeoLocation, HouseFrame};
pub use quality::{ChartQuality, validate_quality};
