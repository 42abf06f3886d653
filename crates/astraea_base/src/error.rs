//! Error type shared across the astraea crates.

use thiserror::Error;

use crate::body::ChartBody;

/// Errors from chart geometry analysis and its provider boundary.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AstraeaError {
    /// A longitude was NaN or infinite.
    #[error("non-finite longitude for {body}")]
    NonFiniteLongitude {
        /// The body whose position was invalid.
        body: ChartBody,
    },
    /// A required body is absent from a position map.
    #[error("missing position for {body}")]
    MissingPosition {
        /// The absent body.
        body: ChartBody,
    },
    /// The supplied house cusps are unusable.
    #[error("invalid house cusps: {0}")]
    InvalidCusps(&'static str),
    /// Error reported by the external ephemeris provider.
    #[error("ephemeris provider: {0}")]
    Provider(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_body() {
        let e = AstraeaError::NonFiniteLongitude {
            body: ChartBody::Mars,
        };
        assert_eq!(e.to_string(), "non-finite longitude for Mars");
    }

    #[test]
    fn provider_message_passthrough() {
        let e = AstraeaError::Provider("kernel not loaded".into());
        assert_eq!(e.to_string(), "ephemeris provider: kernel not loaded");
    }
}
