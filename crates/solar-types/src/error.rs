use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from solar operations.
///
/// A sun that never crosses the horizon is not an error; those cases are
/// reported as `None` by the calculation functions.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum SolarError {
    /// Coordinate outside [-90, 90] / [-180, 180].
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl SolarError {
    /// Creates a `ValidationError` describing the offending coordinate.
    pub fn invalid_coordinate(lat: f64, lng: f64) -> Self {
        let reason = if !(-90.0..=90.0).contains(&lat) {
            format!("Latitude {} out of range [-90, 90]", lat)
        } else {
            format!("Longitude {} out of range [-180, 180]", lng)
        };
        Self::ValidationError(reason)
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}
