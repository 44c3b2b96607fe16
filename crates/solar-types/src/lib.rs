//! Core types for solar.
//!
//! Geographic coordinates, the zenith thresholds that define sunrise and the
//! twilight variants, and the error type shared by the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod error;

pub use error::SolarError;

/// Geographic coordinates (latitude, longitude) in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoordinate {
    /// Creates a new validated coordinate.
    ///
    /// Returns `Err(SolarError::ValidationError)` if coordinates are out of range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, SolarError> {
        if !is_valid_coordinate(lat, lng) {
            return Err(SolarError::invalid_coordinate(lat, lng));
        }
        Ok(Self { lat, lng })
    }

    /// Creates a coordinate without validation. Use with trusted inputs only.
    #[inline]
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_coordinate(self.lat, self.lng)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.lat, self.lng)
    }
}

/// Returns true if latitude is within [-90, 90] and longitude within [-180, 180].
///
/// NaN is never valid.
#[inline]
pub fn is_valid_coordinate(lat: f64, lng: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

/// Anything that can be read as a latitude/longitude pair in degrees.
///
/// Implement this for a platform or application location type to pass it
/// straight to the prediction API.
pub trait LatLng {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

impl LatLng for GeoCoordinate {
    fn latitude(&self) -> f64 { self.lat }
    fn longitude(&self) -> f64 { self.lng }
}

/// `(latitude, longitude)` tuple.
impl LatLng for (f64, f64) {
    fn latitude(&self) -> f64 { self.0 }
    fn longitude(&self) -> f64 { self.1 }
}

impl<T: LatLng + ?Sized> LatLng for &T {
    fn latitude(&self) -> f64 { (**self).latitude() }
    fn longitude(&self) -> f64 { (**self).longitude() }
}

/// Angle from the vertical at which the sun counts as risen or set.
///
/// `Official` is the usual sunrise/sunset (upper limb on the horizon with
/// refraction); the others are the civil, nautical and astronomical twilight
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zenith {
    /// 90.83°
    Official,
    /// 96°
    Civil,
    /// 102°
    Nautical,
    /// 108°
    Astronomical,
}

impl Zenith {
    pub const ALL: [Zenith; 4] = [Zenith::Official, Zenith::Civil, Zenith::Nautical, Zenith::Astronomical];

    /// Zenith angle in degrees.
    pub const fn degrees(self) -> f64 {
        match self {
            Zenith::Official => 90.83,
            Zenith::Civil => 96.0,
            Zenith::Nautical => 102.0,
            Zenith::Astronomical => 108.0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Zenith::Official => "official",
            Zenith::Civil => "civil",
            Zenith::Nautical => "nautical",
            Zenith::Astronomical => "astronomical",
        }
    }
}

impl Default for Zenith {
    fn default() -> Self {
        Self::Official
    }
}

impl fmt::Display for Zenith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}°)", self.name(), self.degrees())
    }
}

impl FromStr for Zenith {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zenith::ALL
            .into_iter()
            .find(|z| z.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SolarError::invalid_config(format!(
                "Unknown zenith '{}', expected official, civil, nautical or astronomical", s
            )))
    }
}

/// Which crossing of the zenith threshold to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
}

impl SolarEvent {
    /// Local solar hour used as the first approximation of the event.
    pub const fn base_hour(self) -> f64 {
        match self {
            SolarEvent::Sunrise => 6.0,
            SolarEvent::Sunset => 18.0,
        }
    }

    pub const fn is_sunrise(self) -> bool {
        matches!(self, SolarEvent::Sunrise)
    }

    pub const fn is_sunset(self) -> bool {
        matches!(self, SolarEvent::Sunset)
    }
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolarEvent::Sunrise => "Sunrise",
            SolarEvent::Sunset => "Sunset",
        };
        write!(f, "{}", s)
    }
}
