//! # Solar
//!
//! Sunrise and sunset times for any coordinate, with day/night classification.
//!
//! This crate is a facade that re-exports functionality from the `solar` workspace.
//!
//! ## Modules
//!
//! - `types`: Core types (GeoCoordinate, Zenith, SolarEvent, SolarError)
//! - `sunrise`: Single sunrise/sunset computation
//! - `prediction`: Day/night prediction around an instant
//! - `extension`: `NaiveDate` extension trait
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use solar::prelude::*;
//!
//! let now = Utc.with_ymd_and_hms(2024, 11, 3, 22, 0, 0).unwrap();
//! let prediction = DayPrediction::create(now, 37.334606, -122.009102, Zenith::Official)
//!     .expect("sun rises and sets at this latitude");
//!
//! assert!(prediction.is_daytime());
//! println!("Sunrise: {}, sunset: {}", prediction.sunrise(), prediction.sunset());
//! ```

pub mod extension;

pub use solar_types::{GeoCoordinate, LatLng, SolarError, SolarEvent, Zenith};
pub use solar_astronomy::{
    compute_event, normalise, Clock, DayPrediction, DayPredictionBuilder, FixedClock, SystemClock,
};
pub use extension::SolarDateExt;

pub mod types {
    pub use solar_types::*;
}

pub mod sunrise {
    pub use solar_astronomy::sunrise::*;
}

pub mod prediction {
    pub use solar_astronomy::prediction::*;
}

/// Re-exports for convenience.
pub mod prelude {
    pub use solar_types::{GeoCoordinate, LatLng, SolarError, SolarEvent, Zenith};
    pub use solar_astronomy::{compute_event, Clock, DayPrediction, FixedClock, SystemClock};
    pub use crate::extension::SolarDateExt;
}
