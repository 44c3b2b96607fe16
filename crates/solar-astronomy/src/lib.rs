//! Sunrise, sunset and day/night prediction.
//!
//! - [`sunrise`]: single sunrise or sunset instant for a calendar day
//! - [`prediction`]: sunrise/sunset pair around an instant, with day/night classification

pub mod prediction;
pub mod sunrise;

pub use prediction::{Clock, DayPrediction, DayPredictionBuilder, FixedClock, SystemClock};
pub use sunrise::{compute_event, normalise};
