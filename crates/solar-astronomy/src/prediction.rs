//! Day/Night Prediction Module.
//!
//! Pairs a sunrise and a sunset for a reference instant and classifies that
//! instant as day or night.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use solar_types::{is_valid_coordinate, GeoCoordinate, LatLng, SolarError, SolarEvent, Zenith};

use crate::sunrise::compute_event;

/// Source of the current instant.
///
/// Read once at the API boundary when the caller does not pass a date.
pub trait Clock: std::fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Host wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> { Utc::now() }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self { Self(instant) }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> { self.0 }
}

/// Sunrise and sunset surrounding a reference instant.
///
/// If the reference instant is at or after the sunset computed for its UTC
/// day, both events are moved forward 24 hours, so `date < sunset` always
/// holds and `sunrise` is the next (or current) sunrise.
///
/// Day is the half-open interval `[sunrise, sunset)`: exactly at sunrise is
/// day, exactly at sunset is night.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDayPrediction")]
pub struct DayPrediction {
    coordinate: GeoCoordinate,
    zenith: Zenith,
    date: DateTime<Utc>,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

/// Wire shape of `DayPrediction`, checked before it becomes one.
#[derive(Deserialize)]
struct RawDayPrediction {
    coordinate: GeoCoordinate,
    zenith: Zenith,
    date: DateTime<Utc>,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

impl TryFrom<RawDayPrediction> for DayPrediction {
    type Error = SolarError;

    fn try_from(raw: RawDayPrediction) -> Result<Self, Self::Error> {
        let coordinate = GeoCoordinate::new(raw.coordinate.lat, raw.coordinate.lng)?;

        if raw.sunrise >= raw.sunset {
            return Err(SolarError::ValidationError(format!(
                "Sunrise {} is not before sunset {}", raw.sunrise, raw.sunset
            )));
        }
        if raw.date >= raw.sunset {
            return Err(SolarError::ValidationError(format!(
                "Date {} is not before sunset {}", raw.date, raw.sunset
            )));
        }

        Ok(Self {
            coordinate,
            zenith: raw.zenith,
            date: raw.date,
            sunrise: raw.sunrise,
            sunset: raw.sunset,
        })
    }
}

impl DayPrediction {
    /// Predicts sunrise and sunset around `date`.
    ///
    /// Returns `None` when either event does not occur on that day (polar
    /// day or night for the chosen zenith).
    ///
    /// # Panics
    /// Panics if latitude is outside [-90, 90] or longitude outside [-180, 180].
    ///
    /// # Example
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use solar_astronomy::prediction::DayPrediction;
    /// use solar_types::Zenith;
    ///
    /// let date = Utc.with_ymd_and_hms(2024, 11, 3, 10, 0, 0).unwrap();
    /// let cupertino = DayPrediction::create(date, 37.334606, -122.009102, Zenith::Official).unwrap();
    /// assert!(cupertino.is_nighttime());
    /// ```
    pub fn create(date: DateTime<Utc>, latitude: f64, longitude: f64, zenith: Zenith) -> Option<Self> {
        assert!(
            is_valid_coordinate(latitude, longitude),
            "coordinates ({}, {}) must be valid",
            latitude,
            longitude
        );
        Self::compute(date, GeoCoordinate::new_unchecked(latitude, longitude), zenith)
    }

    /// Safe version of [`DayPrediction::create`].
    ///
    /// # Errors
    /// Returns `ValidationError` if the coordinate is out of range.
    pub fn try_create(
        date: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        zenith: Zenith,
    ) -> Result<Option<Self>, SolarError> {
        let coordinate = GeoCoordinate::new(latitude, longitude)?;
        Ok(Self::compute(date, coordinate, zenith))
    }

    /// Predicts around the current system time.
    ///
    /// # Panics
    /// Panics on an invalid coordinate, like [`DayPrediction::create`].
    pub fn now(latitude: f64, longitude: f64, zenith: Zenith) -> Option<Self> {
        Self::create(SystemClock.now(), latitude, longitude, zenith)
    }

    /// Predicts for any location type that exposes latitude and longitude.
    ///
    /// # Panics
    /// Panics on an invalid coordinate, like [`DayPrediction::create`].
    pub fn for_location<L: LatLng>(date: DateTime<Utc>, location: &L, zenith: Zenith) -> Option<Self> {
        Self::create(date, location.latitude(), location.longitude(), zenith)
    }

    pub fn builder<'a>() -> DayPredictionBuilder<'a> {
        DayPredictionBuilder::new()
    }

    fn compute(date: DateTime<Utc>, coordinate: GeoCoordinate, zenith: Zenith) -> Option<Self> {
        let day = date.date_naive();

        let sunrise = compute_event(SolarEvent::Sunrise, day, coordinate.lat, coordinate.lng, zenith)?;
        let sunset = compute_event(SolarEvent::Sunset, day, coordinate.lat, coordinate.lng, zenith)?;

        // This day's pair has already elapsed; use the next one
        let (sunrise, sunset) = if date >= sunset {
            (
                sunrise.checked_add_signed(Duration::days(1))?,
                sunset.checked_add_signed(Duration::days(1))?,
            )
        } else {
            (sunrise, sunset)
        };

        Some(Self { coordinate, zenith, date, sunrise, sunset })
    }

    /// The reference instant the prediction was made for.
    pub fn date(&self) -> DateTime<Utc> { self.date }
    pub fn sunrise(&self) -> DateTime<Utc> { self.sunrise }
    pub fn sunset(&self) -> DateTime<Utc> { self.sunset }
    pub fn coordinate(&self) -> GeoCoordinate { self.coordinate }
    pub fn zenith(&self) -> Zenith { self.zenith }

    /// Time between sunrise and sunset.
    pub fn day_length(&self) -> Duration {
        self.sunset - self.sunrise
    }

    /// True if the reference instant lies in `[sunrise, sunset)`.
    pub fn is_daytime(&self) -> bool {
        self.is_daytime_at(self.date)
    }

    pub fn is_nighttime(&self) -> bool {
        !self.is_daytime()
    }

    /// Classifies another instant against this prediction's sunrise and sunset.
    pub fn is_daytime_at(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.sunrise && instant < self.sunset
    }
}

/// Builder with validation for `DayPrediction`.
///
/// The date falls back to the configured clock, then to the system clock.
#[derive(Debug, Default)]
pub struct DayPredictionBuilder<'a> {
    date: Option<DateTime<Utc>>,
    coordinate: Option<(f64, f64)>,
    zenith: Option<Zenith>,
    clock: Option<&'a dyn Clock>,
}

impl<'a> DayPredictionBuilder<'a> {
    pub fn new() -> Self { Self::default() }

    pub fn date(mut self, date: DateTime<Utc>) -> Self { self.date = Some(date); self }
    pub fn coordinate(mut self, latitude: f64, longitude: f64) -> Self { self.coordinate = Some((latitude, longitude)); self }
    pub fn zenith(mut self, zenith: Zenith) -> Self { self.zenith = Some(zenith); self }
    pub fn clock(mut self, clock: &'a dyn Clock) -> Self { self.clock = Some(clock); self }

    pub fn location<L: LatLng>(mut self, location: &L) -> Self {
        self.coordinate = Some((location.latitude(), location.longitude()));
        self
    }

    /// Builds and validates.
    ///
    /// `Ok(None)` means the sun does not rise or does not set that day.
    pub fn build(self) -> Result<Option<DayPrediction>, SolarError> {
        let (lat, lng) = self
            .coordinate
            .ok_or_else(|| SolarError::invalid_config("DayPrediction requires a coordinate"))?;
        let coordinate = GeoCoordinate::new(lat, lng)?;

        let date = match (self.date, self.clock) {
            (Some(date), _) => date,
            (None, Some(clock)) => clock.now(),
            (None, None) => SystemClock.now(),
        };

        Ok(DayPrediction::compute(date, coordinate, self.zenith.unwrap_or_default()))
    }
}
