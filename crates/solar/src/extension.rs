//! Extension trait for `NaiveDate`.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use solar_astronomy::{compute_event, DayPrediction};
use solar_types::{GeoCoordinate, LatLng, SolarError, SolarEvent, Zenith};

/// Extends `NaiveDate` with sunrise/sunset lookups.
pub trait SolarDateExt {
    /// Official sunrise on this day.
    ///
    /// # Panics
    /// Panics if the location is outside [-90, 90] / [-180, 180].
    fn sunrise<L: LatLng>(&self, location: &L) -> Option<DateTime<Utc>>;

    /// Official sunset on this day.
    ///
    /// # Panics
    /// Panics if the location is outside [-90, 90] / [-180, 180].
    fn sunset<L: LatLng>(&self, location: &L) -> Option<DateTime<Utc>>;

    /// Sunrise for the given zenith. Safe version.
    fn try_sunrise<L: LatLng>(&self, location: &L, zenith: Zenith) -> Result<Option<DateTime<Utc>>, SolarError>;

    /// Sunset for the given zenith. Safe version.
    fn try_sunset<L: LatLng>(&self, location: &L, zenith: Zenith) -> Result<Option<DateTime<Utc>>, SolarError>;

    /// Prediction made at 00:00 UTC of this day.
    ///
    /// # Panics
    /// Panics if the location is outside [-90, 90] / [-180, 180].
    fn day_prediction<L: LatLng>(&self, location: &L, zenith: Zenith) -> Option<DayPrediction>;
}

fn validated<L: LatLng>(location: &L) -> Result<GeoCoordinate, SolarError> {
    GeoCoordinate::new(location.latitude(), location.longitude())
}

impl SolarDateExt for NaiveDate {
    fn sunrise<L: LatLng>(&self, location: &L) -> Option<DateTime<Utc>> {
        self.try_sunrise(location, Zenith::Official).expect("invalid coordinate")
    }

    fn sunset<L: LatLng>(&self, location: &L) -> Option<DateTime<Utc>> {
        self.try_sunset(location, Zenith::Official).expect("invalid coordinate")
    }

    fn try_sunrise<L: LatLng>(&self, location: &L, zenith: Zenith) -> Result<Option<DateTime<Utc>>, SolarError> {
        let coord = validated(location)?;
        Ok(compute_event(SolarEvent::Sunrise, *self, coord.lat, coord.lng, zenith))
    }

    fn try_sunset<L: LatLng>(&self, location: &L, zenith: Zenith) -> Result<Option<DateTime<Utc>>, SolarError> {
        let coord = validated(location)?;
        Ok(compute_event(SolarEvent::Sunset, *self, coord.lat, coord.lng, zenith))
    }

    fn day_prediction<L: LatLng>(&self, location: &L, zenith: Zenith) -> Option<DayPrediction> {
        DayPrediction::for_location(self.and_time(NaiveTime::MIN).and_utc(), location, zenith)
    }
}
