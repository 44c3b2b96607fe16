//! Sunrise / Sunset Calculation Module.
//!
//! Low-precision approximation of the sun's rise and set times: mean anomaly,
//! true longitude, right ascension, declination, hour angle, then local mean
//! time converted to UTC. Accurate to roughly a minute at mid latitudes.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use solar_types::{is_valid_coordinate, SolarEvent, Zenith};

/// Computes the UTC instant of a sunrise or sunset.
///
/// # Arguments
/// * `event` - Sunrise or sunset
/// * `date` - Calendar day (UTC calendar) to calculate for
/// * `latitude` - Degrees, north positive, within [-90, 90]
/// * `longitude` - Degrees, east positive, within [-180, 180]
/// * `zenith` - Threshold that defines the event (official or a twilight)
///
/// # Returns
/// `None` when the sun does not cross the zenith threshold on that day
/// (polar night for sunrise, polar day for sunset).
///
/// The result can fall on the neighbouring UTC day: a sunrise east of
/// Greenwich may belong to the previous day, a sunset west of it to the next.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use solar_astronomy::sunrise::compute_event;
/// use solar_types::{SolarEvent, Zenith};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// let sunrise = compute_event(SolarEvent::Sunrise, date, 0.0, 0.0, Zenith::Official).unwrap();
/// println!("Sunrise: {}", sunrise);
/// ```
pub fn compute_event(
    event: SolarEvent,
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> Option<DateTime<Utc>> {
    debug_assert!(
        is_valid_coordinate(latitude, longitude),
        "coordinates ({}, {}) must be valid",
        latitude,
        longitude
    );

    let day = f64::from(date.ordinal());

    // Longitude as an hour offset, and the approximate time of the event
    let lng_hour = longitude / 15.0;
    let t = day + ((event.base_hour() - lng_hour) / 24.0);

    // Sun's mean anomaly
    let m = (0.9856 * t) - 3.289;

    // Sun's true longitude
    let l = normalise(
        m + 1.916 * m.to_radians().sin() + 0.020 * (2.0 * m.to_radians()).sin() + 282.634,
        360.0,
    );

    // Right ascension, in the same quadrant as L, in hours
    let mut ra = normalise((0.91764 * l.to_radians().tan()).atan().to_degrees(), 360.0);
    ra += (l / 90.0).floor() * 90.0 - (ra / 90.0).floor() * 90.0;
    ra /= 15.0;

    // Declination
    let sin_dec = 0.39782 * l.to_radians().sin();
    let cos_dec = sin_dec.asin().cos();

    // Local hour angle
    let lat = latitude.to_radians();
    let cos_h = (zenith.degrees().to_radians().cos() - sin_dec * lat.sin()) / (cos_dec * lat.cos());

    // > 1: sun stays below the threshold (no sunrise)
    // < -1: sun stays above it (no sunset)
    // NaN: degenerate geometry at the pole
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }

    let acos_h = cos_h.acos().to_degrees();
    // Sunrise is on the morning branch of the hour angle
    let h_deg = match event {
        SolarEvent::Sunrise => 360.0 - acos_h,
        SolarEvent::Sunset => acos_h,
    };
    let h = h_deg / 15.0;

    // Local mean time, then UTC
    let local_mean_time = h + ra - (0.06571 * t) - 6.622;
    let ut = normalise(local_mean_time - lng_hour, 24.0);

    let hour = ut.floor();
    let minute = ((ut - hour) * 60.0).floor();
    let second = (((ut - hour) * 60.0) - minute) * 60.0;

    let event_date = if lng_hour > 0.0 && ut > 12.0 && event.is_sunrise() {
        date.pred_opt()?
    } else if lng_hour < 0.0 && ut < 12.0 && event.is_sunset() {
        date.succ_opt()?
    } else {
        date
    };

    // Built by addition so that UT == 24 rolls into the next day
    let time_of_day = Duration::hours(hour as i64)
        + Duration::minutes(minute as i64)
        + Duration::seconds(second as i64);

    event_date
        .and_time(NaiveTime::MIN)
        .checked_add_signed(time_of_day)
        .map(|dt| dt.and_utc())
}

/// Brings `value` into `[0, maximum]` by adding or subtracting `maximum` once.
///
/// This is not a modulo: a value more than one period out of range stays out
/// of range.
pub fn normalise(value: f64, maximum: f64) -> f64 {
    let mut value = value;

    if value < 0.0 {
        value += maximum;
    }

    if value > maximum {
        value -= maximum;
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn assert_close(actual: DateTime<Utc>, expected: DateTime<Utc>) {
        let diff = (actual - expected).num_seconds().abs();
        assert!(diff <= 1, "expected {} got {}", expected, actual);
    }

    #[test]
    fn test_normalise() {
        assert_eq!(normalise(-5.0, 360.0), 355.0);
        assert_eq!(normalise(365.0, 360.0), 5.0);
        assert_eq!(normalise(180.0, 360.0), 180.0);
        assert_eq!(normalise(0.0, 24.0), 0.0);
        assert_eq!(normalise(24.0, 24.0), 24.0);
        assert_eq!(normalise(-0.5, 24.0), 23.5);
    }

    #[test]
    fn test_normalise_is_single_step() {
        assert_eq!(normalise(-400.0, 360.0), -40.0);
        assert_eq!(normalise(800.0, 360.0), 440.0);
    }

    #[test]
    fn test_equator_equinox() {
        let d = date(2024, 3, 20);
        let sunrise = compute_event(SolarEvent::Sunrise, d, 0.0, 0.0, Zenith::Official).unwrap();
        let sunset = compute_event(SolarEvent::Sunset, d, 0.0, 0.0, Zenith::Official).unwrap();

        assert_close(sunrise, utc(2024, 3, 20, 6, 4, 5));
        assert_close(sunset, utc(2024, 3, 20, 18, 10, 34));
    }

    #[test]
    fn test_cupertino_sunset_moves_to_next_day() {
        let d = date(2024, 11, 3);
        let sunrise = compute_event(SolarEvent::Sunrise, d, 37.334606, -122.009102, Zenith::Official).unwrap();
        let sunset = compute_event(SolarEvent::Sunset, d, 37.334606, -122.009102, Zenith::Official).unwrap();

        assert_close(sunrise, utc(2024, 11, 3, 14, 35, 41));
        // 17:07 PST is already the next UTC day
        assert_close(sunset, utc(2024, 11, 4, 1, 7, 6));
    }

    #[test]
    fn test_sydney_sunrise_moves_to_previous_day() {
        let d = date(2024, 6, 21);
        let sunrise = compute_event(SolarEvent::Sunrise, d, -33.87, 151.2, Zenith::Official).unwrap();
        let sunset = compute_event(SolarEvent::Sunset, d, -33.87, 151.2, Zenith::Official).unwrap();

        assert_close(sunrise, utc(2024, 6, 20, 21, 0, 5));
        assert_close(sunset, utc(2024, 6, 21, 6, 53, 55));
    }

    #[test]
    fn test_jakarta() {
        let d = date(2024, 3, 15);
        let sunrise = compute_event(SolarEvent::Sunrise, d, -6.2088, 106.8456, Zenith::Official).unwrap();
        let sunset = compute_event(SolarEvent::Sunset, d, -6.2088, 106.8456, Zenith::Official).unwrap();

        assert_close(sunrise, utc(2024, 3, 14, 22, 57, 22));
        assert_close(sunset, utc(2024, 3, 15, 11, 5, 32));
    }

    #[test]
    fn test_twilight_zeniths_are_earlier() {
        let d = date(2024, 6, 21);
        let official = compute_event(SolarEvent::Sunrise, d, 51.5, -0.12, Zenith::Official).unwrap();
        let civil = compute_event(SolarEvent::Sunrise, d, 51.5, -0.12, Zenith::Civil).unwrap();
        let nautical = compute_event(SolarEvent::Sunrise, d, 51.5, -0.12, Zenith::Nautical).unwrap();

        assert_close(official, utc(2024, 6, 21, 3, 43, 11));
        assert_close(civil, utc(2024, 6, 21, 2, 55, 24));
        assert_close(nautical, utc(2024, 6, 21, 1, 40, 46));
        assert!(nautical < civil && civil < official);
    }

    #[test]
    fn test_no_astronomical_dawn_in_london_midsummer() {
        let d = date(2024, 6, 21);
        assert!(compute_event(SolarEvent::Sunrise, d, 51.5, -0.12, Zenith::Astronomical).is_none());
    }

    #[test]
    fn test_polar_night() {
        let d = date(2024, 12, 21);
        assert!(compute_event(SolarEvent::Sunrise, d, 75.0, 0.0, Zenith::Official).is_none());
        assert!(compute_event(SolarEvent::Sunrise, d, 69.65, 18.96, Zenith::Official).is_none());
    }

    #[test]
    fn test_polar_day() {
        let d = date(2024, 6, 21);
        assert!(compute_event(SolarEvent::Sunset, d, 75.0, 10.0, Zenith::Official).is_none());
        assert!(compute_event(SolarEvent::Sunset, d, 69.65, 18.96, Zenith::Official).is_none());
        assert!(compute_event(SolarEvent::Sunset, d, -75.0, 0.0, Zenith::Official).is_none());
    }

    #[test]
    fn test_day_of_year_uses_leap_calendar() {
        let leap = compute_event(SolarEvent::Sunrise, date(2024, 12, 31), 0.0, 0.0, Zenith::Official).unwrap();
        let common = compute_event(SolarEvent::Sunrise, date(2023, 12, 31), 0.0, 0.0, Zenith::Official).unwrap();

        assert_eq!((leap.hour(), leap.minute()), (5, 59));
        assert_eq!((common.hour(), common.minute()), (5, 59));
        assert_ne!(leap.second(), common.second());
    }

    #[test]
    fn test_seconds_are_truncated() {
        let sunrise = compute_event(SolarEvent::Sunrise, date(2024, 3, 20), 0.0, 0.0, Zenith::Official).unwrap();
        assert_eq!(sunrise.nanosecond(), 0);
    }
}
