//! Numeric utilities and sexagesimal conversions.
//!
//! Every decomposition into hours/degrees, minutes and seconds follows the same rules:
//! only the most significant component carries the sign, seconds are rounded to two
//! decimals, and a rounded value of exactly 60 seconds carries one minute.
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hour, Radian, DEGRAD, RADEG, UNWIND_TURN};

/// Round half away from zero at `places` decimals.
///
/// Arguments
/// ---------
/// * `value`: the value to round
/// * `places`: number of decimal places, reliable up to about 8
///
/// Return
/// ------
/// * the rounded value, `round(-0.5, 0) == -1.0`
pub fn round(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value.abs() * factor + 0.5).floor().copysign(value) / factor
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Degrees → radians
pub fn radians(deg: Degree) -> Radian {
    deg * RADEG
}

/// Radians → degrees with the truncated factor of the reference tables
pub fn degrees(rad: Radian) -> Degree {
    rad * DEGRAD
}

/// Floored modulo, the result takes the sign of `modulus`.
pub(crate) fn floor_mod(value: f64, modulus: f64) -> f64 {
    value - modulus * (value / modulus).floor()
}

/// `360 · frac(x)`: a mean motion in revolutions with the whole turns dropped, degrees.
pub(crate) fn revolution_fraction(x: f64) -> Degree {
    360.0 * (x - x.floor())
}

/// Reduce an angle in radians to `[0, 2π)` using the truncated turn.
pub fn unwind(rad: Radian) -> Radian {
    floor_mod(rad, UNWIND_TURN)
}

/// Reduce an angle in degrees to `[0, 360)`.
pub fn normalize_degrees(deg: Degree) -> Degree {
    floor_mod(deg, 360.0)
}

/// Reduce a time or right ascension to `[0, 24)` hours.
pub fn normalize_hours(hours: Hour) -> Hour {
    floor_mod(hours, 24.0)
}

// -------------------------------------------------------------------------------------------------
// Sexagesimal components
// -------------------------------------------------------------------------------------------------

/// Magnitude in seconds and the rounded seconds-of-minute of a decimal value.
fn total_and_rounded_seconds(decimal: f64) -> (f64, f64) {
    let total = decimal.abs() * 3600.0;
    (total, round(floor_mod(total, 60.0), 2))
}

/// Whole units (hours or degrees) of a decimal value, signed.
fn whole_component(decimal: f64) -> f64 {
    let (total, seconds) = total_and_rounded_seconds(decimal);
    let carried = if seconds == 60.0 { total + 60.0 } else { total };
    let whole = (carried / 3600.0).floor();
    if decimal < 0.0 {
        -whole
    } else {
        whole
    }
}

/// Minutes of a decimal value, unsigned, with the seconds carry applied.
fn minute_component(decimal: f64) -> f64 {
    let (total, seconds) = total_and_rounded_seconds(decimal);
    let carried = if seconds == 60.0 { total + 60.0 } else { total };
    (carried / 60.0).floor() % 60.0
}

/// Seconds of a decimal value, unsigned and rounded to two places.
fn second_component(decimal: f64) -> f64 {
    let (_, seconds) = total_and_rounded_seconds(decimal);
    if seconds == 60.0 {
        0.0
    } else {
        seconds
    }
}

fn sexagesimal_to_decimal(whole: f64, minutes: f64, seconds: f64) -> f64 {
    let a = seconds.abs() / 60.0;
    let b = (minutes.abs() + a) / 60.0;
    let magnitude = whole.abs() + b;

    if whole.is_sign_negative() || minutes.is_sign_negative() || seconds.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Hours part of decimal hours (signed).
pub fn decimal_hours_hour(decimal_hours: Hour) -> f64 {
    whole_component(decimal_hours)
}

/// Minutes part of decimal hours.
pub fn decimal_hours_minute(decimal_hours: Hour) -> f64 {
    minute_component(decimal_hours)
}

/// Seconds part of decimal hours, rounded to 2 places.
pub fn decimal_hours_second(decimal_hours: Hour) -> f64 {
    second_component(decimal_hours)
}

/// Degrees part of decimal degrees (signed).
pub fn decimal_degrees_degree(decimal_degrees: Degree) -> f64 {
    whole_component(decimal_degrees)
}

/// Minutes part of decimal degrees.
pub fn decimal_degrees_minute(decimal_degrees: Degree) -> f64 {
    minute_component(decimal_degrees)
}

/// Seconds part of decimal degrees, rounded to 2 places.
pub fn decimal_degrees_second(decimal_degrees: Degree) -> f64 {
    second_component(decimal_degrees)
}

// -------------------------------------------------------------------------------------------------
// Sexagesimal records
// -------------------------------------------------------------------------------------------------

/// Hours, minutes and seconds.
///
/// The sign lives on the first non-zero component by convention, usually `hours`.
/// Fields are `f64` so that `-0.0` hours keeps the sign of a value such as `-0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hms {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

/// Civil time of day, same layout as [`Hms`].
pub type CivilTime = Hms;

impl Hms {
    pub fn new(hours: f64, minutes: f64, seconds: f64) -> Self {
        Hms {
            hours,
            minutes,
            seconds,
        }
    }

    /// Decimal hours; negative when any component is negative.
    pub fn to_decimal_hours(&self) -> Hour {
        sexagesimal_to_decimal(self.hours, self.minutes, self.seconds)
    }

    /// Decompose decimal hours.
    ///
    /// Each component comes from its own extractor, so a seconds carry is reflected
    /// in the minutes (and the hours when the minutes reach 60).
    pub fn from_decimal_hours(decimal_hours: Hour) -> Self {
        Hms {
            hours: decimal_hours_hour(decimal_hours),
            minutes: decimal_hours_minute(decimal_hours),
            seconds: decimal_hours_second(decimal_hours),
        }
    }
}

/// Degrees, minutes and seconds of arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Dms {
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Dms {
            degrees,
            minutes,
            seconds,
        }
    }

    pub fn to_decimal_degrees(&self) -> Degree {
        sexagesimal_to_decimal(self.degrees, self.minutes, self.seconds)
    }

    pub fn from_decimal_degrees(decimal_degrees: Degree) -> Self {
        Dms {
            degrees: decimal_degrees_degree(decimal_degrees),
            minutes: decimal_degrees_minute(decimal_degrees),
            seconds: decimal_degrees_second(decimal_degrees),
        }
    }
}

/// Event time truncated to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoursMinutes {
    pub hours: f64,
    pub minutes: f64,
}

impl HoursMinutes {
    /// Hours and minutes of `decimal_hours`, seconds are dropped.
    pub fn from_decimal_hours(decimal_hours: Hour) -> Self {
        HoursMinutes {
            hours: decimal_hours_hour(decimal_hours),
            minutes: decimal_hours_minute(decimal_hours),
        }
    }
}

/// Angle truncated to the arcminute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreesMinutes {
    pub degrees: f64,
    pub minutes: f64,
}

impl DegreesMinutes {
    pub fn from_decimal_degrees(decimal_degrees: Degree) -> Self {
        DegreesMinutes {
            degrees: decimal_degrees_degree(decimal_degrees),
            minutes: decimal_degrees_minute(decimal_degrees),
        }
    }
}

/// Convert a civil time of day to decimal hours.
pub fn civil_time_to_decimal_hours(hours: f64, minutes: f64, seconds: f64) -> Hour {
    Hms::new(hours, minutes, seconds).to_decimal_hours()
}

/// Convert decimal hours, e.g. `8.5`, to a civil time of day, e.g. `08:30:00`.
pub fn decimal_hours_to_civil_time(decimal_hours: Hour) -> CivilTime {
    Hms::from_decimal_hours(decimal_hours)
}

#[cfg(test)]
mod conversion_test {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round(-0.5, 0), -1.0);
        assert_eq!(round(0.5, 0), 1.0);
        assert_eq!(round(1.25, 1), 1.3);
        assert_eq!(round(-1.25, 1), -1.3);
        assert_eq!(round(-2.344, 2), -2.34);
        assert_eq!(round(18.524166666, 8), 18.52416667);
    }

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_hours(-1.5), 22.5);
        assert_eq!(normalize_hours(25.0), 1.0);

        let w = unwind(-0.5);
        assert!((0.0..UNWIND_TURN).contains(&w));
    }

    #[test]
    fn test_civil_time_to_decimal_hours() {
        assert_eq!(round(civil_time_to_decimal_hours(18.0, 31.0, 27.0), 8), 18.52416667);

        let civil = decimal_hours_to_civil_time(18.52416667);
        assert_eq!(civil, Hms::new(18.0, 31.0, 27.0));
    }

    #[test]
    fn test_sign_lives_on_first_component() {
        let dms = Dms::from_decimal_degrees(-11.527297);
        assert_eq!(dms.degrees, -11.0);
        assert_eq!(dms.minutes, 31.0);
        assert_eq!(dms.seconds, 38.27);

        // -0.5 h keeps its sign on a zero hours field
        let hms = Hms::from_decimal_hours(-0.5);
        assert!(hms.hours.is_sign_negative());
        assert_eq!(hms.minutes, 30.0);
        assert_eq!(hms.to_decimal_hours(), -0.5);

        assert_eq!(Dms::new(0.0, -30.0, 0.0).to_decimal_degrees(), -0.5);
    }

    #[test]
    fn test_seconds_carry() {
        // 59.999 s rounds to 60 and carries into the minutes
        let x = 10.0 + 59.0 / 60.0 + 59.999 / 3600.0;
        assert_eq!(Hms::from_decimal_hours(x), Hms::new(11.0, 0.0, 0.0));
        assert_eq!(Dms::from_decimal_degrees(x), Dms::new(11.0, 0.0, 0.0));

        let y = 5.0 + 12.0 / 60.0 + 59.996 / 3600.0;
        assert_eq!(HoursMinutes::from_decimal_hours(y).minutes, 13.0);
    }

    #[test]
    fn test_sexagesimal_round_trip() {
        for (h, m, s) in [(0.0, 0.0, 0.0), (23.0, 59.0, 59.99), (9.0, 34.0, 53.4)] {
            let hms = Hms::new(h, m, s);
            assert_eq!(Hms::from_decimal_hours(hms.to_decimal_hours()), hms);
        }
        for (d, m, s) in [(139.0, 41.0, 10.0), (-16.0, 41.0, 11.0), (4.0, 52.0, 31.0)] {
            let dms = Dms::new(d, m, s);
            assert_eq!(Dms::from_decimal_degrees(dms.to_decimal_degrees()), dms);
        }
    }
}
