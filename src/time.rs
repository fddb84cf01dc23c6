//! Calendar arithmetic and the civil ↔ sidereal time chain.
//!
//! The chain is LCT → UT → GST → LST. Each stage recomputes the Julian date it
//! needs from civil inputs rather than reusing an intermediate value: intermediate
//! normalizations happen at the same boundaries as the published reference vectors.
use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::constants::{
    Hour, JulianDate, DAYS_PER_JULIAN_CENTURY, GST_AMBIGUITY_LIMIT, J2000, JD_OFFSET,
    SIDEREAL_RATE, SOLAR_RATE,
};
use crate::conversion::{is_leap_year, normalize_hours, CivilTime, Hms};

// -------------------------------------------------------------------------------------------------
// Civil dates and Julian dates
// -------------------------------------------------------------------------------------------------

/// Calendar date, `day` may carry a fraction of day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilDate {
    pub day: f64,
    pub month: u32,
    pub year: i32,
}

impl CivilDate {
    pub fn new(day: f64, month: u32, year: i32) -> Self {
        CivilDate { day, month, year }
    }

    pub fn to_julian_date(&self) -> JulianDate {
        civil_date_to_julian_date(self.day, self.month, self.year)
    }

    pub fn from_julian_date(jd: JulianDate) -> Self {
        julian_date_to_civil_date(jd)
    }

    /// UTC epoch at this date (fraction of day included).
    pub fn to_epoch(&self) -> Epoch {
        Epoch::from_jde_utc(self.to_julian_date())
    }

    /// Civil date (UTC) of a hifitime epoch.
    pub fn from_epoch(epoch: &Epoch) -> Self {
        Self::from_julian_date(epoch.to_jde_utc_days())
    }

    /// Same date with the day fraction dropped.
    pub fn at_midnight(&self) -> Self {
        CivilDate::new(self.day.floor(), self.month, self.year)
    }
}

/// Convert a civil date to a Julian date.
///
/// The Gregorian correction applies on or after 1582-10-15, dates before use the
/// Julian calendar.
///
/// Arguments
/// ---------
/// * `day`: day of month, fractional part allowed
/// * `month`: month, 1–12
/// * `year`: astronomical year, 0 is 1 BC
///
/// Return
/// ------
/// * the Julian date
pub fn civil_date_to_julian_date(day: f64, month: u32, year: i32) -> JulianDate {
    let (y, m) = if month < 3 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let gregorian = year > 1582
        || (year == 1582 && month > 10)
        || (year == 1582 && month == 10 && day >= 15.0);

    let b = if gregorian {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    // Astronomical year numbering (year 0 = 1 BC) for the whole range, which keeps
    // negative years consistent with the inverse conversion.
    let c = (365.25 * y).floor();
    let d = (30.6001 * (m + 1.0)).floor();

    b + c + d + day + JD_OFFSET
}

/// Day, month and year of a Julian date, in that order.
fn split_julian_date(jd: JulianDate) -> (f64, u32, i32) {
    let i = (jd + 0.5).floor();
    let f = jd + 0.5 - i;
    let a = ((i - 1_867_216.25) / 36_524.25).floor();
    let b = if i > 2_299_160.0 {
        i + 1.0 + a - (a / 4.0).floor()
    } else {
        i
    };
    let c = b + 1524.0;
    let d = ((c - 122.1) / 365.25).floor();
    let e = (365.25 * d).floor();
    let g = ((c - e) / 30.6001).floor();

    let day = c - e + f - (30.6001 * g).floor();
    let month = if g < 13.5 { g - 1.0 } else { g - 13.0 };
    let year = if month > 2.5 { d - 4716.0 } else { d - 4715.0 };

    (day, month as u32, year as i32)
}

/// Day of month of a Julian date, the time of day is kept as a fraction.
pub fn julian_date_to_day(jd: JulianDate) -> f64 {
    split_julian_date(jd).0
}

pub fn julian_date_to_month(jd: JulianDate) -> u32 {
    split_julian_date(jd).1
}

pub fn julian_date_to_year(jd: JulianDate) -> i32 {
    split_julian_date(jd).2
}

/// Inverse of [`civil_date_to_julian_date`].
pub fn julian_date_to_civil_date(jd: JulianDate) -> CivilDate {
    let (day, month, year) = split_julian_date(jd);
    CivilDate::new(day, month, year)
}

/// 1-based day of the year.
pub fn civil_date_to_day_number(month: u32, day: u32, year: i32) -> u32 {
    let leap = is_leap_year(year);
    let offset = if month <= 2 {
        let m = month - 1;
        (if leap { m * 62 } else { m * 63 }) / 2
    } else {
        let m = ((month as f64 + 1.0) * 30.6).floor() as u32;
        if leap {
            m - 62
        } else {
            m - 63
        }
    };
    offset + day
}

/// Month and day of Gregorian Easter Sunday.
pub fn date_of_easter(year: i32) -> (u32, u32) {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * (e + i) - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = (h + l - 7 * m + 114).div_euclid(31);
    let p = (h + l - 7 * m + 114).rem_euclid(31);

    (n as u32, (p + 1) as u32)
}

// -------------------------------------------------------------------------------------------------
// Local civil time and universal time
// -------------------------------------------------------------------------------------------------

/// Time zone of a local civil time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZone {
    pub daylight_saving: bool,
    /// Offset from Greenwich in hours, east positive
    pub zone_correction: i32,
}

impl TimeZone {
    pub fn new(daylight_saving: bool, zone_correction: i32) -> Self {
        TimeZone {
            daylight_saving,
            zone_correction,
        }
    }

    /// Greenwich, no daylight saving.
    pub fn utc() -> Self {
        TimeZone::new(false, 0)
    }

    pub fn daylight_saving_hours(&self) -> f64 {
        if self.daylight_saving {
            1.0
        } else {
            0.0
        }
    }
}

/// A civil time in a zone, on a local date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalCivilTime {
    pub time: CivilTime,
    pub zone: TimeZone,
    pub date: CivilDate,
}

/// A universal time together with its Greenwich date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniversalDateTime {
    pub time: Hms,
    pub date: CivilDate,
}

impl LocalCivilTime {
    pub fn new(time: CivilTime, zone: TimeZone, date: CivilDate) -> Self {
        LocalCivilTime { time, zone, date }
    }

    /// Midnight on `date` in Greenwich.
    pub fn utc_midnight(date: CivilDate) -> Self {
        LocalCivilTime::new(Hms::new(0.0, 0.0, 0.0), TimeZone::utc(), date)
    }

    /// Julian date of the instant, the UT offset is carried in the day.
    pub fn julian_date(&self) -> JulianDate {
        let lct = self.time.to_decimal_hours();
        let ut_interim =
            lct - self.zone.daylight_saving_hours() - self.zone.zone_correction as f64;
        let greenwich_day = self.date.day + ut_interim / 24.0;
        civil_date_to_julian_date(greenwich_day, self.date.month, self.date.year)
    }

    /// Universal time in decimal hours.
    pub fn universal_time(&self) -> Hour {
        let day = julian_date_to_day(self.julian_date());
        24.0 * (day - day.floor())
    }

    /// Greenwich calendar day, without fraction.
    pub fn greenwich_day(&self) -> f64 {
        julian_date_to_day(self.julian_date()).floor()
    }

    pub fn greenwich_month(&self) -> u32 {
        julian_date_to_month(self.julian_date())
    }

    pub fn greenwich_year(&self) -> i32 {
        julian_date_to_year(self.julian_date())
    }

    pub fn greenwich_date(&self) -> CivilDate {
        CivilDate::new(
            self.greenwich_day(),
            self.greenwich_month(),
            self.greenwich_year(),
        )
    }
}

/// Convert a local civil time to universal time and Greenwich date.
pub fn local_civil_time_to_universal_time(lct: &LocalCivilTime) -> UniversalDateTime {
    UniversalDateTime {
        time: Hms::from_decimal_hours(lct.universal_time()),
        date: lct.greenwich_date(),
    }
}

/// Convert a universal time on a Greenwich date to the local civil time and date.
///
/// Arguments
/// ---------
/// * `ut`: universal time in decimal hours
/// * `zone`: the local time zone
/// * `greenwich_date`: the Greenwich date of `ut`
///
/// Return
/// ------
/// * the local civil time, its `date` has no day fraction
pub fn universal_time_to_local_civil_time(
    ut: Hour,
    zone: TimeZone,
    greenwich_date: &CivilDate,
) -> LocalCivilTime {
    let local_time = ut + zone.zone_correction as f64 + zone.daylight_saving_hours();
    let jd = greenwich_date.to_julian_date() + local_time / 24.0;
    let local_day = julian_date_to_day(jd);
    let integer_day = local_day.floor();

    LocalCivilTime::new(
        Hms::from_decimal_hours(24.0 * (local_day - integer_day)),
        zone,
        CivilDate::new(integer_day, julian_date_to_month(jd), julian_date_to_year(jd)),
    )
}

/// Local civil time in decimal hours, see [`universal_time_to_local_civil_time`].
pub(crate) fn universal_time_to_local_decimal_hours(
    ut: Hour,
    zone: TimeZone,
    greenwich_date: &CivilDate,
) -> Hour {
    let local_time = ut + zone.zone_correction as f64 + zone.daylight_saving_hours();
    let local_day = julian_date_to_day(greenwich_date.to_julian_date() + local_time / 24.0);
    24.0 * (local_day - local_day.floor())
}

// -------------------------------------------------------------------------------------------------
// Sidereal time
// -------------------------------------------------------------------------------------------------

/// Whether a GST → UT conversion is unique on the given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeConversionStatus {
    Ok,
    /// The sidereal day is shorter than the solar day: shortly after 0h UT a
    /// GST occurs twice, the earlier UT is returned.
    Ambiguous,
}

/// Greenwich sidereal time at 0h UT, in `[0, 24)` hours.
fn sidereal_time_at_zero_ut(greenwich_date: &CivilDate) -> Hour {
    let t = (greenwich_date.to_julian_date() - J2000) / DAYS_PER_JULIAN_CENTURY;
    let t0 = 6.697374558 + 2400.051336 * t + 0.000025862 * t * t;
    normalize_hours(t0)
}

/// Convert universal time to Greenwich sidereal time.
///
/// Arguments
/// ---------
/// * `ut`: universal time in decimal hours
/// * `greenwich_date`: the Greenwich date
///
/// Return
/// ------
/// * GST in decimal hours, in `[0, 24)`
pub fn universal_time_to_greenwich_sidereal_time(ut: Hour, greenwich_date: &CivilDate) -> Hour {
    normalize_hours(sidereal_time_at_zero_ut(greenwich_date) + ut * SIDEREAL_RATE)
}

/// Convert Greenwich sidereal time to universal time.
///
/// Return
/// ------
/// * UT in decimal hours and [`TimeConversionStatus::Ambiguous`] when the result lies
///   in the first minutes of the day
pub fn greenwich_sidereal_time_to_universal_time(
    gst: Hour,
    greenwich_date: &CivilDate,
) -> (Hour, TimeConversionStatus) {
    let ut = gst_to_ut_hours(gst, greenwich_date);
    let status = if ut < GST_AMBIGUITY_LIMIT {
        TimeConversionStatus::Ambiguous
    } else {
        TimeConversionStatus::Ok
    };
    (ut, status)
}

pub(crate) fn gst_to_ut_hours(gst: Hour, greenwich_date: &CivilDate) -> Hour {
    normalize_hours(gst - sidereal_time_at_zero_ut(greenwich_date)) * SOLAR_RATE
}

/// Add the longitude (degrees, west negative) to a GST.
pub fn greenwich_sidereal_time_to_local_sidereal_time(gst: Hour, longitude: f64) -> Hour {
    normalize_hours(gst + longitude / 15.0)
}

pub fn local_sidereal_time_to_greenwich_sidereal_time(lst: Hour, longitude: f64) -> Hour {
    normalize_hours(lst - longitude / 15.0)
}

#[cfg(test)]
mod time_test {
    use super::*;
    use crate::conversion::round;
    use approx::assert_relative_eq;

    #[test]
    fn test_julian_date() {
        assert_eq!(civil_date_to_julian_date(1.0, 1, 2000), 2_451_544.5);
        assert_eq!(civil_date_to_julian_date(19.75, 6, 2009), 2_455_002.25);

        let date = julian_date_to_civil_date(2_455_002.25);
        assert_eq!(date.day, 19.75);
        assert_eq!(date.month, 6);
        assert_eq!(date.year, 2009);
    }

    #[test]
    fn test_gregorian_boundary() {
        let before = civil_date_to_julian_date(4.0, 10, 1582);
        let after = civil_date_to_julian_date(15.0, 10, 1582);
        assert_eq!(after - before, 1.0);

        assert_eq!(
            julian_date_to_civil_date(before),
            CivilDate::new(4.0, 10, 1582)
        );
        assert_eq!(
            julian_date_to_civil_date(after),
            CivilDate::new(15.0, 10, 1582)
        );
    }

    #[test]
    fn test_negative_year_round_trip() {
        let jd = civil_date_to_julian_date(12.5, 3, -100);
        let date = julian_date_to_civil_date(jd);
        assert_eq!(date.month, 3);
        assert_eq!(date.year, -100);
        assert_relative_eq!(date.day, 12.5, epsilon = 1e-9);
    }

    #[test]
    fn test_hifitime_bridge() {
        let date = CivilDate::new(1.0, 1, 2021);
        assert_relative_eq!(
            date.to_epoch().to_jde_utc_days(),
            2_459_215.5,
            epsilon = 1e-9
        );

        let back = CivilDate::from_epoch(&Epoch::from_gregorian_utc_at_midnight(2021, 1, 1));
        assert_eq!(back.month, 1);
        assert_eq!(back.year, 2021);
        assert_relative_eq!(back.day, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_day_number() {
        assert_eq!(civil_date_to_day_number(1, 1, 2000), 1);
        assert_eq!(civil_date_to_day_number(3, 1, 2000), 61);
        assert_eq!(civil_date_to_day_number(6, 1, 2003), 152);
        assert_eq!(civil_date_to_day_number(11, 27, 2009), 331);
    }

    #[test]
    fn test_easter() {
        assert_eq!(date_of_easter(2003), (4, 20));
        assert_eq!(date_of_easter(2019), (4, 21));
        assert_eq!(date_of_easter(2020), (4, 12));
    }

    #[test]
    fn test_local_civil_time_to_universal_time() {
        let lct = LocalCivilTime::new(
            Hms::new(3.0, 37.0, 0.0),
            TimeZone::new(true, 4),
            CivilDate::new(1.0, 7, 2013),
        );
        let ut = local_civil_time_to_universal_time(&lct);
        assert_eq!(ut.time.hours, 22.0);
        assert_eq!(ut.time.minutes, 37.0);
        assert_eq!(ut.time.seconds, 0.0);
        assert_eq!(ut.date, CivilDate::new(30.0, 6, 2013));

        let back = universal_time_to_local_civil_time(
            ut.time.to_decimal_hours(),
            TimeZone::new(true, 4),
            &ut.date,
        );
        assert_eq!(back.time, Hms::new(3.0, 37.0, 0.0));
        assert_eq!(back.date, CivilDate::new(1.0, 7, 2013));
    }

    #[test]
    fn test_sidereal_time() {
        let date = CivilDate::new(22.0, 4, 1980);
        let ut = Hms::new(14.0, 36.0, 51.67).to_decimal_hours();
        let gst = universal_time_to_greenwich_sidereal_time(ut, &date);
        assert_eq!(Hms::from_decimal_hours(gst), Hms::new(4.0, 40.0, 5.23));

        let (ut_back, status) = greenwich_sidereal_time_to_universal_time(
            Hms::new(4.0, 40.0, 5.23).to_decimal_hours(),
            &date,
        );
        assert_eq!(status, TimeConversionStatus::Ok);
        assert_eq!(Hms::from_decimal_hours(ut_back), Hms::new(14.0, 36.0, 51.67));
    }

    #[test]
    fn test_ambiguous_gst() {
        let date = CivilDate::new(22.0, 4, 1980);
        let gst = universal_time_to_greenwich_sidereal_time(0.01, &date);
        let (ut, status) = greenwich_sidereal_time_to_universal_time(gst, &date);
        assert_eq!(status, TimeConversionStatus::Ambiguous);
        assert_eq!(round(ut, 4), 0.01);
    }

    #[test]
    fn test_local_sidereal_time() {
        let gst = Hms::new(4.0, 40.0, 5.23).to_decimal_hours();
        let lst = greenwich_sidereal_time_to_local_sidereal_time(gst, -64.0);
        assert_eq!(Hms::from_decimal_hours(lst), Hms::new(0.0, 24.0, 5.23));

        let back = local_sidereal_time_to_greenwich_sidereal_time(lst, -64.0);
        assert_eq!(Hms::from_decimal_hours(back), Hms::new(4.0, 40.0, 5.23));
    }
}
