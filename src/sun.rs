//! Position of the Sun, sunrise and sunset, twilight and the equation of time.
//!
//! Two models are used. The approximate one propagates the 2010.0 elements of the
//! Earth orbit. The precise one evaluates the perturbed true longitude, with terms
//! from Venus, Jupiter and the Moon.
use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::constants::{
    AstronomicalUnit, Degree, Hour, Kilometer, Radian, DAYS_PER_JULIAN_CENTURY, HALF_MINUTE,
    HOURS_PER_JULIAN_CENTURY, J1900, SUNRISE_VERTICAL_SHIFT, SUN_ANGULAR_DIAMETER_AU,
    SUN_MEAN_DISTANCE_KM, TROPICAL_YEAR,
};
use crate::conversion::{
    decimal_hours_minute, decimal_hours_second, degrees, normalize_degrees, radians,
    revolution_fraction, round, unwind, Dms, Hms, HoursMinutes,
};
use crate::earth_orientation::nutation_in_longitude;
use crate::kepler::{eccentric_anomaly, true_anomaly};
use crate::ref_system::{
    crossing_azimuth, crossing_local_sidereal_time, ecliptic_to_equatorial, rise_set_status,
    separation, EquatorialCoordinates, EquatorialPosition, GeographicLocation, HorizonCrossing,
    RiseSetStatus,
};
use crate::time::{
    gst_to_ut_hours, local_sidereal_time_to_greenwich_sidereal_time,
    universal_time_to_local_decimal_hours, CivilDate, LocalCivilTime, TimeZone,
};

/// Reference epoch of the approximate model, 2010 January 0.0
fn epoch_2010() -> CivilDate {
    CivilDate::new(0.0, 1, 2010)
}

/// Below this UT (4 minutes) a GST → UT conversion may pick the wrong sidereal day
const SUN_EVENT_GST_LIMIT: Hour = 4.0 / 60.0;

/// Aberration and the light time to the Sun, removed from the true longitude
/// before a rise/set computation.
const SUN_LONGITUDE_CORRECTION: Degree = 0.005694;

/// Julian centuries since B1900.0 at the instant of a local civil time.
fn centuries_at(lct: &LocalCivilTime) -> f64 {
    (lct.greenwich_date().to_julian_date() - J1900) / DAYS_PER_JULIAN_CENTURY
        + lct.universal_time() / HOURS_PER_JULIAN_CENTURY
}

fn centuries_at_date(greenwich_date: &CivilDate) -> f64 {
    (greenwich_date.to_julian_date() - J1900) / DAYS_PER_JULIAN_CENTURY
}

/// Mean anomaly of the Sun in degrees, `T` in centuries since B1900.0
fn mean_anomaly_degrees(t: f64) -> Degree {
    358.47583 - (0.00015 + 0.0000033 * t) * t * t + revolution_fraction(99.99736042 * t)
}

fn orbit_eccentricity(t: f64) -> f64 {
    0.01675104 - 0.0000418 * t - 0.000000126 * t * t
}

/// Arguments of the planetary and lunar perturbations, radians.
struct Perturbations {
    venus_1: Radian,
    venus_2: Radian,
    jupiter: Radian,
    moon: Radian,
}

impl Perturbations {
    fn at(t: f64) -> Self {
        Perturbations {
            venus_1: radians(153.23 + revolution_fraction(62.55209472 * t)),
            venus_2: radians(216.57 + revolution_fraction(125.1041894 * t)),
            jupiter: radians(312.69 + revolution_fraction(91.56766028 * t)),
            moon: radians(350.74 - 0.00144 * t * t + revolution_fraction(1236.853095 * t)),
        }
    }
}

/// True geometric longitude of the Sun.
///
/// Arguments
/// ---------
/// * `lct`: the local civil time
///
/// Return
/// ------
/// * the ecliptic longitude in degrees, `[0, 360)`
///
/// # See also
/// * [`sun_distance_au`]
pub fn sun_true_longitude(lct: &LocalCivilTime) -> Result<Degree, AstroError> {
    let t = centuries_at(lct);
    let longitude = 279.69668 + 0.0003025 * t * t + revolution_fraction(100.0021359 * t);
    let m = mean_anomaly_degrees(t);
    let nu = true_anomaly(radians(m), orbit_eccentricity(t))?;

    let p = Perturbations::at(t);
    let long_period = radians(231.19 + 20.2 * t);
    let d2 = 0.00134 * p.venus_1.cos()
        + 0.00154 * p.venus_2.cos()
        + 0.002 * p.jupiter.cos()
        + 0.00179 * p.moon.sin()
        + 0.00178 * long_period.sin();

    Ok(degrees(unwind(nu + radians(longitude - m + d2))))
}

/// Distance Earth–Sun in astronomical units, perturbations included.
pub fn sun_distance_au(lct: &LocalCivilTime) -> Result<AstronomicalUnit, AstroError> {
    let t = centuries_at(lct);
    let e = orbit_eccentricity(t);
    let e_anom = eccentric_anomaly(radians(mean_anomaly_degrees(t)), e)?;

    let p = Perturbations::at(t);
    let h1 = radians(353.4 + revolution_fraction(183.1353208 * t));
    let d3 = 0.00000543 * p.venus_1.sin()
        + 0.00001575 * p.venus_2.sin()
        + 0.00001627 * p.jupiter.sin()
        + 0.00003076 * p.moon.cos()
        + 0.00000927 * h1.sin();

    Ok(1.0000002 * (1.0 - e * e_anom.cos()) + d3)
}

/// Angular diameter of the Sun in degrees.
pub(crate) fn sun_angular_diameter(lct: &LocalCivilTime) -> Result<Degree, AstroError> {
    Ok(SUN_ANGULAR_DIAMETER_AU / sun_distance_au(lct)?)
}

/// Mean anomaly of the Sun in radians, `[0, 2π)`.
///
/// The mean motion used here (100.0021359 rev/century) is the one of the mean
/// longitude, it differs slightly from the anomalistic rate of [`sun_true_anomaly`].
pub fn sun_mean_anomaly(lct: &LocalCivilTime) -> Radian {
    let t = centuries_at(lct);
    let m = 358.47583 - (0.00015 + 0.0000033 * t) * t * t + revolution_fraction(100.0021359 * t);
    unwind(radians(m))
}

/// True anomaly of the Sun in degrees, `[0, 360)`.
pub fn sun_true_anomaly(lct: &LocalCivilTime) -> Result<Degree, AstroError> {
    let t = centuries_at(lct);
    let nu = true_anomaly(radians(mean_anomaly_degrees(t)), orbit_eccentricity(t))?;
    Ok(degrees(nu))
}

/// Mean ecliptic longitude of the Sun at a Greenwich date, `[0, 360)`.
pub fn sun_ecliptic_longitude_at_epoch(greenwich_date: &CivilDate) -> Degree {
    let t = centuries_at_date(greenwich_date);
    normalize_degrees(279.6966778 + 36000.76892 * t + 0.0003025 * t * t)
}

/// Longitude of the perigee of the Sun orbit, `[0, 360)`.
pub fn sun_ecliptic_perigee_longitude(greenwich_date: &CivilDate) -> Degree {
    let t = centuries_at_date(greenwich_date);
    normalize_degrees(281.2208444 + 1.719175 * t + 0.000452778 * t * t)
}

pub fn sun_eccentricity(greenwich_date: &CivilDate) -> f64 {
    orbit_eccentricity(centuries_at_date(greenwich_date))
}

// -------------------------------------------------------------------------------------------------
// Position
// -------------------------------------------------------------------------------------------------

/// Position of the Sun from the 2010.0 elements and the equation of centre.
///
/// Arguments
/// ---------
/// * `lct`: the local civil time
///
/// Return
/// ------
/// * right ascension and declination of the Sun
pub fn approximate_position_of_sun(lct: &LocalCivilTime) -> EquatorialPosition {
    let greenwich_date = lct.greenwich_date();
    let epoch = epoch_2010();

    let days = greenwich_date.to_julian_date() + lct.universal_time() / 24.0
        - epoch.to_julian_date();
    let n = 360.0 * days / TROPICAL_YEAR;
    let longitude_at_epoch = sun_ecliptic_longitude_at_epoch(&epoch);

    let mean_anomaly =
        normalize_degrees(n + longitude_at_epoch - sun_ecliptic_perigee_longitude(&epoch));
    let centre =
        360.0 * sun_eccentricity(&epoch) * radians(mean_anomaly).sin() / std::f64::consts::PI;
    let longitude = normalize_degrees(n + centre + longitude_at_epoch);

    ecliptic_to_equatorial(longitude, 0.0, &greenwich_date).to_position()
}

/// Position of the Sun from its perturbed true longitude.
pub fn precise_position_of_sun(lct: &LocalCivilTime) -> Result<EquatorialPosition, AstroError> {
    let longitude = sun_true_longitude(lct)?;
    Ok(ecliptic_to_equatorial(longitude, 0.0, &lct.greenwich_date()).to_position())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunDistanceAndSize {
    /// Kilometers, rounded to the unit
    pub distance_km: Kilometer,
    pub angular_size: Dms,
}

/// Distance to the Sun and its apparent angular diameter.
pub fn sun_distance_and_angular_size(
    lct: &LocalCivilTime,
) -> Result<SunDistanceAndSize, AstroError> {
    let nu = radians(sun_true_anomaly(lct)?);
    let e = sun_eccentricity(&lct.greenwich_date());

    let f = (1.0 + e * nu.cos()) / (1.0 - e * e);
    Ok(SunDistanceAndSize {
        distance_km: round(SUN_MEAN_DISTANCE_KM / f, 0),
        angular_size: Dms::from_decimal_degrees(f * SUN_ANGULAR_DIAMETER_AU),
    })
}

// -------------------------------------------------------------------------------------------------
// Sunrise, sunset and twilight
// -------------------------------------------------------------------------------------------------

/// Local civil time and azimuth of the Sun crossing a horizon, or why it does not.
///
/// The Sun position is evaluated at local noon, then again at the first estimate of
/// the event.
fn sun_horizon_crossing(
    local_date: &CivilDate,
    zone: TimeZone,
    location: &GeographicLocation,
    vertical_shift: Degree,
    crossing: HorizonCrossing,
) -> Result<Result<(Hour, Degree), RiseSetStatus>, AstroError> {
    let noon = LocalCivilTime::new(Hms::new(12.0, 0.0, 0.0), zone, *local_date);
    let greenwich_date = noon.greenwich_date();

    // apparent position of the Sun at a given true longitude
    let apparent = |sun_longitude: Degree| -> EquatorialCoordinates {
        let longitude =
            sun_longitude + nutation_in_longitude(&greenwich_date) - SUN_LONGITUDE_CORRECTION;
        ecliptic_to_equatorial(longitude, 0.0, &greenwich_date)
    };
    let event_ut = |sun: &EquatorialCoordinates, first_pass: bool| -> Result<Hour, RiseSetStatus> {
        let status = rise_set_status(sun.declination, vertical_shift, location.latitude);
        if status != RiseSetStatus::Ok {
            return Err(status);
        }
        let lst = crossing_local_sidereal_time(
            sun.right_ascension,
            sun.declination,
            vertical_shift,
            location.latitude,
            crossing,
        );
        let gst = local_sidereal_time_to_greenwich_sidereal_time(lst, location.longitude);
        let ut = gst_to_ut_hours(gst, &greenwich_date);
        if first_pass && ut < SUN_EVENT_GST_LIMIT {
            return Err(RiseSetStatus::GstToUtConversionWarning);
        }
        Ok(ut)
    };

    let first = apparent(sun_true_longitude(&noon)?);
    let ut = match event_ut(&first, true) {
        Ok(ut) => ut,
        Err(status) => return Ok(Err(status)),
    };

    let at_event = LocalCivilTime::new(Hms::new(ut, 0.0, 0.0), TimeZone::utc(), greenwich_date);
    let second = apparent(sun_true_longitude(&at_event)?);
    let ut = match event_ut(&second, false) {
        Ok(ut) => ut,
        Err(status) => return Ok(Err(status)),
    };

    let local_time = universal_time_to_local_decimal_hours(ut, zone, &greenwich_date);
    let azimuth = crossing_azimuth(second.declination, vertical_shift, location.latitude, crossing);
    Ok(Ok((local_time, azimuth)))
}

/// Local times and azimuths of sunrise and sunset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunriseSunset {
    pub status: RiseSetStatus,
    pub sunrise: Option<HoursMinutes>,
    pub sunset: Option<HoursMinutes>,
    /// Degrees, two decimals
    pub sunrise_azimuth: Option<Degree>,
    pub sunset_azimuth: Option<Degree>,
}

/// Sunrise and sunset for an observer.
///
/// The upper limb touches a horizon lowered by 50′ (34′ of refraction and 16′ of
/// semi-diameter).
///
/// Arguments
/// ---------
/// * `local_date`: the local calendar date
/// * `zone`: the local time zone
/// * `location`: the observer
///
/// Return
/// ------
/// * a [`SunriseSunset`]; with a status other than `Ok` the times and azimuths of
///   the failing events are `None`
pub fn sunrise_and_sunset(
    local_date: &CivilDate,
    zone: TimeZone,
    location: &GeographicLocation,
) -> Result<SunriseSunset, AstroError> {
    let rise = sun_horizon_crossing(
        local_date,
        zone,
        location,
        SUNRISE_VERTICAL_SHIFT,
        HorizonCrossing::Rise,
    )?;
    let set = sun_horizon_crossing(
        local_date,
        zone,
        location,
        SUNRISE_VERTICAL_SHIFT,
        HorizonCrossing::Set,
    )?;

    let status = match (&rise, &set) {
        (Err(status), _) | (_, Err(status)) => *status,
        _ => RiseSetStatus::Ok,
    };
    let time = |event: &Result<(Hour, Degree), RiseSetStatus>| {
        event
            .ok()
            .map(|(t, _)| HoursMinutes::from_decimal_hours(t + HALF_MINUTE))
    };
    let azimuth =
        |event: &Result<(Hour, Degree), RiseSetStatus>| event.ok().map(|(_, a)| round(a, 2));

    Ok(SunriseSunset {
        status,
        sunrise: time(&rise),
        sunset: time(&set),
        sunrise_azimuth: azimuth(&rise),
        sunset_azimuth: azimuth(&set),
    })
}

/// Depression of the Sun below the horizon that ends a twilight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwilightType {
    /// 6°
    Civil,
    /// 12°
    Nautical,
    /// 18°
    Astronomical,
}

impl TwilightType {
    pub fn depression(&self) -> Degree {
        match self {
            TwilightType::Civil => 6.0,
            TwilightType::Nautical => 12.0,
            TwilightType::Astronomical => 18.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwilightStatus {
    Ok,
    /// The Sun never goes down to the twilight depression
    LastsAllNight,
    /// The Sun stays below the twilight depression all day
    SunTooFarBelowHorizon,
    GstToUtConversionWarning,
}

impl From<RiseSetStatus> for TwilightStatus {
    fn from(status: RiseSetStatus) -> Self {
        match status {
            RiseSetStatus::Ok => TwilightStatus::Ok,
            RiseSetStatus::Circumpolar => TwilightStatus::LastsAllNight,
            RiseSetStatus::NeverRises => TwilightStatus::SunTooFarBelowHorizon,
            RiseSetStatus::GstToUtConversionWarning => TwilightStatus::GstToUtConversionWarning,
        }
    }
}

/// Local times of the start of morning twilight and the end of evening twilight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Twilight {
    pub status: TwilightStatus,
    pub morning_start: Option<HoursMinutes>,
    pub evening_end: Option<HoursMinutes>,
}

/// Beginning of morning twilight and end of evening twilight.
pub fn morning_and_evening_twilight(
    local_date: &CivilDate,
    zone: TimeZone,
    location: &GeographicLocation,
    twilight_type: TwilightType,
) -> Result<Twilight, AstroError> {
    let depression = twilight_type.depression();
    let morning =
        sun_horizon_crossing(local_date, zone, location, depression, HorizonCrossing::Rise)?;
    let evening =
        sun_horizon_crossing(local_date, zone, location, depression, HorizonCrossing::Set)?;

    let status = match (&morning, &evening) {
        (Err(status), _) | (_, Err(status)) => TwilightStatus::from(*status),
        _ => TwilightStatus::Ok,
    };
    let time = |event: Result<(Hour, Degree), RiseSetStatus>| {
        event
            .ok()
            .map(|(t, _)| HoursMinutes::from_decimal_hours(t + HALF_MINUTE))
    };

    Ok(Twilight {
        status,
        morning_start: time(morning),
        evening_end: time(evening),
    })
}

// -------------------------------------------------------------------------------------------------
// Equation of time and elongation
// -------------------------------------------------------------------------------------------------

/// Apparent minus mean solar time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquationOfTime {
    /// Signed, `-0.0` when the value is negative and under a minute
    pub minutes: f64,
    /// Unsigned, 2 places
    pub seconds: f64,
}

/// Equation of time at noon UT on a Greenwich date.
pub fn equation_of_time(greenwich_date: &CivilDate) -> Result<EquationOfTime, AstroError> {
    let noon = LocalCivilTime::new(Hms::new(12.0, 0.0, 0.0), TimeZone::utc(), *greenwich_date);
    let sun = ecliptic_to_equatorial(sun_true_longitude(&noon)?, 0.0, greenwich_date);
    let e = gst_to_ut_hours(sun.right_ascension, greenwich_date) - 12.0;

    let minutes = decimal_hours_minute(e);
    Ok(EquationOfTime {
        minutes: if e < 0.0 { -minutes } else { minutes },
        seconds: decimal_hours_second(e),
    })
}

/// Angle between the Sun and an object, degrees rounded to 2 places.
///
/// Arguments
/// ---------
/// * `right_ascension`: of the object, decimal hours
/// * `declination`: of the object, degrees
/// * `greenwich_date`: the date, its fraction gives the UT of the Sun position
pub fn solar_elongation(
    right_ascension: Hour,
    declination: Degree,
    greenwich_date: &CivilDate,
) -> Result<Degree, AstroError> {
    let lct = LocalCivilTime::utc_midnight(*greenwich_date);
    let sun = ecliptic_to_equatorial(sun_true_longitude(&lct)?, 0.0, greenwich_date);
    Ok(round(
        separation(
            sun.right_ascension * 15.0,
            sun.declination,
            right_ascension * 15.0,
            declination,
        ),
        2,
    ))
}

#[cfg(test)]
mod sun_test {
    use super::*;

    fn midnight(day: f64, month: u32, year: i32) -> LocalCivilTime {
        LocalCivilTime::utc_midnight(CivilDate::new(day, month, year))
    }

    #[test]
    fn test_approximate_position() {
        let pos = approximate_position_of_sun(&midnight(27.0, 7, 2003));
        assert_eq!(pos.right_ascension, Hms::new(8.0, 23.0, 33.73));
        assert_eq!(pos.declination, Dms::new(19.0, 21.0, 14.33));
    }

    #[test]
    fn test_precise_position() {
        let pos = precise_position_of_sun(&midnight(27.0, 7, 1988)).unwrap();
        assert_eq!(pos.right_ascension, Hms::new(8.0, 26.0, 3.83));
        assert_eq!(pos.declination, Dms::new(19.0, 12.0, 49.72));
    }

    #[test]
    fn test_distance_and_size() {
        let ds = sun_distance_and_angular_size(&midnight(27.0, 7, 1988)).unwrap();
        assert_eq!(ds.distance_km, 151_920_130.0);
        assert_eq!(ds.angular_size, Dms::new(0.0, 31.0, 29.93));
    }

    #[test]
    fn test_sun_helpers_ranges() {
        let lct = midnight(27.0, 7, 1988);
        let lon = sun_true_longitude(&lct).unwrap();
        assert!((0.0..360.0).contains(&lon));
        let r = sun_distance_au(&lct).unwrap();
        assert!(r > 0.98 && r < 1.02);
        assert!((0.0..crate::constants::UNWIND_TURN).contains(&sun_mean_anomaly(&lct)));

        let date = CivilDate::new(0.0, 1, 2010);
        assert!((sun_eccentricity(&date) - 0.016_7).abs() < 1e-4);
        assert!((0.0..360.0).contains(&sun_ecliptic_longitude_at_epoch(&date)));
        assert!((0.0..360.0).contains(&sun_ecliptic_perigee_longitude(&date)));
    }

    #[test]
    fn test_sunrise_and_sunset() {
        let rs = sunrise_and_sunset(
            &CivilDate::new(10.0, 3, 1986),
            TimeZone::new(false, -5),
            &GeographicLocation::new(-71.05, 42.37),
        )
        .unwrap();

        assert_eq!(rs.status, RiseSetStatus::Ok);
        assert_eq!(rs.sunrise, Some(HoursMinutes { hours: 6.0, minutes: 5.0 }));
        assert_eq!(rs.sunset, Some(HoursMinutes { hours: 17.0, minutes: 45.0 }));
        assert_eq!(rs.sunrise_azimuth, Some(94.83));
        assert_eq!(rs.sunset_azimuth, Some(265.43));
    }

    #[test]
    fn test_polar_night() {
        let rs = sunrise_and_sunset(
            &CivilDate::new(21.0, 12, 2020),
            TimeZone::utc(),
            &GeographicLocation::new(0.0, 80.0),
        )
        .unwrap();
        assert_eq!(rs.status, RiseSetStatus::NeverRises);
        assert_eq!(rs.sunrise, None);
        assert_eq!(rs.sunset_azimuth, None);
    }

    #[test]
    fn test_twilight() {
        let tw = morning_and_evening_twilight(
            &CivilDate::new(7.0, 9, 1979),
            TimeZone::utc(),
            &GeographicLocation::new(0.0, 52.0),
            TwilightType::Astronomical,
        )
        .unwrap();

        assert_eq!(tw.status, TwilightStatus::Ok);
        assert_eq!(tw.morning_start, Some(HoursMinutes { hours: 3.0, minutes: 17.0 }));
        assert_eq!(tw.evening_end, Some(HoursMinutes { hours: 20.0, minutes: 37.0 }));
    }

    #[test]
    fn test_twilight_lasts_all_night() {
        // midsummer at 60°N, the Sun never goes 18° below the horizon
        let tw = morning_and_evening_twilight(
            &CivilDate::new(21.0, 6, 2020),
            TimeZone::utc(),
            &GeographicLocation::new(0.0, 60.0),
            TwilightType::Astronomical,
        )
        .unwrap();
        assert_eq!(tw.status, TwilightStatus::LastsAllNight);
        assert_eq!(tw.morning_start, None);
    }

    #[test]
    fn test_equation_of_time() {
        let eot = equation_of_time(&CivilDate::new(27.0, 7, 2010)).unwrap();
        assert_eq!(eot.minutes, 6.0);
        assert_eq!(eot.seconds, 31.52);
    }

    #[test]
    fn test_equation_of_time_negative() {
        // early November, the Sun runs ahead of mean time
        let eot = equation_of_time(&CivilDate::new(3.0, 11, 2010)).unwrap();
        assert_eq!(eot.minutes, -16.0);
        assert_eq!(eot.seconds, 22.9);
    }

    #[test]
    fn test_solar_elongation() {
        let elongation = solar_elongation(
            Hms::new(10.0, 6.0, 45.0).to_decimal_hours(),
            Dms::new(11.0, 57.0, 27.0).to_decimal_degrees(),
            &CivilDate::new(27.8333333, 7, 2010),
        )
        .unwrap();
        assert_eq!(elongation, 24.78);
    }
}
