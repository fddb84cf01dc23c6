//! Reference frames and the transforms between them.
//!
//! Decimal records (`*Coordinates`) carry hours and degrees as `f64` and are what the
//! body calculators compose. Sexagesimal records (`*Position`) are the published form,
//! obtained with `to_position()`.
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Hour, Radian, HALF_MINUTE};
use crate::conversion::{
    degrees, normalize_degrees, normalize_hours, radians, round, Dms, Hms, HoursMinutes,
};
use crate::earth_orientation::obliquity;
use crate::time::{
    greenwich_sidereal_time_to_local_sidereal_time, gst_to_ut_hours,
    local_sidereal_time_to_greenwich_sidereal_time, universal_time_to_greenwich_sidereal_time,
    CivilDate, LocalCivilTime,
};

/// Right ascension of the north galactic pole, degrees
const GALACTIC_POLE_RA: Degree = 192.25;
/// Declination of the north galactic pole, degrees
const GALACTIC_POLE_DEC: Degree = 27.4;
/// Galactic longitude of the ascending node of the galactic plane on the equator
const GALACTIC_NODE_LONGITUDE: Degree = 33.0;

/// Observer on the Earth surface, decimal degrees, west longitudes negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicLocation {
    pub longitude: Degree,
    pub latitude: Degree,
}

impl GeographicLocation {
    pub fn new(longitude: Degree, latitude: Degree) -> Self {
        GeographicLocation {
            longitude,
            latitude,
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Coordinate records
// -------------------------------------------------------------------------------------------------

/// Right ascension and declination, sexagesimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialPosition {
    pub right_ascension: Hms,
    pub declination: Dms,
}

/// Right ascension (hours) and declination (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinates {
    pub right_ascension: Hour,
    pub declination: Degree,
}

impl EquatorialCoordinates {
    pub fn new(right_ascension: Hour, declination: Degree) -> Self {
        EquatorialCoordinates {
            right_ascension,
            declination,
        }
    }

    pub fn to_position(&self) -> EquatorialPosition {
        EquatorialPosition {
            right_ascension: Hms::from_decimal_hours(self.right_ascension),
            declination: Dms::from_decimal_degrees(self.declination),
        }
    }
}

/// Ecliptic longitude and latitude, sexagesimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticPosition {
    pub longitude: Dms,
    pub latitude: Dms,
}

/// Ecliptic longitude and latitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoordinates {
    pub longitude: Degree,
    pub latitude: Degree,
}

impl EclipticCoordinates {
    pub fn new(longitude: Degree, latitude: Degree) -> Self {
        EclipticCoordinates {
            longitude,
            latitude,
        }
    }

    pub fn to_position(&self) -> EclipticPosition {
        EclipticPosition {
            longitude: Dms::from_decimal_degrees(self.longitude),
            latitude: Dms::from_decimal_degrees(self.latitude),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonPosition {
    pub azimuth: Dms,
    pub altitude: Dms,
}

/// Azimuth (from north through east) and altitude, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonCoordinates {
    pub azimuth: Degree,
    pub altitude: Degree,
}

impl HorizonCoordinates {
    pub fn new(azimuth: Degree, altitude: Degree) -> Self {
        HorizonCoordinates { azimuth, altitude }
    }

    pub fn to_position(&self) -> HorizonPosition {
        HorizonPosition {
            azimuth: Dms::from_decimal_degrees(self.azimuth),
            altitude: Dms::from_decimal_degrees(self.altitude),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourAnglePosition {
    pub hour_angle: Hms,
    pub declination: Dms,
}

/// Hour angle (hours) and declination (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourAngleCoordinates {
    pub hour_angle: Hour,
    pub declination: Degree,
}

impl HourAngleCoordinates {
    pub fn new(hour_angle: Hour, declination: Degree) -> Self {
        HourAngleCoordinates {
            hour_angle,
            declination,
        }
    }

    pub fn to_position(&self) -> HourAnglePosition {
        HourAnglePosition {
            hour_angle: Hms::from_decimal_hours(self.hour_angle),
            declination: Dms::from_decimal_degrees(self.declination),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalacticPosition {
    pub longitude: Dms,
    pub latitude: Dms,
}

/// Galactic longitude and latitude, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalacticCoordinates {
    pub longitude: Degree,
    pub latitude: Degree,
}

impl GalacticCoordinates {
    pub fn new(longitude: Degree, latitude: Degree) -> Self {
        GalacticCoordinates {
            longitude,
            latitude,
        }
    }

    pub fn to_position(&self) -> GalacticPosition {
        GalacticPosition {
            longitude: Dms::from_decimal_degrees(self.longitude),
            latitude: Dms::from_decimal_degrees(self.latitude),
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Ecliptic ↔ equatorial
// -------------------------------------------------------------------------------------------------

/// Unit vector of a spherical direction (longitude, latitude in radians).
fn direction(longitude: Radian, latitude: Radian) -> Vector3<f64> {
    Vector3::new(
        latitude.cos() * longitude.cos(),
        latitude.cos() * longitude.sin(),
        latitude.sin(),
    )
}

/// Longitude in `[0, 360)` and latitude of a unit vector, degrees.
fn spherical_angles(v: &Vector3<f64>) -> (Degree, Degree) {
    let longitude = normalize_degrees(degrees(v.y.atan2(v.x)));
    let latitude = degrees(v.z.clamp(-1.0, 1.0).asin());
    (longitude, latitude)
}

/// Rotation taking ecliptic vectors to equatorial vectors.
///
/// A direct rotation of angle ε about the x axis (the equinox direction). Its inverse
/// takes equatorial vectors back to the ecliptic frame.
///
/// Arguments
/// ---------
/// * `obliquity`: obliquity of the ecliptic in degrees
///
/// # See also
/// * [`ecliptic_to_equatorial`]
/// * [`equatorial_to_ecliptic`]
pub fn ecliptic_rotation(obliquity: Degree) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), radians(obliquity))
}

/// Convert ecliptic coordinates to equatorial coordinates with the true obliquity of
/// the date.
///
/// Arguments
/// ---------
/// * `longitude`: ecliptic longitude in degrees
/// * `latitude`: ecliptic latitude in degrees
/// * `greenwich_date`: the date fixing the obliquity
///
/// Return
/// ------
/// * right ascension in `[0, 24)` hours and declination in degrees
pub fn ecliptic_to_equatorial(
    longitude: Degree,
    latitude: Degree,
    greenwich_date: &CivilDate,
) -> EquatorialCoordinates {
    let rot = ecliptic_rotation(obliquity(greenwich_date));
    let v = rot * direction(radians(longitude), radians(latitude));
    let (ra_deg, dec) = spherical_angles(&v);
    EquatorialCoordinates::new(ra_deg / 15.0, dec)
}

/// Inverse of [`ecliptic_to_equatorial`], longitude in `[0, 360)`.
pub fn equatorial_to_ecliptic(
    right_ascension: Hour,
    declination: Degree,
    greenwich_date: &CivilDate,
) -> EclipticCoordinates {
    let rot = ecliptic_rotation(obliquity(greenwich_date)).inverse();
    let v = rot * direction(radians(right_ascension * 15.0), radians(declination));
    let (longitude, latitude) = spherical_angles(&v);
    EclipticCoordinates::new(longitude, latitude)
}

// -------------------------------------------------------------------------------------------------
// Hour angle
// -------------------------------------------------------------------------------------------------

/// Local sidereal time of a local civil time, re-deriving UT and the Greenwich date.
fn local_sidereal_time(lct: &LocalCivilTime, longitude: Degree) -> Hour {
    let gst =
        universal_time_to_greenwich_sidereal_time(lct.universal_time(), &lct.greenwich_date());
    greenwich_sidereal_time_to_local_sidereal_time(gst, longitude)
}

/// Convert a right ascension to an hour angle, `H = LST − α` in `[0, 24)`.
///
/// Arguments
/// ---------
/// * `right_ascension`: decimal hours
/// * `lct`: the local civil time of the observation
/// * `longitude`: observer longitude, degrees, west negative
pub fn right_ascension_to_hour_angle(
    right_ascension: Hour,
    lct: &LocalCivilTime,
    longitude: Degree,
) -> Hour {
    normalize_hours(local_sidereal_time(lct, longitude) - right_ascension)
}

/// Convert an hour angle to a right ascension, `α = LST − H` in `[0, 24)`.
pub fn hour_angle_to_right_ascension(
    hour_angle: Hour,
    lct: &LocalCivilTime,
    longitude: Degree,
) -> Hour {
    normalize_hours(local_sidereal_time(lct, longitude) - hour_angle)
}

// -------------------------------------------------------------------------------------------------
// Horizon
// -------------------------------------------------------------------------------------------------

/// Convert hour angle and declination to azimuth and altitude.
///
/// Arguments
/// ---------
/// * `hour_angle`: decimal hours
/// * `declination`: degrees
/// * `latitude`: observer latitude in degrees
///
/// Return
/// ------
/// * azimuth in `[0, 360)` measured from north through east, altitude in degrees
pub fn equatorial_to_horizon(
    hour_angle: Hour,
    declination: Degree,
    latitude: Degree,
) -> HorizonCoordinates {
    let h = radians(hour_angle * 15.0);
    let dec = radians(declination);
    let lat = radians(latitude);

    let sin_alt = dec.sin() * lat.sin() + dec.cos() * lat.cos() * h.cos();
    let y = -dec.cos() * lat.cos() * h.sin();
    let x = dec.sin() - lat.sin() * sin_alt;

    HorizonCoordinates::new(
        normalize_degrees(degrees(y.atan2(x))),
        degrees(sin_alt.clamp(-1.0, 1.0).asin()),
    )
}

/// Convert azimuth and altitude to hour angle (`[0, 24)` hours) and declination.
pub fn horizon_to_equatorial(
    azimuth: Degree,
    altitude: Degree,
    latitude: Degree,
) -> HourAngleCoordinates {
    let az = radians(azimuth);
    let alt = radians(altitude);
    let lat = radians(latitude);

    let sin_dec = alt.sin() * lat.sin() + alt.cos() * lat.cos() * az.cos();
    let y = -alt.cos() * lat.cos() * az.sin();
    let x = alt.sin() - lat.sin() * sin_dec;

    HourAngleCoordinates::new(
        normalize_hours(degrees(y.atan2(x)) / 15.0),
        degrees(sin_dec.clamp(-1.0, 1.0).asin()),
    )
}

// -------------------------------------------------------------------------------------------------
// Galactic
// -------------------------------------------------------------------------------------------------

/// Convert equatorial coordinates (B1950 pole) to galactic coordinates.
pub fn equatorial_to_galactic(right_ascension: Hour, declination: Degree) -> GalacticCoordinates {
    let ra = radians(right_ascension * 15.0);
    let dec = radians(declination);
    let pole_dec = radians(GALACTIC_POLE_DEC);
    let pole_ra = radians(GALACTIC_POLE_RA);

    let sin_b = dec.cos() * pole_dec.cos() * (ra - pole_ra).cos() + dec.sin() * pole_dec.sin();
    let y = dec.sin() - sin_b * pole_dec.sin();
    let x = dec.cos() * (ra - pole_ra).sin() * pole_dec.cos();

    GalacticCoordinates::new(
        normalize_degrees(degrees(y.atan2(x)) + GALACTIC_NODE_LONGITUDE),
        degrees(sin_b.clamp(-1.0, 1.0).asin()),
    )
}

pub fn galactic_to_equatorial(longitude: Degree, latitude: Degree) -> EquatorialCoordinates {
    let l = radians(longitude);
    let b = radians(latitude);
    let pole_dec = radians(GALACTIC_POLE_DEC);
    let node = radians(GALACTIC_NODE_LONGITUDE);

    let sin_dec = b.cos() * pole_dec.cos() * (l - node).sin() + b.sin() * pole_dec.sin();
    let y = b.cos() * (l - node).cos();
    let x = b.sin() * pole_dec.cos() - b.cos() * pole_dec.sin() * (l - node).sin();

    EquatorialCoordinates::new(
        normalize_degrees(degrees(y.atan2(x)) + GALACTIC_POLE_RA) / 15.0,
        degrees(sin_dec.clamp(-1.0, 1.0).asin()),
    )
}

// -------------------------------------------------------------------------------------------------
// Angular separation
// -------------------------------------------------------------------------------------------------

/// How the first coordinate of a pair is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleMeasure {
    /// Right ascension in hours
    Hours,
    /// Longitude in degrees
    Degrees,
}

impl AngleMeasure {
    fn to_degrees(self, value: f64) -> Degree {
        match self {
            AngleMeasure::Hours => value * 15.0,
            AngleMeasure::Degrees => value,
        }
    }
}

/// Great-circle angle between two objects.
///
/// Arguments
/// ---------
/// * `first`: (right ascension or longitude, declination or latitude) of the first object
/// * `second`: same for the second object
/// * `measure`: unit of the first member of each pair, the second is always degrees
///
/// Return
/// ------
/// * the separation as degrees, minutes and seconds
pub fn angle_between_objects(
    first: (f64, Degree),
    second: (f64, Degree),
    measure: AngleMeasure,
) -> Dms {
    Dms::from_decimal_degrees(separation(
        measure.to_degrees(first.0),
        first.1,
        measure.to_degrees(second.0),
        second.1,
    ))
}

/// Great-circle separation of two directions, all angles in degrees.
pub(crate) fn separation(
    longitude_1: Degree,
    latitude_1: Degree,
    longitude_2: Degree,
    latitude_2: Degree,
) -> Degree {
    let (l1, b1) = (radians(longitude_1), radians(latitude_1));
    let (l2, b2) = (radians(longitude_2), radians(latitude_2));
    let cos_d = b1.sin() * b2.sin() + b1.cos() * b2.cos() * (l1 - l2).cos();
    degrees(cos_d.clamp(-1.0, 1.0).acos())
}

// -------------------------------------------------------------------------------------------------
// Rising and setting
// -------------------------------------------------------------------------------------------------

/// Outcome of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiseSetStatus {
    Ok,
    /// Always above the horizon
    Circumpolar,
    /// Always below the horizon
    NeverRises,
    /// The GST → UT conversion of an event is ambiguous
    GstToUtConversionWarning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum HorizonCrossing {
    Rise,
    Set,
}

/// Cosine of the hour angle at which an object crosses the shifted horizon.
fn cos_crossing_hour_angle(dec: Radian, vertical_shift: Radian, lat: Radian) -> f64 {
    -(vertical_shift.sin() + lat.sin() * dec.sin()) / (lat.cos() * dec.cos())
}

/// Whether an object at `declination` crosses a horizon lowered by `vertical_shift`.
pub(crate) fn rise_set_status(
    declination: Degree,
    vertical_shift: Degree,
    latitude: Degree,
) -> RiseSetStatus {
    let cos_h = cos_crossing_hour_angle(
        radians(declination),
        radians(vertical_shift),
        radians(latitude),
    );
    if cos_h >= 1.0 {
        RiseSetStatus::NeverRises
    } else if cos_h <= -1.0 {
        RiseSetStatus::Circumpolar
    } else {
        RiseSetStatus::Ok
    }
}

/// Local sidereal time of a horizon crossing, `[0, 24)` hours.
///
/// Without a crossing the hour angle is taken as zero, callers check
/// [`rise_set_status`] first.
pub(crate) fn crossing_local_sidereal_time(
    right_ascension: Hour,
    declination: Degree,
    vertical_shift: Degree,
    latitude: Degree,
    crossing: HorizonCrossing,
) -> Hour {
    let cos_h = cos_crossing_hour_angle(
        radians(declination),
        radians(vertical_shift),
        radians(latitude),
    );
    let h = if cos_h.abs() < 1.0 { cos_h.acos() } else { 0.0 };
    let ra = radians(right_ascension * 15.0);
    let lst = match crossing {
        HorizonCrossing::Rise => ra - h,
        HorizonCrossing::Set => ra + h,
    };
    normalize_hours(degrees(lst) / 15.0)
}

/// Azimuth of a horizon crossing, `[0, 360)` degrees.
pub(crate) fn crossing_azimuth(
    declination: Degree,
    vertical_shift: Degree,
    latitude: Degree,
    crossing: HorizonCrossing,
) -> Degree {
    let a = if rise_set_status(declination, vertical_shift, latitude) == RiseSetStatus::Ok {
        let (dec, v, lat) = (
            radians(declination),
            radians(vertical_shift),
            radians(latitude),
        );
        let cos_a = (dec.sin() + v.sin() * lat.sin()) / (v.cos() * lat.cos());
        degrees(cos_a.clamp(-1.0, 1.0).acos())
    } else {
        0.0
    };
    match crossing {
        HorizonCrossing::Rise => normalize_degrees(a),
        HorizonCrossing::Set => normalize_degrees(360.0 - a),
    }
}

/// Rise and set times (UT) and azimuths of a fixed object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiseSet {
    pub status: RiseSetStatus,
    pub rise_ut: Option<HoursMinutes>,
    pub set_ut: Option<HoursMinutes>,
    /// Degrees, two decimals
    pub rise_azimuth: Option<Degree>,
    pub set_azimuth: Option<Degree>,
}

/// Rising and setting of an object of fixed right ascension and declination.
///
/// Arguments
/// ---------
/// * `right_ascension`: decimal hours
/// * `declination`: degrees
/// * `greenwich_date`: the Greenwich date of the events
/// * `location`: the observer
/// * `vertical_shift`: depression of the horizon in degrees (refraction, semi-diameter)
///
/// Return
/// ------
/// * a [`RiseSet`], times and azimuths are `None` unless the status is
///   [`RiseSetStatus::Ok`]. Times are rounded to the nearest minute.
pub fn rising_and_setting(
    right_ascension: Hour,
    declination: Degree,
    greenwich_date: &CivilDate,
    location: &GeographicLocation,
    vertical_shift: Degree,
) -> RiseSet {
    let status = rise_set_status(declination, vertical_shift, location.latitude);
    if status != RiseSetStatus::Ok {
        return RiseSet {
            status,
            rise_ut: None,
            set_ut: None,
            rise_azimuth: None,
            set_azimuth: None,
        };
    }

    let event_ut = |crossing| {
        let lst = crossing_local_sidereal_time(
            right_ascension,
            declination,
            vertical_shift,
            location.latitude,
            crossing,
        );
        let gst = local_sidereal_time_to_greenwich_sidereal_time(lst, location.longitude);
        HoursMinutes::from_decimal_hours(gst_to_ut_hours(gst, greenwich_date) + HALF_MINUTE)
    };
    let event_azimuth = |crossing| {
        round(
            crossing_azimuth(declination, vertical_shift, location.latitude, crossing),
            2,
        )
    };

    RiseSet {
        status,
        rise_ut: Some(event_ut(HorizonCrossing::Rise)),
        set_ut: Some(event_ut(HorizonCrossing::Set)),
        rise_azimuth: Some(event_azimuth(HorizonCrossing::Rise)),
        set_azimuth: Some(event_azimuth(HorizonCrossing::Set)),
    }
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use crate::time::TimeZone;
    use approx::assert_relative_eq;

    #[test]
    fn test_rise_set_status_grazing_horizon() {
        // |cos H| is exactly 1, the object only touches the shifted horizon
        assert_eq!(rise_set_status(0.0, -90.0, 0.0), RiseSetStatus::NeverRises);
        assert_eq!(rise_set_status(0.0, 90.0, 0.0), RiseSetStatus::Circumpolar);
        assert_eq!(rise_set_status(0.0, 0.0, 0.0), RiseSetStatus::Ok);
    }

    #[test]
    fn test_ecliptic_rotation_axis() {
        let rot = ecliptic_rotation(23.44);
        let x = rot * Vector3::x();
        assert_relative_eq!(x, Vector3::x(), epsilon = 1e-15);

        let y = rot * Vector3::y();
        assert_relative_eq!(y.z, radians(23.44).sin(), epsilon = 1e-15);
    }

    #[test]
    fn test_ecliptic_to_equatorial() {
        let date = CivilDate::new(6.0, 7, 2009);
        let lambda = Dms::new(139.0, 41.0, 10.0).to_decimal_degrees();
        let beta = Dms::new(4.0, 52.0, 31.0).to_decimal_degrees();

        let pos = ecliptic_to_equatorial(lambda, beta, &date).to_position();
        assert_eq!(pos.right_ascension, Hms::new(9.0, 34.0, 53.4));
        assert_eq!(pos.declination, Dms::new(19.0, 32.0, 8.52));
    }

    #[test]
    fn test_equatorial_to_ecliptic() {
        let date = CivilDate::new(6.0, 7, 2009);
        let ra = Hms::new(9.0, 34.0, 53.4).to_decimal_hours();
        let dec = Dms::new(19.0, 32.0, 8.52).to_decimal_degrees();

        let pos = equatorial_to_ecliptic(ra, dec, &date).to_position();
        assert_eq!(pos.longitude, Dms::new(139.0, 41.0, 9.97));
        assert_eq!(pos.latitude, Dms::new(4.0, 52.0, 30.99));
    }

    #[test]
    fn test_right_ascension_hour_angle() {
        let lct = LocalCivilTime::new(
            Hms::new(14.0, 36.0, 51.67),
            TimeZone::new(false, -4),
            CivilDate::new(22.0, 4, 1980),
        );
        let ra = Hms::new(18.0, 32.0, 21.0).to_decimal_hours();

        let ha = right_ascension_to_hour_angle(ra, &lct, -64.0);
        assert_eq!(Hms::from_decimal_hours(ha), Hms::new(9.0, 52.0, 23.66));

        let back = hour_angle_to_right_ascension(ha, &lct, -64.0);
        assert_relative_eq!(back, ra, epsilon = 1e-9);
    }

    #[test]
    fn test_equatorial_to_horizon() {
        let ha = Hms::new(5.0, 51.0, 44.0).to_decimal_hours();
        let dec = Dms::new(23.0, 13.0, 10.0).to_decimal_degrees();

        let hor = equatorial_to_horizon(ha, dec, 52.0);
        let pos = hor.to_position();
        assert_eq!(pos.azimuth, Dms::new(283.0, 16.0, 15.7));
        assert_eq!(pos.altitude, Dms::new(19.0, 20.0, 3.64));

        let eq = horizon_to_equatorial(hor.azimuth, hor.altitude, 52.0).to_position();
        assert_eq!(eq.hour_angle, Hms::new(5.0, 51.0, 44.0));
        assert_eq!(eq.declination, Dms::new(23.0, 13.0, 10.0));
    }

    #[test]
    fn test_galactic() {
        let ra = Hms::new(10.0, 21.0, 0.0).to_decimal_hours();
        let dec = Dms::new(10.0, 3.0, 11.0).to_decimal_degrees();

        let gal = equatorial_to_galactic(ra, dec).to_position();
        assert_eq!(gal.longitude, Dms::new(232.0, 14.0, 52.38));
        assert_eq!(gal.latitude, Dms::new(51.0, 7.0, 20.16));

        let l = Dms::new(232.0, 14.0, 52.38).to_decimal_degrees();
        let b = Dms::new(51.0, 7.0, 20.16).to_decimal_degrees();
        let eq = galactic_to_equatorial(l, b).to_position();
        assert_eq!(eq.right_ascension, Hms::new(10.0, 21.0, 0.0));
        assert_eq!(eq.declination, Dms::new(10.0, 3.0, 11.0));
    }

    #[test]
    fn test_angle_between_objects() {
        let first = (
            Hms::new(5.0, 13.0, 31.7).to_decimal_hours(),
            Dms::new(-8.0, 13.0, 30.0).to_decimal_degrees(),
        );
        let second = (
            Hms::new(6.0, 44.0, 13.4).to_decimal_hours(),
            Dms::new(-16.0, 41.0, 11.0).to_decimal_degrees(),
        );
        assert_eq!(
            angle_between_objects(first, second, AngleMeasure::Hours),
            Dms::new(23.0, 40.0, 25.86)
        );

        let in_degrees = angle_between_objects(
            (first.0 * 15.0, first.1),
            (second.0 * 15.0, second.1),
            AngleMeasure::Degrees,
        );
        assert_eq!(in_degrees, Dms::new(23.0, 40.0, 25.86));
    }

    #[test]
    fn test_rising_and_setting() {
        let rs = rising_and_setting(
            Hms::new(23.0, 39.0, 20.0).to_decimal_hours(),
            Dms::new(21.0, 42.0, 0.0).to_decimal_degrees(),
            &CivilDate::new(24.0, 8, 2010),
            &GeographicLocation::new(64.0, 30.0),
            0.5667,
        );

        assert_eq!(rs.status, RiseSetStatus::Ok);
        assert_eq!(rs.rise_ut, Some(HoursMinutes { hours: 14.0, minutes: 16.0 }));
        assert_eq!(rs.set_ut, Some(HoursMinutes { hours: 4.0, minutes: 10.0 }));
        assert_eq!(rs.rise_azimuth, Some(64.36));
        assert_eq!(rs.set_azimuth, Some(295.64));
    }

    #[test]
    fn test_circumpolar_and_never_rises() {
        let date = CivilDate::new(24.0, 8, 2010);
        let north = GeographicLocation::new(0.0, 70.0);

        let rs = rising_and_setting(1.0, 80.0, &date, &north, 0.5667);
        assert_eq!(rs.status, RiseSetStatus::Circumpolar);
        assert_eq!(rs.rise_ut, None);
        assert_eq!(rs.set_azimuth, None);

        let rs = rising_and_setting(1.0, -80.0, &date, &north, 0.5667);
        assert_eq!(rs.status, RiseSetStatus::NeverRises);
        assert_eq!(rs.set_ut, None);
    }
}
