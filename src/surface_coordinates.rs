//! Coordinates on the surfaces of the Sun and the Moon.
use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::constants::{Degree, J1900, J2000, DAYS_PER_JULIAN_CENTURY};
use crate::conversion::{degrees, normalize_degrees, radians, round, Dms};
use crate::earth_orientation::obliquity;
use crate::moon::moon_longitude_latitude_parallax;
use crate::sun::{sun_angular_diameter, sun_distance_au, sun_true_longitude};
use crate::time::{CivilDate, LocalCivilTime};

// -------------------------------------------------------------------------------------------------
// Sun
// -------------------------------------------------------------------------------------------------

/// Julian date of the Carrington longitude origin
const CARRINGTON_EPOCH: f64 = 2_398_220.0;
/// Sidereal rotation period used for the Carrington longitudes, days
const CARRINGTON_SIDEREAL_PERIOD: f64 = 25.38;
/// Start of rotation 1690
const CARRINGTON_ROTATION_1690: f64 = 2_444_235.34;
/// Synodic rotation period, days
const CARRINGTON_SYNODIC_PERIOD: f64 = 27.2753;

fn solar_equator_inclination() -> Degree {
    Dms::new(7.0, 15.0, 0.0).to_decimal_degrees()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeliographicCoordinates {
    /// Carrington longitude, degrees, 2 places
    pub longitude: Degree,
    /// Degrees, 2 places
    pub latitude: Degree,
}

/// Heliographic coordinates of a feature seen on the solar disk.
///
/// Arguments
/// ---------
/// * `position_angle`: position angle of the feature from the centre of the disk, degrees
/// * `displacement`: distance of the feature from the centre of the disk, arcminutes
/// * `greenwich_date`: the date, at 0h UT
///
/// Return
/// ------
/// * the Carrington longitude and the heliographic latitude
pub fn heliographic_coordinates(
    position_angle: Degree,
    displacement: f64,
    greenwich_date: &CivilDate,
) -> Result<HeliographicCoordinates, AstroError> {
    let midnight = LocalCivilTime::utc_midnight(*greenwich_date);
    let jd = greenwich_date.to_julian_date();
    let t = (jd - J1900) / DAYS_PER_JULIAN_CENTURY;

    let node = Dms::new(74.0, 22.0, 0.0).to_decimal_degrees() + 84.0 * t / 60.0;
    let sun_longitude = sun_true_longitude(&midnight)?;
    let inclination = radians(solar_equator_inclination());

    let from_node = radians(node - sun_longitude);
    let a = degrees((from_node.sin() * inclination.cos()).atan2(-from_node.cos()));
    let rotation =
        normalize_degrees(360.0 - 360.0 * (jd - CARRINGTON_EPOCH) / CARRINGTON_SIDEREAL_PERIOD);
    let centre_longitude = rotation + a;
    let centre_latitude = (radians(sun_longitude - node).sin() * inclination.sin()).asin();

    // position angle of the solar rotation axis
    let theta1 = (-radians(sun_longitude).cos() * radians(obliquity(greenwich_date)).tan()).atan();
    let theta2 = (-from_node.cos() * inclination.tan()).atan();
    let axis_angle = degrees(theta1 + theta2);

    let r = displacement / 60.0;
    let rho = (2.0 * r / sun_angular_diameter(&midnight)?).asin() - radians(r);
    let from_axis = radians(axis_angle - position_angle);

    let latitude = (centre_latitude.sin() * rho.cos()
        + centre_latitude.cos() * rho.sin() * from_axis.cos())
    .asin();
    let longitude = normalize_degrees(
        degrees((rho.sin() * from_axis.sin() / latitude.cos()).asin()) + centre_longitude,
    );

    Ok(HeliographicCoordinates {
        longitude: round(longitude, 2),
        latitude: round(degrees(latitude), 2),
    })
}

/// Carrington rotation number in progress at a Greenwich date.
pub fn carrington_rotation_number(greenwich_date: &CivilDate) -> i32 {
    let rotations =
        (greenwich_date.to_julian_date() - CARRINGTON_ROTATION_1690) / CARRINGTON_SYNODIC_PERIOD;
    1690 + round(rotations, 0) as i32
}

// -------------------------------------------------------------------------------------------------
// Moon
// -------------------------------------------------------------------------------------------------

fn lunar_equator_inclination() -> Degree {
    Dms::new(1.0, 32.0, 32.7).to_decimal_degrees()
}

/// Mean node of the lunar orbit and mean argument of latitude, degrees.
fn lunar_node_and_argument_of_latitude(greenwich_date: &CivilDate) -> (Degree, Degree) {
    let t = (greenwich_date.to_julian_date() - J2000) / DAYS_PER_JULIAN_CENTURY;
    (
        125.044522 - 1934.136261 * t,
        normalize_degrees(93.27191 + 483202.0175 * t),
    )
}

/// Selenographic longitude in `(-180, 180]` and latitude of a direction given by its
/// ecliptic longitude and latitude.
fn selenographic_direction(
    longitude: Degree,
    latitude: Degree,
    greenwich_date: &CivilDate,
) -> (Degree, Degree) {
    let (node, argument_of_latitude) = lunar_node_and_argument_of_latitude(greenwich_date);
    let b = radians(latitude);
    let i = radians(lunar_equator_inclination());
    let w = radians(node - longitude);

    let sel_latitude = degrees((-i.cos() * b.sin() + i.sin() * b.cos() * w.sin()).asin());
    let a = degrees((-b.sin() * i.sin() - b.cos() * i.cos() * w.sin()).atan2(b.cos() * w.cos()));
    let sel_longitude = normalize_degrees(a - argument_of_latitude);
    let sel_longitude = if sel_longitude > 180.0 {
        sel_longitude - 360.0
    } else {
        sel_longitude
    };
    (sel_longitude, sel_latitude)
}

/// Sub-Earth point on the Moon (optical librations) and the lunar axis orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelenographicEarth {
    /// Degrees, 2 places
    pub longitude: Degree,
    pub latitude: Degree,
    /// Position angle of the lunar rotation axis
    pub position_angle_of_axis: Degree,
}

/// Selenographic coordinates of the sub-Earth point at 0h UT.
pub fn selenographic_earth(greenwich_date: &CivilDate) -> SelenographicEarth {
    let moon = moon_longitude_latitude_parallax(&LocalCivilTime::utc_midnight(*greenwich_date));
    let (longitude, latitude) =
        selenographic_direction(moon.longitude, moon.latitude, greenwich_date);

    let (node, _) = lunar_node_and_argument_of_latitude(greenwich_date);
    let b = radians(moon.latitude);
    let i = radians(lunar_equator_inclination());
    let w = radians(node - moon.longitude);
    let c1 = (w.cos() * i.sin() / (b.cos() * i.cos() + b.sin() * i.sin() * w.sin())).atan();

    let e = radians(obliquity(greenwich_date));
    let l = radians(moon.longitude);
    let c2 = (e.sin() * l.cos() / (e.sin() * b.sin() * l.sin() - e.cos() * b.cos())).atan();

    SelenographicEarth {
        longitude: round(longitude, 2),
        latitude: round(latitude, 2),
        position_angle_of_axis: round(degrees(c1 + c2), 2),
    }
}

/// Sub-solar point on the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelenographicSun {
    /// Degrees, 2 places
    pub longitude: Degree,
    /// `90° - longitude`, the longitude of the morning terminator
    pub colongitude: Degree,
    pub latitude: Degree,
}

/// Selenographic coordinates of the sub-solar point at 0h UT.
pub fn selenographic_sun(greenwich_date: &CivilDate) -> Result<SelenographicSun, AstroError> {
    let midnight = LocalCivilTime::utc_midnight(*greenwich_date);
    let sun_longitude = sun_true_longitude(&midnight)?;
    let sun_distance = sun_distance_au(&midnight)?;
    let moon = moon_longitude_latitude_parallax(&midnight);

    // heliocentric direction of the Moon, corrected for the Earth–Moon distance
    let parallax_arcmin = moon.horizontal_parallax * 60.0;
    let b = radians(moon.latitude);
    let longitude = sun_longitude
        + 180.0
        + 26.4 * b.cos() * radians(sun_longitude - moon.longitude).sin()
            / (parallax_arcmin * sun_distance);
    let latitude = degrees(0.14666 * b / (parallax_arcmin * sun_distance));

    let (sel_longitude, sel_latitude) =
        selenographic_direction(longitude, latitude, greenwich_date);
    Ok(SelenographicSun {
        longitude: round(sel_longitude, 2),
        colongitude: round(90.0 - sel_longitude, 2),
        latitude: round(sel_latitude, 2),
    })
}

#[cfg(test)]
mod surface_coordinates_test {
    use super::*;

    #[test]
    fn test_heliographic() {
        let coords = heliographic_coordinates(220.0, 10.5, &CivilDate::new(1.0, 5, 1988)).unwrap();
        assert_eq!(coords.longitude, 142.59);
        assert_eq!(coords.latitude, -19.94);
    }

    #[test]
    fn test_carrington_rotation() {
        assert_eq!(carrington_rotation_number(&CivilDate::new(27.0, 1, 1975)), 1624);
    }

    #[test]
    fn test_selenographic_earth() {
        let earth = selenographic_earth(&CivilDate::new(1.0, 5, 1988));
        assert_eq!(earth.longitude, -4.88);
        assert_eq!(earth.latitude, 4.04);
        assert_eq!(earth.position_angle_of_axis, 19.78);
    }

    #[test]
    fn test_selenographic_sun() {
        let sun = selenographic_sun(&CivilDate::new(1.0, 5, 1988)).unwrap();
        assert_eq!(sun.longitude, 6.81);
        assert_eq!(sun.colongitude, 83.19);
        assert_eq!(sun.latitude, 1.19);
    }
}
