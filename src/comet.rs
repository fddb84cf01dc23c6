//! Geocentric positions of comets on elliptical and parabolic orbits.
use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::catalog::{Catalog, ParabolicCometElements};
use crate::constants::{AstronomicalUnit, Radian, HALF_MINUTE, TROPICAL_YEAR};
use crate::conversion::{
    degrees, normalize_degrees, radians, round, unwind, DegreesMinutes, HoursMinutes,
};
use crate::kepler::{solve_parabolic_cubic, true_anomaly};
use crate::ref_system::{ecliptic_to_equatorial, EquatorialPosition};
use crate::sun::{sun_distance_au, sun_true_longitude};
use crate::time::{CivilDate, LocalCivilTime};

use std::f64::consts::PI;

/// Gaussian gravitational constant times `sqrt(2)/2`, per day, for Barker's equation
const PARABOLIC_MOTION: f64 = 0.0364911624;

/// Geocentric ecliptic direction of a body from its heliocentric polar coordinates.
///
/// Arguments
/// ---------
/// * `longitude`: heliocentric longitude projected on the ecliptic
/// * `latitude`: heliocentric latitude
/// * `radius`: heliocentric distance, AU
/// * `earth_longitude`: heliocentric longitude of the Earth
/// * `earth_radius`: Earth–Sun distance, AU
///
/// Return
/// ------
/// * geocentric ecliptic longitude `[0, 2π)` and latitude, radians
fn geocentric_direction(
    longitude: Radian,
    latitude: Radian,
    radius: AstronomicalUnit,
    earth_longitude: Radian,
    earth_radius: AstronomicalUnit,
) -> (Radian, Radian) {
    let projected_radius = radius * latitude.cos();
    let (s, c) = (longitude - earth_longitude).sin_cos();

    let geo_longitude = if projected_radius < earth_radius {
        (-projected_radius * s / (earth_radius - projected_radius * c)).atan()
            + earth_longitude
            + PI
    } else {
        (earth_radius * s / (projected_radius - earth_radius * c)).atan() + longitude
    };
    let geo_longitude = unwind(geo_longitude);
    let geo_latitude = (projected_radius * latitude.tan() * (geo_longitude - longitude).sin()
        / (earth_radius * s))
        .atan();
    (geo_longitude, geo_latitude)
}

/// Position of a periodic comet, to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipticalCometPosition {
    pub right_ascension: HoursMinutes,
    pub declination: DegreesMinutes,
    /// AU, 2 places
    pub distance: AstronomicalUnit,
}

/// Position of a periodic comet from the catalog.
///
/// The time since perihelion is counted in tropical years from the start of the
/// Greenwich year; the time of day is not used.
///
/// Arguments
/// ---------
/// * `lct`: the local civil time
/// * `name`: the comet, as named in the catalog
/// * `catalog`: the element tables
///
/// Return
/// ------
/// * right ascension and declination rounded to the minute, distance from the Earth
/// * `AstroError::UnknownBody` if the catalog has no such comet
pub fn position_of_elliptical_comet(
    lct: &LocalCivilTime,
    name: &str,
    catalog: &Catalog,
) -> Result<EllipticalCometPosition, AstroError> {
    let comet = catalog.comet(name)?;
    let greenwich_date = lct.greenwich_date();
    let year = greenwich_date.year;

    let years_since_perihelion = (greenwich_date.to_julian_date()
        - CivilDate::new(0.0, 1, year).to_julian_date())
        / TROPICAL_YEAR
        + year as f64
        - comet.perihelion_epoch;
    let mean_anomaly = radians(normalize_degrees(360.0 * years_since_perihelion / comet.period));

    let e = comet.eccentricity;
    let nu = true_anomaly(mean_anomaly, e)?;
    let orbit_longitude = degrees(nu) + comet.perihelion_longitude;
    let radius = comet.semi_major_axis * (1.0 - e * e) / (1.0 + e * nu.cos());

    let from_node = radians(orbit_longitude - comet.node_longitude);
    let inclination = radians(comet.inclination);
    let latitude = (from_node.sin() * inclination.sin()).asin();
    let longitude = (from_node.sin() * inclination.cos()).atan2(from_node.cos())
        + radians(comet.node_longitude);

    let earth_longitude = radians(sun_true_longitude(lct)? + 180.0);
    let earth_radius = sun_distance_au(lct)?;
    let (geo_longitude, geo_latitude) =
        geocentric_direction(longitude, latitude, radius, earth_longitude, earth_radius);

    let distance = (earth_radius * earth_radius + radius * radius
        - 2.0 * earth_radius * radius * (radians(orbit_longitude) - earth_longitude).cos()
            * latitude.cos())
    .sqrt();

    let position =
        ecliptic_to_equatorial(degrees(geo_longitude), degrees(geo_latitude), &greenwich_date);
    Ok(EllipticalCometPosition {
        right_ascension: HoursMinutes::from_decimal_hours(position.right_ascension + HALF_MINUTE),
        declination: DegreesMinutes::from_decimal_degrees(position.declination + HALF_MINUTE),
        distance: round(distance, 2),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParabolicCometPosition {
    pub position: EquatorialPosition,
    /// AU, 8 places
    pub distance: AstronomicalUnit,
}

/// Position of a comet on a parabolic orbit.
///
/// Arguments
/// ---------
/// * `lct`: the local civil time
/// * `elements`: perihelion date, argument of perihelion, node, perihelion distance and
///   inclination
///
/// Return
/// ------
/// * geocentric right ascension and declination, and the distance from the Earth
pub fn position_of_parabolic_comet(
    lct: &LocalCivilTime,
    elements: &ParabolicCometElements,
) -> Result<ParabolicCometPosition, AstroError> {
    let greenwich_date = lct.greenwich_date();
    let days_since_perihelion = greenwich_date.to_julian_date() + lct.universal_time() / 24.0
        - elements.perihelion_date.to_julian_date();

    let q = elements.perihelion_distance;
    let s = solve_parabolic_cubic(PARABOLIC_MOTION * days_since_perihelion / (q * q.sqrt()))?;
    let nu = 2.0 * s.atan();
    let radius = q * (1.0 + s * s);

    let argument_of_latitude = nu + radians(elements.argument_of_perihelion);
    let node = radians(elements.node_longitude);
    let inclination = radians(elements.inclination);
    let latitude = (argument_of_latitude.sin() * inclination.sin()).asin();
    let longitude = (argument_of_latitude.sin() * inclination.cos())
        .atan2(argument_of_latitude.cos())
        + node;

    let earth_longitude = radians(sun_true_longitude(lct)? + 180.0);
    let earth_radius = sun_distance_au(lct)?;
    let (geo_longitude, geo_latitude) =
        geocentric_direction(longitude, latitude, radius, earth_longitude, earth_radius);

    let distance = (earth_radius * earth_radius + radius * radius
        - 2.0
            * earth_radius
            * radius
            * latitude.cos()
            * (argument_of_latitude + node - earth_longitude).cos())
    .sqrt();

    Ok(ParabolicCometPosition {
        position: ecliptic_to_equatorial(
            degrees(geo_longitude),
            degrees(geo_latitude),
            &greenwich_date,
        )
        .to_position(),
        distance: round(distance, 8),
    })
}

#[cfg(test)]
mod comet_test {
    use super::*;
    use crate::conversion::{Dms, Hms};

    #[test]
    fn test_halley() {
        let catalog = Catalog::default();
        let lct = LocalCivilTime::utc_midnight(CivilDate::new(1.0, 1, 1984));
        let pos = position_of_elliptical_comet(&lct, "Halley", &catalog).unwrap();

        assert_eq!(pos.right_ascension, HoursMinutes { hours: 6.0, minutes: 29.0 });
        assert_eq!(pos.declination, DegreesMinutes { degrees: 10.0, minutes: 13.0 });
        assert_eq!(pos.distance, 8.13);
    }

    #[test]
    fn test_unknown_comet() {
        let catalog = Catalog::default();
        let lct = LocalCivilTime::utc_midnight(CivilDate::new(1.0, 1, 1984));
        assert_eq!(
            position_of_elliptical_comet(&lct, "Kohler", &catalog),
            Err(AstroError::UnknownBody("Kohler".to_string()))
        );
    }

    #[test]
    fn test_kohler() {
        let catalog = Catalog::default();
        let kohler = catalog.parabolic_comet("Kohler").unwrap();
        let lct = LocalCivilTime::utc_midnight(CivilDate::new(25.0, 12, 1977));
        let pos = position_of_parabolic_comet(&lct, kohler).unwrap();

        assert_eq!(pos.position.right_ascension, Hms::new(23.0, 17.0, 11.53));
        assert_eq!(pos.position.declination, Dms::new(-33.0, 42.0, 26.42));
        assert_eq!(pos.distance, 1.11246614);
    }
}
