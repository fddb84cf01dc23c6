//! Corrections from a catalog place to the place seen by an observer.
//!
//! Precession and aberration work on the sphere. Refraction and parallax depend on
//! where and when the observer stands: they go through the hour angle and the
//! horizon frame of [`crate::ref_system`].
use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::constants::{
    Degree, Hour, Meter, Radian, ABERRATION_CONSTANT, DAYS_PER_JULIAN_CENTURY, DPI,
    EARTH_AXIS_RATIO, EARTH_RADIUS_M, J1900,
};
use crate::conversion::{degrees, normalize_hours, radians, unwind, Hms};
use crate::ref_system::{
    equatorial_to_horizon, hour_angle_to_right_ascension, horizon_to_equatorial,
    right_ascension_to_hour_angle, EclipticCoordinates, EquatorialCoordinates,
    GeographicLocation,
};
use crate::sun::sun_true_longitude;
use crate::time::{CivilDate, LocalCivilTime, TimeZone};

use std::f64::consts::PI;

/// Bounded iterations of refraction and parallax
const CORRECTION_MAX_ITER: usize = 100;
const CORRECTION_TOLERANCE: f64 = 1e-6;

// -------------------------------------------------------------------------------------------------
// Precession
// -------------------------------------------------------------------------------------------------

/// Low precision precession of equatorial coordinates between two epochs.
///
/// Arguments
/// ---------
/// * `right_ascension`: decimal hours at `epoch_1`
/// * `declination`: degrees at `epoch_1`
/// * `epoch_1`: the epoch of the input coordinates
/// * `epoch_2`: the epoch to precess to
///
/// Return
/// ------
/// * coordinates referred to `epoch_2`, right ascension in `[0, 24)`
///
/// Formula
/// -------
/// With `m = 3.07234ˢ + 0.00186ˢ·T` and `n = 20.0468″ − 0.0085″·T` (`T` in centuries
/// since B1900.0 at `epoch_1`) over `N` years:
///
/// ```text
/// Δα = (m + n·sin α·tan δ / 15)·N
/// Δδ = n·cos α·N
/// ```
pub fn correct_for_precession(
    right_ascension: Hour,
    declination: Degree,
    epoch_1: &CivilDate,
    epoch_2: &CivilDate,
) -> EquatorialCoordinates {
    let ra = radians(right_ascension * 15.0);
    let dec = radians(declination);

    let jd_1 = epoch_1.to_julian_date();
    let t = (jd_1 - J1900) / DAYS_PER_JULIAN_CENTURY;
    let m_sec = 3.07234 + 0.00186 * t;
    let n_arcsec = 20.0468 - 0.0085 * t;
    let years = (epoch_2.to_julian_date() - jd_1) / 365.25;

    let delta_ra = (m_sec + n_arcsec * ra.sin() * dec.tan() / 15.0) * years / 3600.0;
    let delta_dec = n_arcsec * ra.cos() * years / 3600.0;

    EquatorialCoordinates::new(
        normalize_hours(right_ascension + delta_ra),
        declination + delta_dec,
    )
}

// -------------------------------------------------------------------------------------------------
// Aberration
// -------------------------------------------------------------------------------------------------

/// Annual aberration in ecliptic coordinates.
///
/// Arguments
/// ---------
/// * `ut`: universal time in decimal hours
/// * `greenwich_date`: the Greenwich date
/// * `longitude`, `latitude`: true ecliptic coordinates in degrees
///
/// Return
/// ------
/// * the apparent ecliptic coordinates, displaced toward the apex of the Earth motion
pub fn correct_for_aberration(
    ut: Hour,
    greenwich_date: &CivilDate,
    longitude: Degree,
    latitude: Degree,
) -> Result<EclipticCoordinates, AstroError> {
    let lct = LocalCivilTime::new(Hms::from_decimal_hours(ut), TimeZone::utc(), *greenwich_date);
    let sun_longitude = sun_true_longitude(&lct)?;

    let elongation = radians(sun_longitude - longitude);
    let lat = radians(latitude);
    let delta_longitude = -ABERRATION_CONSTANT * elongation.cos() / lat.cos();
    let delta_latitude = -ABERRATION_CONSTANT * elongation.sin() * lat.sin();

    Ok(EclipticCoordinates::new(
        longitude + delta_longitude / 3600.0,
        latitude + delta_latitude / 3600.0,
    ))
}

// -------------------------------------------------------------------------------------------------
// Atmospheric refraction
// -------------------------------------------------------------------------------------------------

/// Which way a refraction or parallax correction goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefractionMode {
    /// The input is the true (airless) position, the apparent one is returned
    Actual,
    /// The input is the observed position, the true one is returned
    Apparent,
}

/// Geocentric or topocentric input of [`geocentric_parallax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParallaxMode {
    /// The input is geocentric, the topocentric position is returned
    Actual,
    /// The input is topocentric, the geocentric position is returned
    Apparent,
}

/// Below this altitude (about −5°) no refraction is applied
const REFRACTION_FLOOR: Radian = -0.087;

/// Above this altitude (15°) the cotangent formula is used
const HIGH_ALTITUDE: Radian = 0.2617994;

/// Refraction at `altitude`, signed by `direction` (−1 raises, +1 lowers), radians.
fn refraction_angle(pressure: f64, temperature: f64, altitude: Radian, direction: f64) -> Radian {
    if altitude < REFRACTION_FLOOR {
        return 0.0;
    }
    if altitude < HIGH_ALTITUDE {
        let yd = degrees(altitude);
        let a = ((0.00002 * yd + 0.0196) * yd + 0.1594) * pressure;
        let b = (273.0 + temperature) * ((0.0845 * yd + 0.505) * yd + 1.0);
        return radians(-(a / b) * direction);
    }
    -direction * 0.00007888888 * pressure / ((273.0 + temperature) * altitude.tan())
}

/// Refract an altitude.
///
/// In [`RefractionMode::Actual`] the refraction depends on the apparent altitude being
/// sought, it is iterated until two estimates agree to 1e-6 rad. In
/// [`RefractionMode::Apparent`] a single pass suffices.
fn refract(
    altitude: Degree,
    mode: RefractionMode,
    pressure: f64,
    temperature: f64,
) -> Result<Degree, AstroError> {
    let y = radians(altitude);
    if y < REFRACTION_FLOOR {
        return Ok(altitude);
    }

    match mode {
        RefractionMode::Apparent => {
            Ok(degrees(y + refraction_angle(pressure, temperature, y, 1.0)))
        }
        RefractionMode::Actual => {
            let mut previous = 0.0;
            for _ in 0..CORRECTION_MAX_ITER {
                let r = refraction_angle(pressure, temperature, y + previous, -1.0);
                if r == 0.0 || (r - previous).abs() < CORRECTION_TOLERANCE {
                    return Ok(degrees(y + r));
                }
                previous = r;
            }
            Err(AstroError::NonConvergence("atmospheric refraction"))
        }
    }
}

/// Correct an equatorial position for atmospheric refraction.
///
/// Arguments
/// ---------
/// * `position`: right ascension (hours) and declination (degrees)
/// * `mode`: whether `position` is the true or the observed one
/// * `location`: the observer
/// * `lct`: local civil time of the observation
/// * `pressure`: atmospheric pressure in millibars
/// * `temperature`: air temperature in °C
///
/// Return
/// ------
/// * the corrected right ascension and declination. Objects more than about 5°
///   below the horizon are returned unchanged.
/// * `AstroError::NonConvergence` if the iteration of the `Actual` mode stalls
pub fn atmospheric_refraction(
    position: &EquatorialCoordinates,
    mode: RefractionMode,
    location: &GeographicLocation,
    lct: &LocalCivilTime,
    pressure: f64,
    temperature: f64,
) -> Result<EquatorialCoordinates, AstroError> {
    let ha = right_ascension_to_hour_angle(position.right_ascension, lct, location.longitude);
    let horizon = equatorial_to_horizon(ha, position.declination, location.latitude);

    let altitude = refract(horizon.altitude, mode, pressure, temperature)?;

    let corrected = horizon_to_equatorial(horizon.azimuth, altitude, location.latitude);
    Ok(EquatorialCoordinates::new(
        hour_angle_to_right_ascension(corrected.hour_angle, lct, location.longitude),
        corrected.declination,
    ))
}

// -------------------------------------------------------------------------------------------------
// Geocentric parallax
// -------------------------------------------------------------------------------------------------

/// Observer position in Earth radii, `ρ·sin φ'` and `ρ·cos φ'`, and the object
/// distance in Earth radii.
struct ParallaxGeometry {
    rho_sin: f64,
    rho_cos: f64,
    distance: f64,
}

impl ParallaxGeometry {
    fn new(latitude: Degree, height: Meter, horizontal_parallax: Degree) -> Self {
        let phi = radians(latitude);
        let u = (EARTH_AXIS_RATIO * phi.sin() / phi.cos()).atan();
        let h = height / EARTH_RADIUS_M;

        ParallaxGeometry {
            rho_sin: EARTH_AXIS_RATIO * u.sin() + h * phi.sin(),
            rho_cos: u.cos() + h * phi.cos(),
            distance: 1.0 / radians(horizontal_parallax).sin(),
        }
    }

    /// Topocentric hour angle (in `[0, 2π)`) and declination from geocentric ones.
    fn topocentric(&self, hour_angle: Radian, declination: Radian) -> (Radian, Radian) {
        let (rs, rc, rp) = (self.rho_sin, self.rho_cos, self.distance);
        let cos_h = hour_angle.cos();
        let cos_d = declination.cos();

        let dh = (rc * hour_angle.sin() / (rp * cos_d - rc * cos_h)).atan();
        let h = hour_angle + dh;
        let dec = (h.cos() * (rp * declination.sin() - rs) / (rp * cos_d * cos_h - rc)).atan();
        (unwind(h), dec)
    }
}

/// Correct an equatorial position for the geocentric parallax.
///
/// Arguments
/// ---------
/// * `position`: right ascension (hours) and declination (degrees)
/// * `mode`: [`ParallaxMode::Actual`] for a geocentric input,
///   [`ParallaxMode::Apparent`] for a topocentric one
/// * `location`: the observer
/// * `height`: observer height above sea level, meters
/// * `horizontal_parallax`: equatorial horizontal parallax of the object, degrees
/// * `lct`: local civil time of the observation
///
/// Return
/// ------
/// * the corrected position
/// * `AstroError::NonConvergence` if the inversion of the `Apparent` mode stalls
///
/// Remarks
/// -------
/// The inversion iterates the forward correction until both the hour angle shift and
/// the declination shift are stable to 1e-6 rad.
pub fn geocentric_parallax(
    position: &EquatorialCoordinates,
    mode: ParallaxMode,
    location: &GeographicLocation,
    height: Meter,
    horizontal_parallax: Degree,
    lct: &LocalCivilTime,
) -> Result<EquatorialCoordinates, AstroError> {
    let geometry = ParallaxGeometry::new(location.latitude, height, horizontal_parallax);
    let ha = right_ascension_to_hour_angle(position.right_ascension, lct, location.longitude);
    let x = radians(ha * 15.0);
    let y = radians(position.declination);

    let (h, dec) = match mode {
        ParallaxMode::Actual => geometry.topocentric(x, y),
        ParallaxMode::Apparent => {
            let (mut dh_prev, mut dd_prev) = (0.0, 0.0);
            let (mut xl, mut yl) = (x, y);
            let mut solution = None;
            for _ in 0..CORRECTION_MAX_ITER {
                let (p, q) = geometry.topocentric(xl, yl);
                // shift in (-π, π]
                let dh = (p - xl + PI).rem_euclid(DPI) - PI;
                let dd = q - yl;
                if (dh - dh_prev).abs() < CORRECTION_TOLERANCE
                    && (dd - dd_prev).abs() < CORRECTION_TOLERANCE
                {
                    solution = Some((x - dh, y - dd));
                    break;
                }
                xl = x - dh;
                yl = y - dd;
                dh_prev = dh;
                dd_prev = dd;
            }
            solution.ok_or(AstroError::NonConvergence("geocentric parallax"))?
        }
    };

    let corrected_ha = normalize_hours(degrees(h) / 15.0);
    Ok(EquatorialCoordinates::new(
        hour_angle_to_right_ascension(corrected_ha, lct, location.longitude),
        degrees(dec),
    ))
}

#[cfg(test)]
mod corrections_test {
    use super::*;
    use crate::conversion::Dms;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_precession() {
        let pos = correct_for_precession(
            Hms::new(9.0, 10.0, 43.0).to_decimal_hours(),
            Dms::new(14.0, 23.0, 25.0).to_decimal_degrees(),
            &CivilDate::new(0.923, 1, 1950),
            &CivilDate::new(1.0, 6, 1979),
        )
        .to_position();

        assert_eq!(pos.right_ascension, Hms::new(9.0, 12.0, 20.18));
        assert_eq!(pos.declination, Dms::new(14.0, 16.0, 9.12));
    }

    #[test]
    fn test_aberration() {
        let apparent = correct_for_aberration(
            0.0,
            &CivilDate::new(8.0, 9, 1988),
            Dms::new(352.0, 37.0, 10.1).to_decimal_degrees(),
            Dms::new(-1.0, 32.0, 56.4).to_decimal_degrees(),
        )
        .unwrap()
        .to_position();

        assert_eq!(apparent.longitude, Dms::new(352.0, 37.0, 30.45));
        assert_eq!(apparent.latitude, Dms::new(-1.0, 32.0, 56.33));
    }

    fn refraction_setup() -> (EquatorialCoordinates, GeographicLocation, LocalCivilTime) {
        (
            EquatorialCoordinates::new(
                Hms::new(23.0, 14.0, 0.0).to_decimal_hours(),
                Dms::new(40.0, 10.0, 0.0).to_decimal_degrees(),
            ),
            GeographicLocation::new(0.17, 51.2036110),
            LocalCivilTime::new(
                Hms::new(1.0, 1.0, 24.0),
                TimeZone::utc(),
                CivilDate::new(23.0, 3, 1987),
            ),
        )
    }

    #[test]
    fn test_atmospheric_refraction() {
        let (position, location, lct) = refraction_setup();
        let apparent =
            atmospheric_refraction(&position, RefractionMode::Actual, &location, &lct, 1012.0, 21.7)
                .unwrap()
                .to_position();

        assert_eq!(apparent.right_ascension, Hms::new(23.0, 13.0, 44.74));
        assert_eq!(apparent.declination, Dms::new(40.0, 19.0, 45.76));
    }

    #[test]
    fn test_refraction_inverse() {
        let (position, location, lct) = refraction_setup();
        let apparent =
            atmospheric_refraction(&position, RefractionMode::Actual, &location, &lct, 1012.0, 21.7)
                .unwrap();
        let recovered = atmospheric_refraction(
            &apparent,
            RefractionMode::Apparent,
            &location,
            &lct,
            1012.0,
            21.7,
        )
        .unwrap();

        assert_abs_diff_eq!(recovered.declination, position.declination, epsilon = 1e-4);
        assert_abs_diff_eq!(
            recovered.right_ascension,
            position.right_ascension,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_refraction_far_below_horizon() {
        assert_eq!(refract(-30.0, RefractionMode::Actual, 1010.0, 10.0), Ok(-30.0));
        assert_eq!(refract(-30.0, RefractionMode::Apparent, 1010.0, 10.0), Ok(-30.0));
        // refraction raises the apparent altitude
        assert!(refract(10.0, RefractionMode::Actual, 1010.0, 10.0).unwrap() > 10.0);
    }

    fn parallax_setup() -> (EquatorialCoordinates, GeographicLocation, LocalCivilTime) {
        (
            EquatorialCoordinates::new(
                Hms::new(22.0, 35.0, 19.0).to_decimal_hours(),
                Dms::new(-7.0, 41.0, 13.0).to_decimal_degrees(),
            ),
            GeographicLocation::new(-100.0, 50.0),
            LocalCivilTime::new(
                Hms::new(10.0, 45.0, 0.0),
                TimeZone::new(false, -6),
                CivilDate::new(26.0, 2, 1979),
            ),
        )
    }

    #[test]
    fn test_geocentric_parallax() {
        let (position, location, lct) = parallax_setup();
        let topocentric =
            geocentric_parallax(&position, ParallaxMode::Actual, &location, 60.0, 1.019167, &lct)
                .unwrap()
                .to_position();

        assert_eq!(topocentric.right_ascension, Hms::new(22.0, 36.0, 43.22));
        assert_eq!(topocentric.declination, Dms::new(-8.0, 32.0, 17.4));
    }

    #[test]
    fn test_parallax_inverse() {
        let (position, location, lct) = parallax_setup();
        let geocentric = geocentric_parallax(
            &position,
            ParallaxMode::Apparent,
            &location,
            60.0,
            1.019167,
            &lct,
        )
        .unwrap();
        assert_abs_diff_eq!(geocentric.declination, -6.842017408, epsilon = 1e-6);

        let back =
            geocentric_parallax(&geocentric, ParallaxMode::Actual, &location, 60.0, 1.019167, &lct)
                .unwrap();
        assert_abs_diff_eq!(back.declination, position.declination, epsilon = 1e-4);
        assert_abs_diff_eq!(back.right_ascension, position.right_ascension, epsilon = 1e-4);
    }
}
