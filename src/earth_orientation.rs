use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, DAYS_PER_JULIAN_CENTURY, J1900, J2000},
    conversion::{normalize_degrees, radians, revolution_fraction},
    time::CivilDate,
};

/// Julian centuries since B1900.0 at the Greenwich date.
fn centuries_since_1900(greenwich_date: &CivilDate) -> f64 {
    (greenwich_date.to_julian_date() - J1900) / DAYS_PER_JULIAN_CENTURY
}

/// Fundamental arguments of the nutation series, in radians.
struct NutationArguments {
    t: f64,
    /// Twice the Sun mean longitude
    sun_longitude_2: f64,
    /// Twice the Moon mean longitude
    moon_longitude_2: f64,
    sun_anomaly: f64,
    moon_anomaly: f64,
    node: f64,
    node_2: f64,
}

impl NutationArguments {
    fn at(greenwich_date: &CivilDate) -> Self {
        let t = centuries_since_1900(greenwich_date);
        let t2 = t * t;

        let sun_longitude_2 =
            2.0 * radians(279.6967 + 0.000303 * t2 + revolution_fraction(100.0021358 * t));
        let moon_longitude_2 =
            2.0 * radians(270.4342 - 0.001133 * t2 + revolution_fraction(1336.855231 * t));
        let sun_anomaly =
            radians(358.4758 - 0.00015 * t2 + revolution_fraction(99.99736056 * t));
        let moon_anomaly =
            radians(296.1046 + 0.009192 * t2 + revolution_fraction(1325.552359 * t));
        let node = radians(259.1833 + 0.002078 * t2 - revolution_fraction(5.372616667 * t));

        NutationArguments {
            t,
            sun_longitude_2,
            moon_longitude_2,
            sun_anomaly,
            moon_anomaly,
            node,
            node_2: 2.0 * node,
        }
    }
}

/// Nutation in ecliptic longitude (Δψ).
///
/// Truncated IAU 1980 series with 13 periodic terms, arguments referred to B1900.0.
/// Every coefficient matters at the arcsecond level.
///
/// Arguments
/// ---------
/// * `greenwich_date`: the Greenwich date
///
/// Return
/// ------
/// * Δψ in degrees
///
/// # See also
/// * [`nutation_in_obliquity`]
/// * [`obliquity`]
pub fn nutation_in_longitude(greenwich_date: &CivilDate) -> Degree {
    let NutationArguments {
        t,
        sun_longitude_2: l2,
        moon_longitude_2: d2,
        sun_anomaly: m1,
        moon_anomaly: m2,
        node: n1,
        node_2: n2,
    } = NutationArguments::at(greenwich_date);

    let mut dp = (-17.2327 - 0.01737 * t) * n1.sin();
    dp += (-1.2729 - 0.00013 * t) * l2.sin() + 0.2088 * n2.sin();
    dp += -0.2037 * d2.sin() + (0.1261 - 0.00031 * t) * m1.sin();
    dp += 0.0675 * m2.sin() - (0.0497 - 0.00012 * t) * (l2 + m1).sin();
    dp += -0.0342 * (d2 - n1).sin() - 0.0261 * (d2 + m2).sin();
    dp += 0.0214 * (l2 - m1).sin() - 0.0149 * (l2 - d2 + m2).sin();
    dp += 0.0124 * (l2 - n1).sin() + 0.0114 * (d2 - m2).sin();

    dp / 3600.0
}

/// Nutation in obliquity (Δε) in degrees, 9 periodic terms.
pub fn nutation_in_obliquity(greenwich_date: &CivilDate) -> Degree {
    let NutationArguments {
        t,
        sun_longitude_2: l2,
        moon_longitude_2: d2,
        sun_anomaly: m1,
        moon_anomaly: m2,
        node: n1,
        node_2: n2,
    } = NutationArguments::at(greenwich_date);

    let mut ddo = (9.21 + 0.00091 * t) * n1.cos();
    ddo += (0.5522 - 0.00029 * t) * l2.cos() - 0.0904 * n2.cos();
    ddo += 0.0884 * d2.cos() + 0.0216 * (l2 + m1).cos();
    ddo += 0.0183 * (d2 - n1).cos() + 0.0113 * (d2 + m2).cos();
    ddo += -0.0093 * (l2 - m1).cos() - 0.0066 * (l2 - n1).cos();

    ddo / 3600.0
}

/// True obliquity of the ecliptic, mean obliquity plus nutation in obliquity.
///
/// Arguments
/// ---------
/// * `greenwich_date`: the Greenwich date
///
/// Return
/// ------
/// * ε in degrees
///
/// Formula
/// -------
/// With `c` the Julian centuries since J2000 (computed from B1900.0):
///
/// ```text
/// ε = 23.43929167 − c·(46.815 + c·(0.0006 − 0.00181·c)) / 3600 + Δε
/// ```
pub fn obliquity(greenwich_date: &CivilDate) -> Degree {
    let c = centuries_since_1900(greenwich_date) - 1.0;
    let d = c * (46.815 + c * (0.0006 - c * 0.00181));
    23.43929167 - d / 3600.0 + nutation_in_obliquity(greenwich_date)
}

/// Mean obliquity of the ecliptic (no nutation), polynomial in centuries since J2000.
pub fn mean_obliquity_j2000(greenwich_date: &CivilDate) -> Degree {
    let t = (greenwich_date.to_julian_date() - J2000) / DAYS_PER_JULIAN_CENTURY;
    23.439292 - t * (46.815 + t * (0.0006 - t * 0.00181)) / 3600.0
}

/// Nutation in longitude and obliquity, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutation {
    pub longitude: Degree,
    pub obliquity: Degree,
}

/// Low precision nutation, two terms each, good to about half an arcsecond.
pub fn simple_nutation(greenwich_date: &CivilDate) -> Nutation {
    let t = centuries_since_1900(greenwich_date);

    let sun_longitude = radians(normalize_degrees(
        279.6967 + 0.000303 * t * t + revolution_fraction(100.0021358 * t),
    ));
    let node = radians(normalize_degrees(
        259.1833 - revolution_fraction(5.372617 * t),
    ));

    let dpsi = (-17.2 * node.sin() - 1.3 * (2.0 * sun_longitude).sin()) / 3600.0;
    let deps = (9.2 * node.cos() + 0.5 * (2.0 * sun_longitude).cos()) / 3600.0;

    Nutation {
        longitude: dpsi,
        obliquity: deps,
    }
}

#[cfg(test)]
mod earth_orientation_test {
    use super::*;
    use crate::conversion::round;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_obliquity() {
        let eps = mean_obliquity_j2000(&CivilDate::new(6.0, 7, 2009));
        assert_eq!(round(eps, 8), 23.43805531);
    }

    #[test]
    fn test_true_obliquity_close_to_mean() {
        let date = CivilDate::new(6.0, 7, 2009);
        let delta = obliquity(&date) - mean_obliquity_j2000(&date);
        assert_abs_diff_eq!(delta, nutation_in_obliquity(&date), epsilon = 1e-4);
    }

    #[test]
    fn test_nutation_amplitude() {
        for year in [1950, 1988, 2003, 2030] {
            let date = CivilDate::new(1.0, 1, year);
            assert!(nutation_in_longitude(&date).abs() < 20.0 / 3600.0);
            assert!(nutation_in_obliquity(&date).abs() < 10.0 / 3600.0);
        }
    }

    #[test]
    fn test_nutation_series() {
        let reference = [
            (1988, 0.000316200860, 0.002367558809),
            (2003, -0.004270061380, 0.000847687993),
            (1600, 0.004192228745, 0.001177239023),
        ];
        for (year, longitude, obliquity) in reference {
            let date = CivilDate::new(1.0, 1, year);
            assert_abs_diff_eq!(nutation_in_longitude(&date), longitude, epsilon = 1e-9);
            assert_abs_diff_eq!(nutation_in_obliquity(&date), obliquity, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_simple_nutation() {
        let nutation = simple_nutation(&CivilDate::new(1.0, 9, 1988));
        assert_eq!(round(nutation.longitude, 9), 0.001525808);
        assert_eq!(round(nutation.obliquity, 7), 0.0025671);
    }
}
