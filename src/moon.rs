//! Position, distance and phase of the Moon, and the times of new and full Moon.
//!
//! The precise model sums the main periodic terms of the lunar theory in
//! longitude, latitude and horizontal parallax. Each term is a multiple of the
//! four fundamental arguments: mean elongation `D`, solar mean anomaly `M`, lunar
//! mean anomaly `M'` and argument of latitude `F`. Terms in `M` are scaled by the
//! eccentricity factor `E` of the Earth orbit, once per multiple of `M`.
use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::constants::{
    Degree, Kilometer, Radian, DAYS_PER_JULIAN_CENTURY, EARTH_RADIUS_KM, HALF_MINUTE,
    HOURS_PER_JULIAN_CENTURY, J1900, MOON_ANGULAR_DIAMETER, MOON_MEAN_DISTANCE_KM,
};
use crate::conversion::{
    degrees, floor_mod, normalize_degrees, radians, round, unwind, Dms, Hms, HoursMinutes,
};
use crate::earth_orientation::nutation_in_longitude;
use crate::ref_system::{ecliptic_to_equatorial, EquatorialPosition};
use crate::sun::{sun_mean_anomaly, sun_true_longitude};
use crate::time::{
    universal_time_to_local_civil_time, universal_time_to_local_decimal_hours, CivilDate,
    LocalCivilTime, TimeZone,
};

// -------------------------------------------------------------------------------------------------
// Periodic terms: (coefficient, D, M, M', F)
// -------------------------------------------------------------------------------------------------

type LunarTerm = (f64, f64, f64, f64, f64);

/// Longitude, sine terms in degrees
const LONGITUDE_TERMS: [LunarTerm; 50] = [
    (6.28875, 0.0, 0.0, 1.0, 0.0),
    (1.274018, 2.0, 0.0, -1.0, 0.0),
    (0.658309, 2.0, 0.0, 0.0, 0.0),
    (0.213616, 0.0, 0.0, 2.0, 0.0),
    (-0.185596, 0.0, 1.0, 0.0, 0.0),
    (-0.114336, 0.0, 0.0, 0.0, 2.0),
    (0.058793, 2.0, 0.0, -2.0, 0.0),
    (0.057212, 2.0, -1.0, -1.0, 0.0),
    (0.05332, 2.0, 0.0, 1.0, 0.0),
    (0.045874, 2.0, -1.0, 0.0, 0.0),
    (0.041024, 0.0, -1.0, 1.0, 0.0),
    (-0.034718, 1.0, 0.0, 0.0, 0.0),
    (-0.030465, 0.0, 1.0, 1.0, 0.0),
    (0.015326, 2.0, 0.0, 0.0, -2.0),
    (-0.012528, 0.0, 0.0, 1.0, 2.0),
    (-0.01098, 0.0, 0.0, -1.0, 2.0),
    (0.010674, 4.0, 0.0, -1.0, 0.0),
    (0.010034, 0.0, 0.0, 3.0, 0.0),
    (0.008548, 4.0, 0.0, -2.0, 0.0),
    (-0.00791, 2.0, 1.0, -1.0, 0.0),
    (-0.006783, 2.0, 1.0, 0.0, 0.0),
    (0.005162, -1.0, 0.0, 1.0, 0.0),
    (0.005, 1.0, 1.0, 0.0, 0.0),
    (0.003862, 4.0, 0.0, 0.0, 0.0),
    (0.004049, 2.0, -1.0, 1.0, 0.0),
    (0.003996, 2.0, 0.0, 2.0, 0.0),
    (0.003665, 2.0, 0.0, -3.0, 0.0),
    (0.002695, 0.0, -1.0, 2.0, 0.0),
    (0.002602, -2.0, 0.0, 1.0, -2.0),
    (0.002396, 2.0, -1.0, -2.0, 0.0),
    (-0.002349, 1.0, 0.0, 1.0, 0.0),
    (0.002249, 2.0, -2.0, 0.0, 0.0),
    (-0.002125, 0.0, 1.0, 2.0, 0.0),
    (-0.002079, 0.0, 2.0, 0.0, 0.0),
    (0.002059, 2.0, -2.0, -1.0, 0.0),
    (-0.001773, 2.0, 0.0, 1.0, -2.0),
    (-0.001595, 2.0, 0.0, 0.0, 2.0),
    (0.00122, 4.0, -1.0, -1.0, 0.0),
    (-0.00111, 0.0, 0.0, 2.0, 2.0),
    (0.000892, -3.0, 0.0, 1.0, 0.0),
    (-0.000811, 2.0, 1.0, 1.0, 0.0),
    (0.000761, 4.0, -1.0, -2.0, 0.0),
    (0.000704, -2.0, -2.0, 1.0, 0.0),
    (0.000693, 2.0, 1.0, -2.0, 0.0),
    (0.000598, 2.0, -1.0, 0.0, -2.0),
    (0.00055, 4.0, 0.0, 1.0, 0.0),
    (0.000538, 0.0, 0.0, 4.0, 0.0),
    (0.000521, 4.0, -1.0, 0.0, 0.0),
    (0.000486, -1.0, 0.0, 2.0, 0.0),
    (0.000717, 0.0, -2.0, 1.0, 0.0),
];

/// Latitude, sine terms in degrees
const LATITUDE_TERMS: [LunarTerm; 45] = [
    (5.128189, 0.0, 0.0, 0.0, 1.0),
    (0.280606, 0.0, 0.0, 1.0, 1.0),
    (0.277693, 0.0, 0.0, 1.0, -1.0),
    (0.173238, 2.0, 0.0, 0.0, -1.0),
    (0.055413, 2.0, 0.0, -1.0, 1.0),
    (0.046272, 2.0, 0.0, -1.0, -1.0),
    (0.032573, 2.0, 0.0, 0.0, 1.0),
    (0.017198, 0.0, 0.0, 2.0, 1.0),
    (0.009267, 2.0, 0.0, 1.0, -1.0),
    (0.008823, 0.0, 0.0, 2.0, -1.0),
    (0.008247, 2.0, -1.0, 0.0, -1.0),
    (0.004323, 2.0, 0.0, -2.0, -1.0),
    (0.0042, 2.0, 0.0, 1.0, 1.0),
    (0.003372, -2.0, -1.0, 0.0, 1.0),
    (0.002472, 2.0, -1.0, -1.0, 1.0),
    (0.002222, 2.0, -1.0, 0.0, 1.0),
    (0.002072, 2.0, -1.0, -1.0, -1.0),
    (0.001877, 0.0, -1.0, 1.0, 1.0),
    (0.001828, 4.0, 0.0, -1.0, -1.0),
    (-0.001803, 0.0, 1.0, 0.0, 1.0),
    (-0.00175, 0.0, 0.0, 0.0, 3.0),
    (0.00157, 0.0, -1.0, 1.0, -1.0),
    (-0.001487, 1.0, 0.0, 0.0, 1.0),
    (-0.001481, 0.0, 1.0, 1.0, 1.0),
    (0.001417, 0.0, -1.0, -1.0, 1.0),
    (0.00135, 0.0, -1.0, 0.0, 1.0),
    (0.00133, -1.0, 0.0, 0.0, 1.0),
    (0.001106, 0.0, 0.0, 3.0, 1.0),
    (0.00102, 4.0, 0.0, 0.0, -1.0),
    (0.000833, 4.0, 0.0, -1.0, 1.0),
    (0.000781, 0.0, 0.0, 1.0, -3.0),
    (0.00067, 4.0, 0.0, -2.0, 1.0),
    (0.000606, 2.0, 0.0, 0.0, -3.0),
    (0.000597, 2.0, 0.0, 2.0, -1.0),
    (0.000492, 2.0, -1.0, 1.0, -1.0),
    (0.00045, -2.0, 0.0, 2.0, -1.0),
    (0.000439, 0.0, 0.0, 3.0, -1.0),
    (0.000423, 2.0, 0.0, 2.0, 1.0),
    (0.000422, 2.0, 0.0, -3.0, -1.0),
    (-0.000367, 2.0, 1.0, -1.0, 1.0),
    (-0.000353, 2.0, 1.0, 0.0, 1.0),
    (0.000331, 4.0, 0.0, 0.0, 1.0),
    (0.000317, 2.0, -1.0, 1.0, 1.0),
    (0.000306, 2.0, -2.0, 0.0, -1.0),
    (-0.000283, 0.0, 0.0, 1.0, 3.0),
];

const MEAN_HORIZONTAL_PARALLAX: Degree = 0.950724;

/// Horizontal parallax, cosine terms in degrees
const PARALLAX_TERMS: [LunarTerm; 30] = [
    (0.051818, 0.0, 0.0, 1.0, 0.0),
    (0.009531, 2.0, 0.0, -1.0, 0.0),
    (0.007843, 2.0, 0.0, 0.0, 0.0),
    (0.002824, 0.0, 0.0, 2.0, 0.0),
    (0.000857, 2.0, 0.0, 1.0, 0.0),
    (0.000533, 2.0, -1.0, 0.0, 0.0),
    (0.000401, 2.0, -1.0, -1.0, 0.0),
    (0.00032, 0.0, -1.0, 1.0, 0.0),
    (-0.000271, 1.0, 0.0, 0.0, 0.0),
    (-0.000264, 0.0, 1.0, 1.0, 0.0),
    (-0.000198, 0.0, 0.0, -1.0, 2.0),
    (0.000173, 0.0, 0.0, 3.0, 0.0),
    (0.000167, 4.0, 0.0, -1.0, 0.0),
    (-0.000111, 0.0, 1.0, 0.0, 0.0),
    (0.000103, 4.0, 0.0, -2.0, 0.0),
    (-0.000084, -2.0, 0.0, 2.0, 0.0),
    (-0.000083, 2.0, 1.0, 0.0, 0.0),
    (0.000079, 2.0, 0.0, 2.0, 0.0),
    (0.000072, 4.0, 0.0, 0.0, 0.0),
    (0.000064, 2.0, -1.0, 1.0, 0.0),
    (-0.000063, 2.0, 1.0, -1.0, 0.0),
    (0.000041, 1.0, 1.0, 0.0, 0.0),
    (0.000035, 0.0, -1.0, 2.0, 0.0),
    (-0.000033, -2.0, 0.0, 3.0, 0.0),
    (-0.00003, 1.0, 0.0, 1.0, 0.0),
    (-0.000029, -2.0, 0.0, 0.0, 2.0),
    (-0.000029, 0.0, 1.0, 2.0, 0.0),
    (0.000026, 2.0, -2.0, 0.0, 0.0),
    (-0.000023, -2.0, 0.0, 1.0, 2.0),
    (0.000019, 4.0, -1.0, -1.0, 0.0),
];

// -------------------------------------------------------------------------------------------------
// Mean elements
// -------------------------------------------------------------------------------------------------

/// Mean elements of the lunar orbit at an instant, long period terms included.
struct MeanElements {
    longitude: Radian,
    sun_anomaly: Radian,
    anomaly: Radian,
    elongation: Radian,
    argument_of_latitude: Radian,
    node: Radian,
    /// Argument of the second node term
    node_term: Radian,
    /// Eccentricity factor of the Earth orbit
    e: f64,
}

impl MeanElements {
    fn at(lct: &LocalCivilTime) -> Self {
        let ut = lct.universal_time();
        let days = lct.greenwich_date().to_julian_date() - J1900;
        let t = days / DAYS_PER_JULIAN_CENTURY + ut / HOURS_PER_JULIAN_CENTURY;
        let t2 = t * t;
        let q = days + ut / 24.0;

        // fraction of revolutions elapsed for a period in days
        let revolutions = |period: f64| 360.0 * floor_mod(q / period, 1.0);

        let mut longitude = 270.434164 + revolutions(27.32158213) - (0.001133 - 0.0000019 * t) * t2;
        let mut sun_anomaly =
            358.475833 + revolutions(365.2596407) - (0.00015 + 0.0000033 * t) * t2;
        let mut anomaly = 296.104608 + revolutions(27.55455094) + (0.009192 + 0.0000144 * t) * t2;
        let mut elongation =
            350.737486 + revolutions(29.53058868) - (0.001436 - 0.0000019 * t) * t2;
        let mut argument_of_latitude =
            11.250889 + revolutions(27.21222039) - (0.003211 + 0.0000003 * t) * t2;
        let node = 259.183275 - revolutions(6798.363307) + (0.002078 + 0.0000022 * t) * t2;

        let s1 = radians(51.2 + 20.2 * t).sin();
        let s2 = radians(node).sin();
        let s3 = 0.003964 * radians(346.56 + (132.87 - 0.0091731 * t) * t).sin();
        let node_term = radians(node + 275.05 - 2.3 * t);
        let s4 = node_term.sin();

        longitude += 0.000233 * s1 + s3 + 0.001964 * s2;
        sun_anomaly -= 0.001778 * s1;
        anomaly += 0.000817 * s1 + s3 + 0.002541 * s2;
        argument_of_latitude += s3 - 0.024691 * s2 - 0.004328 * s4;
        elongation += 0.002011 * s1 + s3 + 0.001964 * s2;

        MeanElements {
            longitude: radians(longitude),
            sun_anomaly: radians(sun_anomaly),
            anomaly: radians(anomaly),
            elongation: radians(elongation),
            argument_of_latitude: radians(argument_of_latitude),
            node: radians(node),
            node_term,
            e: 1.0 - (0.002495 + 0.00000752 * t) * t,
        }
    }

    /// Argument and eccentricity scaling of a periodic term.
    fn term(&self, &(coefficient, d, m, mp, f): &LunarTerm) -> (f64, Radian) {
        let argument = d * self.elongation
            + m * self.sun_anomaly
            + mp * self.anomaly
            + f * self.argument_of_latitude;
        (coefficient * self.e.powi(m.abs() as i32), argument)
    }

    fn sine_series(&self, terms: &[LunarTerm]) -> Degree {
        terms
            .iter()
            .map(|term| {
                let (amplitude, argument) = self.term(term);
                amplitude * argument.sin()
            })
            .sum()
    }

    fn cosine_series(&self, terms: &[LunarTerm]) -> Degree {
        terms
            .iter()
            .map(|term| {
                let (amplitude, argument) = self.term(term);
                amplitude * argument.cos()
            })
            .sum()
    }
}

// -------------------------------------------------------------------------------------------------
// Position
// -------------------------------------------------------------------------------------------------

/// Geocentric ecliptic coordinates and horizontal parallax of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonEclipticPosition {
    /// Degrees, `[0, 360)`
    pub longitude: Degree,
    pub latitude: Degree,
    pub horizontal_parallax: Degree,
}

/// Evaluate the periodic series of the Moon at a local civil time.
///
/// Arguments
/// ---------
/// * `lct`: the local civil time
///
/// Return
/// ------
/// * the true ecliptic longitude and latitude (without nutation) and the
///   equatorial horizontal parallax, in degrees
pub fn moon_longitude_latitude_parallax(lct: &LocalCivilTime) -> MoonEclipticPosition {
    let mean = MeanElements::at(lct);

    let longitude = unwind(mean.longitude + radians(mean.sine_series(&LONGITUDE_TERMS)));
    let latitude = radians(mean.sine_series(&LATITUDE_TERMS))
        * (1.0 - 0.0004664 * mean.node.cos() - 0.0000754 * mean.node_term.cos());
    let horizontal_parallax = MEAN_HORIZONTAL_PARALLAX + mean.cosine_series(&PARALLAX_TERMS);

    MoonEclipticPosition {
        longitude: degrees(longitude),
        latitude: degrees(latitude),
        horizontal_parallax,
    }
}

/// Elements of the lunar orbit at 2010 January 0.0
const APPROX_MEAN_LONGITUDE: Degree = 91.9293359879052;
const APPROX_PERIGEE_LONGITUDE: Degree = 130.143076320618;
const APPROX_NODE_LONGITUDE: Degree = 291.682546643194;
const APPROX_INCLINATION: Degree = 5.145396;

/// Position of the Moon from the 2010.0 mean elements and the five largest
/// inequalities (evection, equation of centre, annual equation, variation and the
/// correction for the Sun anomaly).
pub fn approximate_position_of_moon(
    lct: &LocalCivilTime,
) -> Result<EquatorialPosition, AstroError> {
    let greenwich_date = lct.greenwich_date();
    let days = greenwich_date.to_julian_date() - CivilDate::new(0.0, 1, 2010).to_julian_date()
        + lct.universal_time() / 24.0;

    let sun_longitude = sun_true_longitude(lct)?;
    let sun_anomaly = sun_mean_anomaly(lct);

    let mean_longitude = normalize_degrees(13.1763966 * days + APPROX_MEAN_LONGITUDE);
    let mean_anomaly =
        normalize_degrees(mean_longitude - 0.1114041 * days - APPROX_PERIGEE_LONGITUDE);
    let node = normalize_degrees(APPROX_NODE_LONGITUDE - 0.0529539 * days);

    let evection = 1.2739 * radians(2.0 * (mean_longitude - sun_longitude) - mean_anomaly).sin();
    let annual_equation = 0.1858 * sun_anomaly.sin();
    let a3 = 0.37 * sun_anomaly.sin();

    let corrected_anomaly = mean_anomaly + evection - annual_equation - a3;
    let centre = 6.2886 * radians(corrected_anomaly).sin();
    let a4 = 0.214 * (2.0 * radians(corrected_anomaly)).sin();
    let corrected_longitude = mean_longitude + evection + centre - annual_equation + a4;
    let variation = 0.6583 * (2.0 * radians(corrected_longitude - sun_longitude)).sin();
    let true_longitude = corrected_longitude + variation;
    let corrected_node = node - 0.16 * sun_anomaly.sin();

    let u = radians(true_longitude - corrected_node);
    let i = radians(APPROX_INCLINATION);
    let longitude = normalize_degrees(degrees((u.sin() * i.cos()).atan2(u.cos())) + corrected_node);
    let latitude = degrees((u.sin() * i.sin()).asin());

    Ok(ecliptic_to_equatorial(longitude, latitude, &greenwich_date).to_position())
}

/// Geocentric distance in kilometres for a horizontal parallax in degrees.
fn distance_from_parallax(horizontal_parallax: Degree) -> Kilometer {
    EARTH_RADIUS_KM / radians(horizontal_parallax).sin()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPrecisePosition {
    pub position: EquatorialPosition,
    /// Kilometres, rounded to the unit
    pub earth_moon_distance_km: Kilometer,
    /// Degrees, 6 places
    pub horizontal_parallax: Degree,
}

/// Apparent position of the Moon from the full periodic series, nutation included.
pub fn precise_position_of_moon(lct: &LocalCivilTime) -> MoonPrecisePosition {
    let greenwich_date = lct.greenwich_date();
    let moon = moon_longitude_latitude_parallax(lct);
    let longitude = moon.longitude + nutation_in_longitude(&greenwich_date);

    MoonPrecisePosition {
        position: ecliptic_to_equatorial(longitude, moon.latitude, &greenwich_date).to_position(),
        earth_moon_distance_km: round(distance_from_parallax(moon.horizontal_parallax), 0),
        horizontal_parallax: round(moon.horizontal_parallax, 6),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonDistanceDiameterParallax {
    /// Kilometres, rounded to the unit
    pub distance_km: Kilometer,
    pub angular_diameter: Dms,
    pub horizontal_parallax: Dms,
}

/// Earth–Moon distance, angular diameter and horizontal parallax.
pub fn moon_distance_diameter_parallax(lct: &LocalCivilTime) -> MoonDistanceDiameterParallax {
    let hp = moon_longitude_latitude_parallax(lct).horizontal_parallax;
    let distance = distance_from_parallax(hp);

    MoonDistanceDiameterParallax {
        distance_km: round(distance, 0),
        angular_diameter: Dms::from_decimal_degrees(
            MOON_MEAN_DISTANCE_KM * MOON_ANGULAR_DIAMETER / distance,
        ),
        horizontal_parallax: Dms::from_decimal_degrees(hp),
    }
}

/// Illuminated fraction of the lunar disk, rounded to 2 places.
pub fn moon_phase(lct: &LocalCivilTime) -> Result<f64, AstroError> {
    let moon = moon_longitude_latitude_parallax(lct);
    let sun_longitude = sun_true_longitude(lct)?;

    let elongation =
        (radians(moon.longitude - sun_longitude).cos() * radians(moon.latitude).cos()).acos();
    let moon_anomaly = MeanElements::at(lct).anomaly;
    let correction = 0.1468 * elongation.sin() * (1.0 - 0.0549 * moon_anomaly.sin())
        / (1.0 - 0.0167 * sun_mean_anomaly(lct).sin());
    let phase_angle = std::f64::consts::PI - elongation - radians(correction);

    Ok(round((1.0 + phase_angle.cos()) / 2.0, 2))
}

// -------------------------------------------------------------------------------------------------
// New and full Moon
// -------------------------------------------------------------------------------------------------

/// Julian date of the lunation `k` (integer for new Moon, half integer for full
/// Moon), split into its integer and fractional parts to keep precision.
fn lunation_julian_date(k: f64) -> (f64, f64) {
    let t = k / 1236.85;
    let t2 = t * t;
    let mean = 29.53 * k;
    let c = radians(166.56 + (132.87 - 0.009173 * t) * t);
    let mut fraction =
        0.00058868 * k + (0.0001178 - 0.000000155 * t) * t2 + 0.00033 * c.sin() + 0.75933;

    let argument = |period: f64, base: Degree| base + 360.0 * floor_mod(k / period, 1.0);
    let sun_anomaly = radians(normalize_degrees(
        argument(12.36886, 359.2242) - (0.0000333 + 0.00000347 * t) * t2,
    ));
    let moon_anomaly = radians(normalize_degrees(
        argument(0.9330851, 306.0253) + (0.0107306 + 0.00001236 * t) * t2,
    ));
    let latitude_argument = radians(normalize_degrees(
        argument(0.9214926, 21.2964) - (0.0016528 + 0.00000239 * t) * t2,
    ));

    let (m, mp, f) = (sun_anomaly, moon_anomaly, latitude_argument);
    let correction = (0.1734 - 0.000393 * t) * m.sin() + 0.0021 * (2.0 * m).sin()
        - 0.4068 * mp.sin()
        + 0.0161 * (2.0 * mp).sin()
        - 0.0004 * (3.0 * mp).sin()
        + 0.0104 * (2.0 * f).sin()
        - 0.0051 * (m + mp).sin()
        - 0.0074 * (m - mp).sin()
        + 0.0004 * (2.0 * f + m).sin()
        - 0.0004 * (2.0 * f - m).sin()
        - 0.0006 * (2.0 * f + mp).sin()
        + 0.001 * (2.0 * f - mp).sin()
        + 0.0005 * (m + 2.0 * mp).sin();

    let whole = mean.floor();
    fraction += correction + (mean - whole);
    let carry = fraction.floor();
    (whole + carry, fraction - carry)
}

/// Local time and date of a lunar phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarPhaseEvent {
    /// Rounded to the minute
    pub local_time: HoursMinutes,
    pub local_date: CivilDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewMoonFullMoon {
    pub new_moon: LunarPhaseEvent,
    pub full_moon: LunarPhaseEvent,
}

fn lunar_phase_event(k: f64, zone: TimeZone) -> LunarPhaseEvent {
    let (whole, fraction) = lunation_julian_date(k);
    let event = CivilDate::from_julian_date(whole + J1900 + fraction);
    let ut = 24.0 * (event.day - event.day.floor());
    let greenwich_date = event.at_midnight();

    let local_time = universal_time_to_local_decimal_hours(ut, zone, &greenwich_date);
    LunarPhaseEvent {
        local_time: HoursMinutes::from_decimal_hours(local_time + HALF_MINUTE),
        local_date: universal_time_to_local_civil_time(ut, zone, &greenwich_date).date,
    }
}

/// New Moon and full Moon of the lunation containing a local date.
///
/// Arguments
/// ---------
/// * `local_date`: the local calendar date
/// * `zone`: the local time zone, also used for the results
///
/// Return
/// ------
/// * the local time and date of the new Moon and the following full Moon
pub fn times_of_new_moon_and_full_moon(local_date: &CivilDate, zone: TimeZone) -> NewMoonFullMoon {
    let noon = LocalCivilTime::new(Hms::new(12.0, 0.0, 0.0), zone, *local_date);
    let greenwich_date = noon.greenwich_date();
    let year = greenwich_date.year;

    let start_of_year = CivilDate::new(0.0, 1, year).to_julian_date() - J1900;
    let day = greenwich_date.to_julian_date() - J1900;
    let k = ((year as f64 - 1900.0 + (day - start_of_year) / 365.0) * 12.3685 + 0.5).floor();

    NewMoonFullMoon {
        new_moon: lunar_phase_event(k, zone),
        full_moon: lunar_phase_event(k + 0.5, zone),
    }
}
