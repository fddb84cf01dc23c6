//! Positions and visual aspects of the major planets.
//!
//! Two models are available:
//! * the approximate model propagates circular-corrected 2010.0 elements from
//!   [`PlanetElements`],
//! * the precise model evaluates the secular [`PrecisePlanetElements`] polynomials,
//!   adds the main planetary perturbations and iterates three times on the light
//!   time.
use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::catalog::{Catalog, CenturyPolynomial, PlanetElements, PrecisePlanetElements};
use crate::constants::{
    ArcSec, AstronomicalUnit, Degree, Radian, DAYS_PER_JULIAN_CENTURY, HOURS_PER_JULIAN_CENTURY,
    J1900, LIGHT_TIME_AU_DAYS, LIGHT_TIME_AU_HOURS, TROPICAL_YEAR,
};
use crate::conversion::{degrees, normalize_degrees, radians, round, unwind, Hms};
use crate::kepler::true_anomaly;
use crate::ref_system::{ecliptic_to_equatorial, EquatorialPosition};
use crate::sun::{sun_distance_au, sun_mean_anomaly, sun_true_longitude};
use crate::time::{CivilDate, LocalCivilTime};

use std::f64::consts::PI;

// -------------------------------------------------------------------------------------------------
// Approximate model
// -------------------------------------------------------------------------------------------------

/// Heliocentric longitude (degrees) and radius vector (AU) of a planet,
/// `days` after 2010 January 0.0.
fn heliocentric_from_epoch_elements(
    elements: &PlanetElements,
    days: f64,
) -> (Degree, AstronomicalUnit) {
    let n = normalize_degrees(360.0 * days / (TROPICAL_YEAR * elements.period));
    let mean_anomaly = n + elements.longitude_at_epoch - elements.perihelion_longitude;
    let longitude = normalize_degrees(
        n + 360.0 * elements.eccentricity * radians(mean_anomaly).sin() / PI
            + elements.longitude_at_epoch,
    );
    let e = elements.eccentricity;
    let radius = elements.semi_major_axis * (1.0 - e * e)
        / (1.0 + e * radians(longitude - elements.perihelion_longitude).cos());
    (longitude, radius)
}

/// Position of a planet from its 2010.0 elements and the equation of centre.
///
/// Arguments
/// ---------
/// * `lct`: the local civil time
/// * `name`: the planet, as named in the catalog
/// * `catalog`: the element tables
///
/// Return
/// ------
/// * the geocentric right ascension and declination
/// * `AstroError::UnknownBody` if the catalog has no such planet
pub fn approximate_position_of_planet(
    lct: &LocalCivilTime,
    name: &str,
    catalog: &Catalog,
) -> Result<EquatorialPosition, AstroError> {
    let planet = catalog.planet(name)?;
    let greenwich_date = lct.greenwich_date();
    let days = CivilDate::new(
        greenwich_date.day + lct.universal_time() / 24.0,
        greenwich_date.month,
        greenwich_date.year,
    )
    .to_julian_date()
        - CivilDate::new(0.0, 1, 2010).to_julian_date();

    let (planet_longitude, planet_radius) = heliocentric_from_epoch_elements(planet, days);
    let (earth_longitude, earth_radius) = heliocentric_from_epoch_elements(&catalog.earth, days);

    // projection on the ecliptic
    let from_node = radians(planet_longitude - planet.node_longitude);
    let inclination = radians(planet.inclination);
    let psi = (from_node.sin() * inclination.sin()).asin();
    let projected_longitude = degrees(
        (from_node.sin() * inclination.cos()).atan2(from_node.cos()),
    ) + planet.node_longitude;
    let projected_radius = planet_radius * psi.cos();

    let elongation = radians(earth_longitude - projected_longitude);
    let longitude = if projected_radius < 1.0 {
        let a = (projected_radius * elongation.sin())
            .atan2(earth_radius - projected_radius * elongation.cos());
        180.0 + earth_longitude + degrees(a)
    } else {
        let a = (earth_radius * (-elongation).sin())
            .atan2(projected_radius - earth_radius * elongation.cos());
        degrees(a) + projected_longitude
    };
    let longitude = normalize_degrees(longitude);
    let latitude = degrees(
        (projected_radius * psi.tan() * radians(longitude - projected_longitude).sin()
            / (earth_radius * (-elongation).sin()))
        .atan(),
    );

    Ok(ecliptic_to_equatorial(longitude, latitude, &greenwich_date).to_position())
}

// -------------------------------------------------------------------------------------------------
// Precise model: elements and perturbations
// -------------------------------------------------------------------------------------------------

fn evaluate(poly: &CenturyPolynomial, t: f64) -> f64 {
    ((poly[3] * t + poly[2]) * t + poly[1]) * t + poly[0]
}

/// Osculating elements of the precise model at `T` centuries since B1900.0.
struct SecularElements {
    mean_longitude: Degree,
    /// Mean motion in degrees per day
    daily_motion: Degree,
    perihelion_longitude: Degree,
    eccentricity: f64,
    inclination: Degree,
    node_longitude: Degree,
    semi_major_axis: AstronomicalUnit,
}

impl SecularElements {
    fn at(elements: &PrecisePlanetElements, t: f64) -> Self {
        let l = &elements.mean_longitude;
        let revolutions = l[1] * t;
        let mean_longitude = normalize_degrees(
            l[0] + 360.0 * (revolutions - revolutions.floor()) + (l[3] * t + l[2]) * t * t,
        );
        SecularElements {
            mean_longitude,
            daily_motion: l[1] * 0.009856263 + (l[2] + l[3]) / DAYS_PER_JULIAN_CENTURY,
            perihelion_longitude: evaluate(&elements.perihelion_longitude, t),
            eccentricity: evaluate(&elements.eccentricity, t),
            inclination: evaluate(&elements.inclination, t),
            node_longitude: evaluate(&elements.node_longitude, t),
            semi_major_axis: elements.semi_major_axis,
        }
    }

    /// Mean anomaly at the emission time, `light_time` days before the instant.
    fn mean_anomaly(&self, light_time: f64) -> Radian {
        radians(self.mean_longitude - self.perihelion_longitude - light_time * self.daily_motion)
    }
}

/// Corrections to the elements and to the heliocentric position of a planet.
#[derive(Debug, Default, Clone, Copy)]
struct Perturbation {
    /// Heliocentric longitude, degrees
    longitude: Degree,
    /// Radius vector, AU
    radius: AstronomicalUnit,
    /// Mean longitude
    mean_longitude: Radian,
    eccentricity: f64,
    mean_anomaly: Radian,
    semi_major_axis: AstronomicalUnit,
    /// Heliocentric latitude
    latitude: Radian,
}

/// Mean anomalies of the perturbing planets.
struct PerturbingAnomalies {
    mercury: Radian,
    venus: Radian,
    mars: Radian,
    jupiter: Radian,
    sun: Radian,
}

fn mercury_perturbation(a: &PerturbingAnomalies) -> Perturbation {
    let (me, ve, ju) = (a.mercury, a.venus, a.jupiter);
    Perturbation {
        longitude: 0.00204 * (5.0 * ve - 2.0 * me + 0.21328).cos()
            + 0.00103 * (2.0 * ve - me - 2.8046).cos()
            + 0.00091 * (2.0 * ju - me - 0.64582).cos()
            + 0.00078 * (5.0 * ve - 3.0 * me + 0.17692).cos(),
        radius: 0.000007525 * (2.0 * ju - me + 0.925251).cos()
            + 0.000006802 * (5.0 * ve - 3.0 * me - 4.53642).cos()
            + 0.000005457 * (2.0 * ve - 2.0 * me - 1.24246).cos()
            + 0.000003569 * (5.0 * ve - me - 1.35699).cos(),
        ..Default::default()
    }
}

fn venus_perturbation(a: &PerturbingAnomalies, t: f64) -> Perturbation {
    let (ms, ve, ju) = (a.sun, a.venus, a.jupiter);
    let long_period = radians(0.00077 * (4.1406 + t * 2.6227).sin());
    Perturbation {
        longitude: 0.00313 * (2.0 * ms - 2.0 * ve - 2.587).cos()
            + 0.00198 * (3.0 * ms - 3.0 * ve + 0.044768).cos()
            + 0.00136 * (ms - ve - 2.0788).cos()
            + 0.00096 * (3.0 * ms - 2.0 * ve - 2.3721).cos()
            + 0.00082 * (ju - ve - 3.6318).cos(),
        radius: 0.000022501 * (2.0 * ms - 2.0 * ve - 1.01592).cos()
            + 0.000019045 * (3.0 * ms - 3.0 * ve + 1.61577).cos()
            + 0.000006887 * (ju - ve - 2.06106).cos()
            + 0.000005172 * (ms - ve - 0.508065).cos()
            + 0.00000362 * (5.0 * ms - 4.0 * ve - 1.81877).cos()
            + 0.000003283 * (4.0 * ms - 4.0 * ve + 1.10851).cos()
            + 0.000003074 * (2.0 * ju - 2.0 * ve - 0.962846).cos(),
        mean_longitude: long_period,
        mean_anomaly: long_period,
        ..Default::default()
    }
}

fn mars_perturbation(a: &PerturbingAnomalies) -> Perturbation {
    let (ms, ve, ma, ju) = (a.sun, a.venus, a.mars, a.jupiter);
    let great_inequality = 3.0 * ju - 8.0 * ma + 4.0 * ms;
    let long_period =
        radians(-(0.01133 * great_inequality.sin() + 0.00933 * great_inequality.cos()));
    Perturbation {
        longitude: 0.00705 * (ju - ma - 0.85448).cos()
            + 0.00607 * (2.0 * ju - ma - 3.2873).cos()
            + 0.00445 * (2.0 * ju - 2.0 * ma - 3.3492).cos()
            + 0.00388 * (ms - 2.0 * ma + 0.35771).cos()
            + 0.00238 * (ms - ma + 0.61256).cos()
            + 0.00204 * (2.0 * ms - 3.0 * ma + 2.7688).cos()
            + 0.00177 * (3.0 * ma - ve - 1.0053).cos()
            + 0.00136 * (2.0 * ms - 4.0 * ma + 2.6894).cos()
            + 0.00104 * (ju + 0.30749).cos(),
        radius: 0.000053227 * (ju - ma + 0.717864).cos()
            + 0.000050989 * (2.0 * ju - 2.0 * ma - 1.77997).cos()
            + 0.000038278 * (2.0 * ju - ma - 1.71617).cos()
            + 0.000015996 * (ms - ma - 0.969618).cos()
            + 0.000014764 * (2.0 * ms - 3.0 * ma + 1.19768).cos()
            + 0.000008966 * (ju - 2.0 * ma + 0.761225).cos()
            + 0.000007914 * (3.0 * ju - 2.0 * ma - 2.43887).cos()
            + 0.000007004 * (2.0 * ju - 3.0 * ma - 1.79573).cos()
            + 0.00000662 * (ms - 2.0 * ma + 1.97575).cos()
            + 0.00000493 * (3.0 * ju - 3.0 * ma - 1.33069).cos()
            + 0.000004693 * (3.0 * ms - 5.0 * ma + 3.32665).cos()
            + 0.000004571 * (2.0 * ms - 4.0 * ma + 4.27086).cos()
            + 0.000004409 * (3.0 * ju - ma - 2.02158).cos(),
        mean_longitude: long_period,
        mean_anomaly: long_period,
        ..Default::default()
    }
}

/// `sin(k·x)` and `cos(k·x)` for `k` in `0..6`.
fn harmonics(x: Radian) -> ([f64; 6], [f64; 6]) {
    (
        std::array::from_fn(|k| (k as f64 * x).sin()),
        std::array::from_fn(|k| (k as f64 * x).cos()),
    )
}

/// Long period arguments of the outer planets, shared by the four giants.
struct GiantArguments {
    /// Time parameter of the amplitudes, `T/5 + 0.1`
    j1: f64,
    jupiter: Radian,
    saturn: Radian,
    uranus: Radian,
    /// `5·Saturn - 2·Jupiter`, the great inequality
    great_inequality: Radian,
    /// `2·Jupiter - 6·Saturn + 3·Uranus`
    j6: Radian,
}

impl GiantArguments {
    fn at(t: f64) -> Self {
        let jupiter = unwind(4.14473 + 52.9691 * t);
        let saturn = unwind(4.641118 + 21.32991 * t);
        let uranus = unwind(4.250177 + 7.478172 * t);
        GiantArguments {
            j1: t / 5.0 + 0.1,
            jupiter,
            saturn,
            uranus,
            great_inequality: 5.0 * saturn - 2.0 * jupiter,
            j6: 2.0 * jupiter - 6.0 * saturn + 3.0 * uranus,
        }
    }
}

fn jupiter_perturbation(g: &GiantArguments, eccentricity: f64) -> Perturbation {
    let j1 = g.j1;
    let (s3, c3) = harmonics(g.saturn);
    let (s5, c5) = harmonics(g.great_inequality);
    let (s7, c7) = harmonics(g.saturn - g.jupiter);

    let qc = (0.331364 - (0.010281 + 0.004692 * j1) * j1) * s5[1]
        + (0.003228 - (0.064436 - 0.002075 * j1) * j1) * c5[1]
        - (0.003083 + (0.000275 - 0.000489 * j1) * j1) * s5[2]
        + 0.002472 * g.j6.sin()
        + 0.013619 * s7[1]
        + 0.018472 * s7[2]
        + 0.006717 * s7[3]
        + 0.002775 * s7[4]
        + 0.006417 * s7[2] * s3[1]
        + (0.007275 - 0.001253 * j1) * s7[1] * s3[1]
        + 0.002439 * s7[3] * s3[1]
        - (0.035681 + 0.001208 * j1) * s7[1] * c3[1]
        - 0.003767 * c7[2] * s3[1]
        - (0.033839 + 0.001125 * j1) * c7[1] * s3[1]
        - 0.004261 * s7[2] * c3[1]
        + (0.001161 * j1 - 0.006333) * c7[1] * c3[1]
        + 0.002178 * c3[1]
        - 0.006675 * c7[2] * c3[1]
        - 0.002664 * c7[3] * c3[1]
        - 0.002572 * s7[1] * s3[2]
        - 0.003567 * s7[2] * s3[2]
        + 0.002094 * c7[1] * c3[2]
        + 0.003342 * c7[2] * c3[2];
    let qc = radians(qc);

    let qd = (3606.0 + (130.0 - 43.0 * j1) * j1) * s5[1] + (1289.0 - 580.0 * j1) * c5[1]
        - 6764.0 * s7[1] * s3[1]
        - 1110.0 * s7[2] * s3[1]
        - 224.0 * s7[3] * s3[1]
        - 204.0 * s3[1]
        + (1284.0 + 116.0 * j1) * c7[1] * s3[1]
        + 188.0 * c7[2] * s3[1]
        + (1460.0 + 130.0 * j1) * s7[1] * c3[1]
        + 224.0 * s7[2] * c3[1]
        - 817.0 * c3[1]
        + 6074.0 * c3[1] * c7[1]
        + 992.0 * c7[2] * c3[1]
        + 508.0 * c7[3] * c3[1]
        + 230.0 * c7[4] * c3[1]
        + 108.0 * c7[5] * c3[1]
        - (956.0 + 73.0 * j1) * s7[1] * s3[2]
        + 448.0 * s7[2] * s3[2]
        + 137.0 * s7[3] * s3[2]
        + (108.0 * j1 - 997.0) * c7[1] * s3[2]
        + 480.0 * c7[2] * s3[2]
        + 148.0 * c7[3] * s3[2]
        + (99.0 * j1 - 956.0) * s7[1] * c3[2]
        + 490.0 * s7[2] * c3[2]
        + 158.0 * s7[3] * c3[2]
        + 179.0 * c3[2]
        + (1024.0 + 75.0 * j1) * c7[1] * c3[2]
        - 437.0 * c7[2] * c3[2]
        - 132.0 * c7[3] * c3[2];

    let vk = (0.007192 - 0.003147 * j1) * s5[1] - 0.004344 * s3[1]
        + (j1 * (0.000197 * j1 - 0.000675) - 0.020428) * c5[1]
        + 0.034036 * c7[1] * s3[1]
        + (0.007269 + 0.000672 * j1) * s7[1] * s3[1]
        + 0.005614 * c7[2] * s3[1]
        + 0.002964 * c7[3] * s3[1]
        + 0.037761 * s7[1] * c3[1]
        + 0.006158 * s7[2] * c3[1]
        - 0.006603 * c7[1] * c3[1]
        - 0.005356 * s7[1] * s3[2]
        + 0.002722 * s7[2] * s3[2]
        + 0.004483 * c7[1] * s3[2]
        - 0.002642 * c7[2] * s3[2]
        + 0.004403 * s7[1] * c3[2]
        - 0.002536 * s7[2] * c3[2]
        + 0.005547 * c7[1] * c3[2]
        - 0.002689 * c7[2] * c3[2];

    let qf = 205.0 * c7[1] - 263.0 * c5[1] + 693.0 * c7[2] + 312.0 * c7[3] + 147.0 * c7[4]
        + 299.0 * s7[1] * s3[1]
        + 181.0 * c7[2] * s3[1]
        + 204.0 * s7[2] * c3[1]
        + 111.0 * s7[3] * c3[1]
        - 337.0 * c7[1] * c3[1]
        - 111.0 * c7[2] * c3[1];

    Perturbation {
        mean_longitude: qc,
        eccentricity: qd * 1e-7,
        mean_anomaly: qc - radians(vk) / eccentricity,
        semi_major_axis: qf * 1e-6,
        ..Default::default()
    }
}

fn saturn_perturbation(g: &GiantArguments, eccentricity: f64) -> Perturbation {
    let j1 = g.j1;
    let (s3, c3) = harmonics(g.saturn);
    let (s5, c5) = harmonics(g.great_inequality);
    let (s7, c7) = harmonics(g.saturn - g.jupiter);
    let (s8, c8) = harmonics(g.uranus - g.saturn);

    let qc = 0.007581 * s5[2] - 0.007986 * g.j6.sin() - 0.148811 * s7[1]
        - (0.814181 - (0.01815 - 0.016714 * j1) * j1) * s5[1]
        - (0.010497 - (0.160906 - 0.0041 * j1) * j1) * c5[1]
        - 0.015208 * s7[3]
        - 0.006339 * s7[4]
        - 0.006244 * s3[1]
        - 0.0165 * s7[2] * s3[1]
        - 0.040786 * s7[2]
        + (0.008931 + 0.002728 * j1) * s7[1] * s3[1]
        - 0.005775 * s7[3] * s3[1]
        + (0.081344 + 0.003206 * j1) * c7[1] * s3[1]
        + 0.015019 * c7[2] * s3[1]
        + (0.085581 + 0.002494 * j1) * s7[1] * c3[1]
        + 0.014394 * c7[2] * c3[1]
        + (0.025328 - 0.003117 * j1) * c7[1] * c3[1]
        + 0.006319 * c7[3] * c3[1]
        + 0.006369 * s7[1] * s3[2]
        + 0.009156 * s7[2] * s3[2]
        + 0.007525 * s8[3] * s3[2]
        - 0.005236 * c7[1] * c3[2]
        - 0.007736 * c7[2] * c3[2]
        - 0.007528 * c8[3] * c3[2];
    let qc = radians(qc);

    let qd = (-7927.0 + (2548.0 + 91.0 * j1) * j1) * s5[1]
        + (13381.0 + (1226.0 - 253.0 * j1) * j1) * c5[1]
        + (248.0 - 121.0 * j1) * s5[2]
        - (305.0 + 91.0 * j1) * c5[2]
        + 412.0 * s7[2]
        + 12415.0 * s3[1]
        + (390.0 - 617.0 * j1) * s7[1] * s3[1]
        + (165.0 - 204.0 * j1) * s7[2] * s3[1]
        + 26599.0 * c7[1] * s3[1]
        - 4687.0 * c7[2] * s3[1]
        - 1870.0 * c7[3] * s3[1]
        - 821.0 * c7[4] * s3[1]
        - 377.0 * c7[5] * s3[1]
        + 497.0 * c8[2] * s3[1]
        + (163.0 - 611.0 * j1) * c3[1]
        - 12696.0 * s7[1] * c3[1]
        - 4200.0 * s7[2] * c3[1]
        - 1503.0 * s7[3] * c3[1]
        - 619.0 * s7[4] * c3[1]
        - 268.0 * s7[5] * c3[1]
        - (282.0 + 1306.0 * j1) * c7[1] * c3[1]
        + (-86.0 + 230.0 * j1) * c7[2] * c3[1]
        + 461.0 * s8[2] * c3[1]
        - 350.0 * s3[2]
        + (2211.0 - 286.0 * j1) * s7[1] * s3[2]
        - 2208.0 * s7[2] * s3[2]
        - 568.0 * s7[3] * s3[2]
        - 346.0 * s7[4] * s3[2]
        - (2780.0 + 222.0 * j1) * c7[1] * s3[2]
        + (2022.0 + 263.0 * j1) * c7[2] * s3[2]
        + 248.0 * c7[3] * s3[2]
        + 242.0 * s8[3] * s3[2]
        + 467.0 * c8[3] * s3[2]
        - 490.0 * c3[2]
        - (2842.0 + 279.0 * j1) * s7[1] * c3[2]
        + (128.0 + 226.0 * j1) * s7[2] * c3[2]
        + 224.0 * s7[3] * c3[2]
        + (-1594.0 + 282.0 * j1) * c7[1] * c3[2]
        + (2162.0 - 207.0 * j1) * c7[2] * c3[2]
        + 561.0 * c7[3] * c3[2]
        + 343.0 * c7[4] * c3[2]
        + 469.0 * s8[3] * c3[2]
        - 242.0 * c8[3] * c3[2]
        - 205.0 * s7[1] * s3[3]
        + 262.0 * s7[3] * s3[3]
        + 208.0 * c7[1] * c3[3]
        - 271.0 * c7[3] * c3[3]
        - 382.0 * c7[3] * s3[4]
        - 376.0 * s7[3] * c3[4];

    let vk = (0.077108 + (0.007186 - 0.001533 * j1) * j1) * s5[1] - 0.007075 * s7[1]
        + (0.045803 - (0.014766 + 0.000536 * j1) * j1) * c5[1]
        - 0.072586 * c3[1]
        - 0.075825 * s7[1] * s3[1]
        - 0.024839 * s7[2] * s3[1]
        - 0.008631 * s7[3] * s3[1]
        - 0.150383 * c7[1] * c3[1]
        + 0.026897 * c7[2] * c3[1]
        + 0.010053 * c7[3] * c3[1]
        - (0.013597 + 0.001719 * j1) * s7[1] * s3[2]
        + 0.011981 * s7[2] * c3[2]
        - (0.007742 - 0.001517 * j1) * c7[1] * s3[2]
        + (0.013586 - 0.001375 * j1) * c7[2] * s3[2]
        - (0.013667 - 0.001239 * j1) * s7[1] * c3[2]
        + (0.014861 + 0.001136 * j1) * c7[1] * c3[2]
        - (0.013064 + 0.001628 * j1) * c7[2] * c3[2];

    let qf = 572.0 * s5[1] - 1590.0 * s7[2] * c3[1] + 2933.0 * c5[1] - 647.0 * s7[3] * c3[1]
        + 33629.0 * c7[1]
        - 344.0 * s7[4] * c3[1]
        - 3081.0 * c7[2]
        + 2885.0 * c7[1] * c3[1]
        - 1423.0 * c7[3]
        + (2172.0 + 102.0 * j1) * c7[2] * c3[1]
        - 671.0 * c7[4]
        + 296.0 * c7[3] * c3[1]
        - 320.0 * c7[5]
        - 267.0 * s7[2] * s3[2]
        + 1098.0 * s3[1]
        - 778.0 * c7[1] * s3[2]
        - 2812.0 * s7[1] * s3[1]
        + 495.0 * c7[2] * s3[2]
        + 688.0 * s7[2] * s3[1]
        + 250.0 * c7[3] * s3[2]
        - 393.0 * s7[3] * s3[1]
        - 856.0 * s7[1] * c3[2]
        - 228.0 * s7[4] * s3[1]
        + 441.0 * s7[2] * c3[2]
        + 2138.0 * c7[1] * s3[1]
        + 296.0 * c7[2] * c3[2]
        - 999.0 * c7[2] * s3[1]
        + 211.0 * c7[3] * c3[2]
        - 642.0 * c7[3] * s3[1]
        - 427.0 * s7[1] * s3[3]
        - 325.0 * c7[4] * s3[1]
        + 398.0 * s7[3] * s3[3]
        - 890.0 * c3[1]
        + 344.0 * c7[1] * c3[3]
        + 2206.0 * s7[1] * c3[1]
        - 427.0 * c7[3] * c3[3];

    let qg = 0.000747 * c7[1] * s3[1]
        + 0.001069 * c7[1] * c3[1]
        + 0.002108 * s7[2] * s3[2]
        + 0.001261 * c7[2] * s3[2]
        + 0.001236 * s7[2] * c3[2]
        - 0.002075 * c7[2] * c3[2];

    Perturbation {
        mean_longitude: qc,
        eccentricity: qd * 1e-7,
        mean_anomaly: qc - radians(vk) / eccentricity,
        semi_major_axis: qf * 1e-6,
        latitude: radians(qg),
        ..Default::default()
    }
}

/// Neptune mean longitude argument and the Uranus–Neptune resonance `2·Neptune - Uranus`.
fn neptune_arguments(g: &GiantArguments, t: f64) -> (Radian, Radian) {
    let neptune = unwind(1.46205 + 3.81337 * t);
    (neptune, 2.0 * neptune - g.uranus)
}

fn uranus_perturbation(g: &GiantArguments, t: f64, eccentricity: f64) -> Perturbation {
    let j1 = g.j1;
    let (neptune, resonance) = neptune_arguments(g, t);
    let (sr, cr) = harmonics(resonance);
    let ja = g.uranus - g.jupiter;
    let jb = g.uranus - g.saturn;
    let jc = neptune - g.uranus;

    let qc = radians(
        (0.864319 - 0.001583 * j1) * sr[1]
            + (0.082222 - 0.006833 * j1) * cr[1]
            + 0.036017 * sr[2]
            - 0.003019 * cr[2]
            + 0.008122 * g.j6.sin(),
    );
    let vk = 0.120303 * sr[1] + 0.006197 * sr[2] + (0.019472 - 0.000947 * j1) * cr[1];
    let qd = (163.0 * j1 - 3349.0) * sr[1] + 20981.0 * cr[1] + 1311.0 * cr[2];

    let u = g.uranus;
    let qa = (-0.038581 + (0.002031 - 0.00191 * j1) * j1) * (u + jb).cos()
        + (0.010122 - 0.000988 * j1) * (u + jb).sin()
        + (0.034964 - (0.001038 - 0.000868 * j1) * j1) * (2.0 * u + jb).cos()
        + 0.005594 * (u + 3.0 * jc).sin()
        - 0.014808 * ja.sin()
        - 0.005794 * jb.sin()
        + 0.002347 * jb.cos()
        + 0.009872 * jc.sin()
        + 0.008803 * (2.0 * jc).sin()
        - 0.004308 * (3.0 * jc).sin();

    let (sin_jb, cos_jb) = jb.sin_cos();
    let (su, cu) = harmonics(u);
    let qg = (0.000458 * sin_jb - 0.000642 * cos_jb - 0.000517 * (4.0 * jc).cos()) * su[1]
        - (0.000347 * sin_jb + 0.000853 * cos_jb + 0.000517 * (4.0 * jb).sin()) * cu[1]
        + 0.000403 * ((2.0 * jc).cos() * su[2] + (2.0 * jc).sin() * cu[2]);

    let qb = -25948.0 + 4985.0 * ja.cos() - 1230.0 * cu[1] + 3354.0 * cos_jb
        + 904.0 * (2.0 * jc).cos()
        + 894.0 * (jc.cos() - (3.0 * jc).cos())
        + (5795.0 * cu[1] - 1165.0 * su[1] + 1388.0 * cu[2]) * sin_jb
        + (1351.0 * cu[1] + 5702.0 * su[1] + 1388.0 * su[2]) * cos_jb;

    Perturbation {
        longitude: qa,
        radius: qb * 1e-6,
        mean_longitude: qc,
        eccentricity: qd * 1e-7,
        mean_anomaly: qc - radians(vk) / eccentricity,
        semi_major_axis: -0.003825 * cr[1],
        latitude: radians(qg),
    }
}

fn neptune_perturbation(g: &GiantArguments, t: f64, eccentricity: f64) -> Perturbation {
    let j1 = g.j1;
    let (neptune, resonance) = neptune_arguments(g, t);
    let (sr, cr) = harmonics(resonance);
    let ja = neptune - g.jupiter;
    let jb = neptune - g.saturn;
    let jc = neptune - g.uranus;

    let qc = radians(
        (0.001089 * j1 - 0.589833) * sr[1] + (0.004658 * j1 - 0.056094) * cr[1]
            - 0.024286 * sr[2],
    );
    let vk = 0.024039 * sr[1] - 0.025303 * cr[1] + 0.006206 * sr[2] - 0.005992 * cr[2];
    let qd = 4389.0 * sr[1] + 1129.0 * sr[2] + 4262.0 * cr[1] + 1089.0 * cr[2];
    let qf = 8189.0 * cr[1] - 817.0 * sr[1] + 781.0 * cr[2];

    let (sin_2jc, cos_2jc) = (2.0 * jc).sin_cos();
    let (sin_n, cos_n) = neptune.sin_cos();
    let qa = -0.009556 * ja.sin() - 0.005178 * jb.sin() + 0.002572 * sin_2jc
        - 0.002972 * cos_2jc * sin_n
        - 0.002833 * sin_2jc * cos_n;
    let qg = 0.000336 * cos_2jc * sin_n + 0.000364 * sin_2jc * cos_n;
    let qb =
        -40596.0 + 4992.0 * ja.cos() + 2744.0 * jb.cos() + 2044.0 * jc.cos() + 1051.0 * cos_2jc;

    Perturbation {
        longitude: qa,
        radius: qb * 1e-6,
        mean_longitude: qc,
        eccentricity: qd * 1e-7,
        mean_anomaly: qc - radians(vk) / eccentricity,
        semi_major_axis: qf * 1e-6,
        latitude: radians(qg),
    }
}

/// Perturbations of a named planet; planets without a series get none.
fn perturbation_of(
    name: &str,
    t: f64,
    eccentricity: f64,
    anomalies: impl Fn() -> Result<PerturbingAnomalies, AstroError>,
) -> Result<Perturbation, AstroError> {
    let perturbation = match name {
        "Mercury" => mercury_perturbation(&anomalies()?),
        "Venus" => venus_perturbation(&anomalies()?, t),
        "Mars" => mars_perturbation(&anomalies()?),
        "Jupiter" => jupiter_perturbation(&GiantArguments::at(t), eccentricity),
        "Saturn" => saturn_perturbation(&GiantArguments::at(t), eccentricity),
        "Uranus" => uranus_perturbation(&GiantArguments::at(t), t, eccentricity),
        "Neptune" => neptune_perturbation(&GiantArguments::at(t), t, eccentricity),
        _ => Perturbation::default(),
    };
    Ok(perturbation)
}

// -------------------------------------------------------------------------------------------------
// Precise model: coordinates
// -------------------------------------------------------------------------------------------------

/// Geocentric and heliocentric coordinates of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetCoordinates {
    /// Geocentric ecliptic longitude, `[0, 360)`
    pub longitude: Degree,
    /// Geocentric ecliptic latitude, signed
    pub latitude: Degree,
    /// Distance from the Earth, AU
    pub distance: AstronomicalUnit,
    /// Heliocentric longitude in the orbit plane, `[0, 360)`
    pub heliocentric_longitude: Degree,
    /// Heliocentric ecliptic longitude
    pub heliocentric_ecliptic_longitude: Degree,
    pub heliocentric_latitude: Degree,
    pub radius_vector: AstronomicalUnit,
}

/// Heliocentric state of one light-time pass.
struct LightTimePass {
    orbit_longitude: Radian,
    /// Heliocentric ecliptic longitude
    longitude: Radian,
    latitude: Radian,
    radius: AstronomicalUnit,
    /// Distance from the Earth
    distance: AstronomicalUnit,
}

fn is_inferior(name: &str) -> bool {
    matches!(name, "Mercury" | "Venus")
}

/// Geocentric and heliocentric coordinates of a planet, precise model.
///
/// The position is evaluated three times, each pass moving the planet back by the
/// light time found at the previous one. Heliocentric quantities and the distance
/// are those of the first pass, the geocentric direction is the one of the last.
///
/// Arguments
/// ---------
/// * `lct`: the local civil time
/// * `name`: the planet name, as in the precise table of the catalog
/// * `catalog`: the element tables
///
/// Return
/// ------
/// * a [`PlanetCoordinates`]
/// * `AstroError::UnknownBody` if the planet, or one of its perturbers, is missing
pub fn planet_coordinates(
    lct: &LocalCivilTime,
    name: &str,
    catalog: &Catalog,
) -> Result<PlanetCoordinates, AstroError> {
    let target = catalog.precise_planet(name)?;
    let ut = lct.universal_time();
    let t = (lct.greenwich_date().to_julian_date() - J1900) / DAYS_PER_JULIAN_CENTURY
        + ut / HOURS_PER_JULIAN_CENTURY;

    let elements = SecularElements::at(target, t);
    let secular = |planet: &str| -> Result<SecularElements, AstroError> {
        Ok(SecularElements::at(catalog.precise_planet(planet)?, t))
    };

    let sun_anomaly = sun_mean_anomaly(lct);
    let sun_longitude = radians(sun_true_longitude(lct)?);
    let earth_radius = sun_distance_au(lct)?;
    let earth_longitude = sun_longitude + PI;

    // heliocentric position at the emission time, `light_time` days ago
    let pass = |light_time: f64| -> Result<LightTimePass, AstroError> {
        let anomalies = || -> Result<PerturbingAnomalies, AstroError> {
            Ok(PerturbingAnomalies {
                mercury: secular("Mercury")?.mean_anomaly(light_time),
                venus: secular("Venus")?.mean_anomaly(light_time),
                mars: secular("Mars")?.mean_anomaly(light_time),
                jupiter: secular("Jupiter")?.mean_anomaly(light_time),
                sun: sun_anomaly,
            })
        };
        let q = perturbation_of(name, t, elements.eccentricity, anomalies)?;

        let e = elements.eccentricity + q.eccentricity;
        let nu = true_anomaly(elements.mean_anomaly(light_time) + q.mean_anomaly, e)?;
        let radius = (elements.semi_major_axis + q.semi_major_axis) * (1.0 - e * e)
            / (1.0 + e * nu.cos())
            + q.radius;
        let orbit_longitude =
            nu + radians(elements.perihelion_longitude) + (q.mean_longitude - q.mean_anomaly);

        let node = radians(elements.node_longitude);
        let from_node = orbit_longitude - node;
        let inclination = radians(elements.inclination);
        let latitude = (from_node.sin() * inclination.sin()).asin() + q.latitude;
        let longitude = unwind(
            (from_node.sin() * inclination.cos()).atan2(from_node.cos())
                + node
                + radians(q.longitude),
        );
        let elongation = longitude - earth_longitude;
        let distance = (earth_radius * earth_radius + radius * radius
            - 2.0 * earth_radius * radius * latitude.cos() * elongation.cos())
        .sqrt();

        Ok(LightTimePass {
            orbit_longitude,
            longitude,
            latitude,
            radius,
            distance,
        })
    };

    let first = pass(0.0)?;
    let second = pass(first.distance * LIGHT_TIME_AU_DAYS)?;
    let last = pass(second.distance * LIGHT_TIME_AU_DAYS)?;

    let projected_radius = last.radius * last.latitude.cos();
    let (l1, l2) = (last.longitude - earth_longitude).sin_cos();
    let geo_longitude = if is_inferior(name) {
        unwind(
            (-projected_radius * l1 / (earth_radius - projected_radius * l2)).atan()
                + earth_longitude
                + PI,
        )
    } else {
        unwind((earth_radius * l1 / (projected_radius - earth_radius * l2)).atan() + last.longitude)
    };
    let geo_latitude = (projected_radius
        * last.latitude.tan()
        * (geo_longitude - last.longitude).sin()
        / (earth_radius * l1))
        .atan();

    Ok(PlanetCoordinates {
        longitude: degrees(geo_longitude),
        latitude: degrees(geo_latitude),
        distance: first.distance,
        heliocentric_longitude: normalize_degrees(degrees(first.orbit_longitude)),
        heliocentric_ecliptic_longitude: degrees(first.longitude),
        heliocentric_latitude: degrees(first.latitude),
        radius_vector: first.radius,
    })
}

/// Geocentric position of a planet, precise model.
pub fn precise_position_of_planet(
    lct: &LocalCivilTime,
    name: &str,
    catalog: &Catalog,
) -> Result<EquatorialPosition, AstroError> {
    let coordinates = planet_coordinates(lct, name, catalog)?;
    Ok(
        ecliptic_to_equatorial(coordinates.longitude, coordinates.latitude, &lct.greenwich_date())
            .to_position(),
    )
}

/// What an observer sees of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetVisualAspects {
    /// AU, 5 places
    pub distance: AstronomicalUnit,
    /// Arcseconds, 1 place
    pub angular_diameter: ArcSec,
    /// Illuminated fraction, 2 places
    pub phase: f64,
    pub light_time: Hms,
    /// Position angle of the bright limb, degrees, 1 place
    pub bright_limb_position_angle: Degree,
    /// 1 place
    pub magnitude: f64,
}

/// Distance, apparent size, phase, light time, bright limb and magnitude of a planet.
///
/// The planet is referred to the equator of the local date, the Sun to the equator
/// of the Greenwich date.
pub fn visual_aspects_of_planet(
    lct: &LocalCivilTime,
    name: &str,
    catalog: &Catalog,
) -> Result<PlanetVisualAspects, AstroError> {
    let elements = catalog.precise_planet(name)?;
    let coordinates = planet_coordinates(lct, name, catalog)?;
    let greenwich_date = lct.greenwich_date();

    let planet = ecliptic_to_equatorial(coordinates.longitude, coordinates.latitude, &lct.date);
    let sun = ecliptic_to_equatorial(sun_true_longitude(lct)?, 0.0, &greenwich_date);
    let (planet_ra, planet_dec) =
        (radians(planet.right_ascension * 15.0), radians(planet.declination));
    let (sun_ra, sun_dec) = (radians(sun.right_ascension * 15.0), radians(sun.declination));

    let phase =
        0.5 * (1.0 + radians(coordinates.longitude - coordinates.heliocentric_longitude).cos());
    let y = sun_dec.cos() * (sun_ra - planet_ra).sin();
    let x = planet_dec.cos() * sun_dec.sin()
        - planet_dec.sin() * sun_dec.cos() * (sun_ra - planet_ra).cos();
    let magnitude = 5.0 * (coordinates.radius_vector * coordinates.distance / phase.sqrt()).log10()
        + elements.magnitude;

    Ok(PlanetVisualAspects {
        distance: round(coordinates.distance, 5),
        angular_diameter: round(elements.angular_diameter / coordinates.distance, 1),
        phase: round(phase, 2),
        light_time: Hms::from_decimal_hours(coordinates.distance * LIGHT_TIME_AU_HOURS),
        bright_limb_position_angle: round(degrees(y.atan2(x)), 1),
        magnitude: round(magnitude, 1),
    })
}

#[cfg(test)]
mod planet_test {
    use super::*;
    use crate::conversion::Dms;
    use crate::time::TimeZone;

    fn november_2003() -> LocalCivilTime {
        LocalCivilTime::utc_midnight(CivilDate::new(22.0, 11, 2003))
    }

    #[test]
    fn test_approximate_position_jupiter() {
        let catalog = Catalog::default();
        let pos = approximate_position_of_planet(&november_2003(), "Jupiter", &catalog).unwrap();
        assert_eq!(pos.right_ascension, Hms::new(11.0, 11.0, 13.8));
        assert_eq!(pos.declination, Dms::new(6.0, 21.0, 25.1));
    }

    #[test]
    fn test_approximate_position_inner_planet() {
        let catalog = Catalog::default();
        let pos = approximate_position_of_planet(&november_2003(), "Venus", &catalog).unwrap();
        assert_eq!(pos.right_ascension, Hms::new(17.0, 32.0, 41.36));
        assert_eq!(pos.declination, Dms::new(-24.0, 22.0, 50.97));
    }

    #[test]
    fn test_unknown_planet() {
        let catalog = Catalog::default();
        assert_eq!(
            approximate_position_of_planet(&november_2003(), "Earth", &catalog),
            Err(AstroError::UnknownBody("Earth".to_string()))
        );
        assert_eq!(
            planet_coordinates(&november_2003(), "Pluto", &catalog),
            Err(AstroError::UnknownBody("Pluto".to_string()))
        );
    }

    #[test]
    fn test_planet_coordinates_jupiter() {
        let catalog = Catalog::default();
        let c = planet_coordinates(&november_2003(), "Jupiter", &catalog).unwrap();

        approx::assert_abs_diff_eq!(c.longitude, 166.118626, epsilon = 1e-5);
        approx::assert_abs_diff_eq!(c.latitude, 1.035218, epsilon = 1e-5);
        approx::assert_abs_diff_eq!(c.distance, 5.598285, epsilon = 1e-6);
        approx::assert_abs_diff_eq!(c.heliocentric_longitude, 156.034532, epsilon = 1e-5);
        approx::assert_abs_diff_eq!(c.heliocentric_ecliptic_longitude, 156.027621, epsilon = 1e-5);
        approx::assert_abs_diff_eq!(c.heliocentric_latitude, 1.074187, epsilon = 1e-5);
        approx::assert_abs_diff_eq!(c.radius_vector, 5.395337, epsilon = 1e-6);
    }

    #[test]
    fn test_precise_positions() {
        let catalog = Catalog::default();
        let expected = [
            ("Mercury", Hms::new(16.0, 52.0, 4.19), Dms::new(-24.0, 38.0, 44.04)),
            ("Venus", Hms::new(17.0, 32.0, 30.32), Dms::new(-24.0, 22.0, 40.11)),
            ("Mars", Hms::new(23.0, 12.0, 48.07), Dms::new(-6.0, 25.0, 38.04)),
            ("Jupiter", Hms::new(11.0, 10.0, 30.99), Dms::new(6.0, 25.0, 49.46)),
            ("Saturn", Hms::new(6.0, 54.0, 16.53), Dms::new(22.0, 7.0, 47.09)),
            ("Uranus", Hms::new(22.0, 5.0, 30.75), Dms::new(-12.0, 32.0, 23.5)),
            ("Neptune", Hms::new(20.0, 52.0, 29.5), Dms::new(-17.0, 34.0, 50.89)),
        ];

        for (name, ra, dec) in expected {
            let pos = precise_position_of_planet(&november_2003(), name, &catalog).unwrap();
            assert_eq!(pos.right_ascension, ra, "right ascension of {name}");
            assert_eq!(pos.declination, dec, "declination of {name}");
        }
    }

    #[test]
    fn test_visual_aspects_jupiter() {
        let catalog = Catalog::default();
        let v = visual_aspects_of_planet(&november_2003(), "Jupiter", &catalog).unwrap();

        assert_eq!(v.distance, 5.59829);
        assert_eq!(v.angular_diameter, 35.1);
        assert_eq!(v.phase, 0.99);
        assert_eq!(v.light_time, Hms::new(0.0, 46.0, 33.32));
        assert_eq!(v.bright_limb_position_angle, 113.2);
        assert_eq!(v.magnitude, -2.0);
    }

    #[test]
    fn test_visual_aspects_local_date_behind_greenwich() {
        // 19h on the 21st at UTC-5 is 0h UT on the 22nd
        let catalog = Catalog::default();
        let lct = LocalCivilTime::new(
            Hms::new(19.0, 0.0, 0.0),
            TimeZone::new(false, -5),
            CivilDate::new(21.0, 11, 2003),
        );
        let zoned = visual_aspects_of_planet(&lct, "Jupiter", &catalog).unwrap();
        let utc = visual_aspects_of_planet(&november_2003(), "Jupiter", &catalog).unwrap();
        assert_eq!(zoned, utc);
    }
}
