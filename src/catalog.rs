//! Built-in orbital element tables.
//!
//! The [`Catalog`] is an immutable value: build it once with `Catalog::default()` and
//! pass it by reference to the calculators. Element records derive serde so that a
//! caller can persist or load alternative tables.
use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::constants::{ArcSec, AstronomicalUnit, Degree};
use crate::time::CivilDate;

/// Planet elements of the approximate model, referred to the epoch 2010.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetElements {
    pub name: String,
    /// Orbital period in tropical years
    pub period: f64,
    /// Mean longitude at the epoch
    pub longitude_at_epoch: Degree,
    pub perihelion_longitude: Degree,
    pub eccentricity: f64,
    pub semi_major_axis: AstronomicalUnit,
    pub inclination: Degree,
    pub node_longitude: Degree,
    /// Angular diameter seen from 1 AU
    pub angular_diameter: ArcSec,
    /// Visual magnitude at 1 AU from both the Sun and the Earth
    pub magnitude: f64,
}

/// Polynomial in Julian centuries since B1900.0, `c0 + c1·T + c2·T² + c3·T³`.
pub type CenturyPolynomial = [f64; 4];

/// Planet elements of the precise model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecisePlanetElements {
    pub name: String,
    /// Mean longitude; the `T` coefficient counts revolutions per century
    pub mean_longitude: CenturyPolynomial,
    pub perihelion_longitude: CenturyPolynomial,
    pub eccentricity: CenturyPolynomial,
    pub inclination: CenturyPolynomial,
    pub node_longitude: CenturyPolynomial,
    pub semi_major_axis: AstronomicalUnit,
    pub angular_diameter: ArcSec,
    pub magnitude: f64,
}

/// Periodic comet on an elliptical orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CometElements {
    pub name: String,
    /// Epoch of perihelion as a decimal year
    pub perihelion_epoch: f64,
    pub perihelion_longitude: Degree,
    pub node_longitude: Degree,
    /// Period in years
    pub period: f64,
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Degree,
}

/// Comet on a parabolic orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParabolicCometElements {
    pub name: String,
    /// Date of perihelion passage, the day carries the fraction
    pub perihelion_date: CivilDate,
    pub argument_of_perihelion: Degree,
    pub node_longitude: Degree,
    pub perihelion_distance: AstronomicalUnit,
    pub inclination: Degree,
}

/// Visual binary, relative orbit of the companion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryStarElements {
    pub name: String,
    /// Period in years
    pub period: f64,
    /// Epoch of periastron as a decimal year
    pub periastron_epoch: f64,
    pub periastron_longitude: Degree,
    pub eccentricity: f64,
    pub semi_major_axis: ArcSec,
    pub inclination: Degree,
    pub node_position_angle: Degree,
}

/// Immutable lookup of orbital elements by body name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Elements of the Earth orbit in the approximate model
    pub earth: PlanetElements,
    pub planets: Vec<PlanetElements>,
    pub precise_planets: Vec<PrecisePlanetElements>,
    pub comets: Vec<CometElements>,
    pub parabolic_comets: Vec<ParabolicCometElements>,
    pub binary_stars: Vec<BinaryStarElements>,
}

fn find<'a, T>(
    items: &'a [T],
    name: &str,
    name_of: impl Fn(&T) -> &str,
) -> Result<&'a T, AstroError> {
    items
        .iter()
        .find(|item| name_of(*item) == name)
        .ok_or_else(|| AstroError::UnknownBody(name.to_string()))
}

impl Catalog {
    /// Approximate-model elements of a planet (the Earth is not a target).
    pub fn planet(&self, name: &str) -> Result<&PlanetElements, AstroError> {
        find(&self.planets, name, |p| p.name.as_str())
    }

    pub fn precise_planet(&self, name: &str) -> Result<&PrecisePlanetElements, AstroError> {
        find(&self.precise_planets, name, |p| p.name.as_str())
    }

    pub fn comet(&self, name: &str) -> Result<&CometElements, AstroError> {
        find(&self.comets, name, |c| c.name.as_str())
    }

    pub fn parabolic_comet(&self, name: &str) -> Result<&ParabolicCometElements, AstroError> {
        find(&self.parabolic_comets, name, |c| c.name.as_str())
    }

    pub fn binary_star(&self, name: &str) -> Result<&BinaryStarElements, AstroError> {
        find(&self.binary_stars, name, |b| b.name.as_str())
    }
}

// -------------------------------------------------------------------------------------------------
// Built-in tables
// -------------------------------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn planet(
    name: &str,
    period: f64,
    longitude_at_epoch: Degree,
    perihelion_longitude: Degree,
    eccentricity: f64,
    semi_major_axis: AstronomicalUnit,
    inclination: Degree,
    node_longitude: Degree,
    angular_diameter: ArcSec,
    magnitude: f64,
) -> PlanetElements {
    PlanetElements {
        name: name.to_string(),
        period,
        longitude_at_epoch,
        perihelion_longitude,
        eccentricity,
        semi_major_axis,
        inclination,
        node_longitude,
        angular_diameter,
        magnitude,
    }
}

#[allow(clippy::too_many_arguments)]
fn precise_planet(
    name: &str,
    mean_longitude: CenturyPolynomial,
    perihelion_longitude: CenturyPolynomial,
    eccentricity: CenturyPolynomial,
    inclination: CenturyPolynomial,
    node_longitude: CenturyPolynomial,
    semi_major_axis: AstronomicalUnit,
    angular_diameter: ArcSec,
    magnitude: f64,
) -> PrecisePlanetElements {
    PrecisePlanetElements {
        name: name.to_string(),
        mean_longitude,
        perihelion_longitude,
        eccentricity,
        inclination,
        node_longitude,
        semi_major_axis,
        angular_diameter,
        magnitude,
    }
}

#[allow(clippy::too_many_arguments)]
fn comet(
    name: &str,
    perihelion_epoch: f64,
    perihelion_longitude: Degree,
    node_longitude: Degree,
    period: f64,
    semi_major_axis: AstronomicalUnit,
    eccentricity: f64,
    inclination: Degree,
) -> CometElements {
    CometElements {
        name: name.to_string(),
        perihelion_epoch,
        perihelion_longitude,
        node_longitude,
        period,
        semi_major_axis,
        eccentricity,
        inclination,
    }
}

#[rustfmt::skip]
fn default_planets() -> Vec<PlanetElements> {
    vec![
        planet("Mercury", 0.24085, 75.5671, 77.612, 0.205627, 0.387098, 7.0051, 48.449, 6.74, -0.42),
        planet("Venus", 0.615207, 272.30044, 131.54, 0.006812, 0.723329, 3.3947, 76.769, 16.92, -4.4),
        planet("Mars", 1.880765, 109.09646, 336.217, 0.093348, 1.523689, 1.8497, 49.632, 9.36, -1.52),
        planet("Jupiter", 11.857911, 337.917132, 14.6633, 0.048907, 5.20278, 1.3035, 100.595, 196.74, -9.4),
        planet("Saturn", 29.310579, 172.398316, 89.567, 0.053853, 9.51134, 2.4873, 113.752, 165.6, -8.88),
        planet("Uranus", 84.039492, 356.1354, 172.884833, 0.046321, 19.21814, 0.773059, 73.926961, 65.8, -7.19),
        planet("Neptune", 165.845392, 326.895127, 23.07, 0.010483, 30.1985, 1.7673, 131.879, 62.2, -6.87),
    ]
}

fn default_precise_planets() -> Vec<PrecisePlanetElements> {
    vec![
        precise_planet(
            "Mercury",
            [178.179078, 415.2057519, 0.0003011, 0.0],
            [75.899697, 1.5554889, 0.0002947, 0.0],
            [0.20561421, 0.00002046, -0.00000003, 0.0],
            [7.002881, 0.0018608, -0.0000183, 0.0],
            [47.145944, 1.1852083, 0.0001739, 0.0],
            0.3870986,
            6.74,
            -0.42,
        ),
        precise_planet(
            "Venus",
            [342.767053, 162.5533664, 0.0003097, 0.0],
            [130.163833, 1.4080361, -0.0009764, 0.0],
            [0.00682069, -0.00004774, 0.000000091, 0.0],
            [3.393631, 0.0010058, -0.000001, 0.0],
            [75.779647, 0.89985, 0.00041, 0.0],
            0.7233316,
            16.92,
            -4.4,
        ),
        precise_planet(
            "Mars",
            [293.737334, 53.17137642, 0.0003107, 0.0],
            [334.218203, 1.8407584, 0.0001299, -0.00000119],
            [0.0933129, 0.000092064, -0.000000077, 0.0],
            [1.850333, -0.000675, 0.0000126, 0.0],
            [48.786442, 0.7709917, -0.0000014, -0.00000533],
            1.5236883,
            9.36,
            -1.52,
        ),
        precise_planet(
            "Jupiter",
            [238.049257, 8.434172183, 0.0003347, -0.00000165],
            [12.720972, 1.6099617, 0.00105627, -0.00000343],
            [0.04833475, 0.00016418, -0.0000004676, -0.0000000017],
            [1.308736, -0.0056961, 0.0000039, 0.0],
            [99.443414, 1.01053, 0.00035222, -0.00000851],
            5.202561,
            196.74,
            -9.4,
        ),
        precise_planet(
            "Saturn",
            [266.564377, 3.398638567, 0.0003245, -0.0000058],
            [91.098214, 1.9584158, 0.00082636, 0.00000461],
            [0.05589232, -0.0003455, -0.000000728, 0.00000000074],
            [2.492519, -0.0039189, -0.00001549, 0.00000004],
            [112.790414, 0.8731951, -0.00015218, -0.00000531],
            9.554747,
            165.6,
            -8.88,
        ),
        precise_planet(
            "Uranus",
            [244.19747, 1.194065406, 0.000316, -0.0000006],
            [171.548692, 1.4844328, 0.0002372, -0.00000061],
            [0.0463444, -0.00002658, 0.000000077, 0.0],
            [0.772464, 0.0006253, 0.0000395, 0.0],
            [73.477111, 0.4986678, 0.0013117, 0.0],
            19.21814,
            65.8,
            -7.19,
        ),
        precise_planet(
            "Neptune",
            [84.457994, 0.6107942056, 0.0003205, -0.0000006],
            [46.727364, 1.4245744, 0.00039082, -0.000000605],
            [0.00899704, 0.00000633, -0.000000002, 0.0],
            [1.779242, -0.0095436, -0.0000091, 0.0],
            [130.681389, 1.098935, 0.00024987, -0.000004718],
            30.10957,
            62.2,
            -6.87,
        ),
    ]
}

fn default_comets() -> Vec<CometElements> {
    vec![
        comet("Encke", 1974.32, 160.1, 334.2, 3.3, 2.21, 0.85, 12.0),
        comet("Temple 2", 1972.87, 310.2, 119.3, 5.26, 3.02, 0.55, 12.5),
        comet("Haneda-Campos", 1978.77, 12.02, 131.7, 5.37, 3.07, 0.64, 5.81),
        comet("Schwassmann-Wachmann 2", 1974.7, 123.3, 126.0, 6.51, 3.49, 0.39, 3.7),
        comet("Borrelly", 1974.36, 67.8, 75.1, 6.76, 3.58, 0.63, 30.2),
        comet("Whipple", 1970.77, 18.2, 188.4, 7.47, 3.82, 0.35, 10.2),
        comet("Oterma", 1958.44, 150.0, 155.1, 7.88, 3.96, 0.14, 4.0),
        comet("Schaumasse", 1960.29, 138.1, 86.2, 8.18, 4.05, 0.71, 12.0),
        comet("Comas Sola", 1969.83, 102.9, 62.8, 8.55, 4.18, 0.58, 13.4),
        comet("Schwassmann-Wachmann 1", 1974.12, 334.1, 319.6, 15.03, 6.09, 0.11, 9.7),
        comet("Neujmin 1", 1966.94, 334.0, 347.2, 17.93, 6.86, 0.78, 15.0),
        comet("Crommelin", 1956.82, 86.4, 250.4, 27.89, 9.17, 0.92, 28.9),
        comet("Olbers", 1956.46, 150.0, 85.4, 69.47, 16.84, 0.93, 44.6),
        comet("Pons-Brooks", 1954.39, 94.2, 255.2, 70.98, 17.2, 0.96, 74.2),
        comet("Halley", 1986.112, 170.011, 58.154, 76.0081, 17.9435, 0.9673, 162.2384),
    ]
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            earth: planet(
                "Earth", 0.999996, 99.556772, 103.2055, 0.016671, 0.999985, 0.0, 0.0, 0.0, 0.0,
            ),
            planets: default_planets(),
            precise_planets: default_precise_planets(),
            comets: default_comets(),
            parabolic_comets: vec![ParabolicCometElements {
                name: "Kohler".to_string(),
                perihelion_date: CivilDate::new(10.5659, 11, 1977),
                argument_of_perihelion: 163.4799,
                node_longitude: 181.8175,
                perihelion_distance: 0.990662,
                inclination: 48.7196,
            }],
            binary_stars: vec![BinaryStarElements {
                name: "eta-Cor".to_string(),
                period: 41.623,
                periastron_epoch: 1934.008,
                periastron_longitude: 219.907,
                eccentricity: 0.2763,
                semi_major_axis: 0.907,
                inclination: 59.025,
                node_position_angle: 23.717,
            }],
        }
    }
}

#[cfg(test)]
mod catalog_test {
    use super::*;

    #[test]
    fn test_lookup() {
        let catalog = Catalog::default();
        assert_eq!(catalog.planet("Jupiter").unwrap().semi_major_axis, 5.20278);
        assert_eq!(catalog.precise_planet("Mars").unwrap().semi_major_axis, 1.5236883);
        assert_eq!(catalog.comet("Halley").unwrap().eccentricity, 0.9673);
        assert_eq!(catalog.parabolic_comet("Kohler").unwrap().inclination, 48.7196);
        assert_eq!(catalog.binary_star("eta-Cor").unwrap().period, 41.623);
    }

    #[test]
    fn test_unknown_body() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.planet("Pluto"),
            Err(AstroError::UnknownBody("Pluto".to_string()))
        );
        // the Earth is the observer, not a target
        assert!(catalog.planet("Earth").is_err());
        assert!(catalog.comet("Kohler").is_err());
    }

    #[test]
    fn test_tables_cover_the_same_planets() {
        let catalog = Catalog::default();
        for p in &catalog.planets {
            assert!(catalog.precise_planet(&p.name).is_ok(), "{}", p.name);
        }
    }
}
