//! Apparent relative orbit of visual binary stars.
use serde::{Deserialize, Serialize};

use crate::astro_errors::AstroError;
use crate::catalog::Catalog;
use crate::constants::{ArcSec, Degree, TROPICAL_YEAR};
use crate::conversion::{degrees, normalize_degrees, radians, round};
use crate::kepler::{eccentric_anomaly, true_anomaly_from_eccentric};
use crate::time::CivilDate;

/// Position of the companion relative to the primary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryStarOrbit {
    /// Degrees, north through east, 1 place
    pub position_angle: Degree,
    /// Arcseconds, 2 places
    pub separation: ArcSec,
}

/// Position angle and angular separation of a binary star.
///
/// Arguments
/// ---------
/// * `greenwich_date`: the date, the day may carry a fraction
/// * `name`: the binary, as named in the catalog
/// * `catalog`: the element tables
///
/// Return
/// ------
/// * the position angle and separation of the companion
/// * `AstroError::UnknownBody` if the catalog has no such binary
pub fn binary_star_orbit(
    greenwich_date: &CivilDate,
    name: &str,
    catalog: &Catalog,
) -> Result<BinaryStarOrbit, AstroError> {
    let binary = catalog.binary_star(name)?;
    let year = greenwich_date.year;

    let years_since_periastron = year as f64
        + (greenwich_date.to_julian_date() - CivilDate::new(0.0, 1, year).to_julian_date())
            / TROPICAL_YEAR
        - binary.periastron_epoch;
    let mean_anomaly = radians(normalize_degrees(360.0 * years_since_periastron / binary.period));

    let e = binary.eccentricity;
    let e_anom = eccentric_anomaly(mean_anomaly, e)?;
    let nu = true_anomaly_from_eccentric(e_anom, e);
    let radius = (1.0 - e * e_anom.cos()) * binary.semi_major_axis;

    let argument = nu + radians(binary.periastron_longitude);
    let projected =
        degrees((argument.sin() * radians(binary.inclination).cos()).atan2(argument.cos()));
    let position_angle = normalize_degrees(projected + binary.node_position_angle);
    let separation =
        radius * argument.cos() / radians(position_angle - binary.node_position_angle).cos();

    Ok(BinaryStarOrbit {
        position_angle: round(position_angle, 1),
        separation: round(separation, 2),
    })
}
