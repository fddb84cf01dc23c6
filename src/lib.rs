//! Practical astronomy: time scales, coordinate systems and the positions of the Sun,
//! the Moon, the planets, comets and binary stars.
//!
//! Angles are decimal degrees unless a type says otherwise, times of day are decimal
//! hours. Sexagesimal results are returned as [`conversion::Hms`] / [`conversion::Dms`].
pub mod astro_errors;
pub mod binary;
pub mod catalog;
pub mod comet;
pub mod constants;
pub mod conversion;
pub mod corrections;
pub mod earth_orientation;
pub mod kepler;
pub mod moon;
pub mod planet;
pub mod ref_system;
pub mod sun;
pub mod surface_coordinates;
pub mod time;
