//! # Constants and type definitions
//!
//! This module centralizes the **numeric constants**, **epochs** and **type aliases**
//! shared by the time chain, the Kepler solver and the body calculators.
//!
//! ## Overview
//!
//! - Truncated conversion factors reproduced from the reference tables
//! - Julian date epochs used by the polynomial series
//! - Sidereal rate factors
//! - Unit aliases used in public signatures
//!
//! Several factors are *truncated* (`57.29577951`, `6.283185308`):
//! the published reference vectors were produced with them and rounding to
//! two decimals of an arcsecond is sensitive to the last digits.

// -------------------------------------------------------------------------------------------------
// Angular conversions
// -------------------------------------------------------------------------------------------------

/// 2π, full turn in radians
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Truncated full turn used when unwinding angles in radians
pub const UNWIND_TURN: f64 = 6.283185308;

/// Radians → degrees, truncated factor
pub const DEGRAD: f64 = 57.29577951;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Truncated π used by a few phase formulas
pub const PI_TRUNCATED: f64 = 3.141592654;

// -------------------------------------------------------------------------------------------------
// Epochs and time scales
// -------------------------------------------------------------------------------------------------

/// Julian date of J2000.0 (2000-01-01 12:00)
pub const J2000: f64 = 2_451_545.0;

/// Julian date of B1900.0 (1900-01-00 12:00)
pub const J1900: f64 = 2_415_020.0;

/// Days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Hours in a Julian century
pub const HOURS_PER_JULIAN_CENTURY: f64 = 876_600.0;

/// Days in a tropical year
pub const TROPICAL_YEAR: f64 = 365.242191;

/// Offset added to the Julian day number computation
pub const JD_OFFSET: f64 = 1_720_994.5;

/// Solar → sidereal rate
pub const SIDEREAL_RATE: f64 = 1.002737909;

/// Sidereal → solar rate
pub const SOLAR_RATE: f64 = 0.9972695663;

/// Half a minute in hours, added before truncating an event time to minutes
pub const HALF_MINUTE: f64 = 0.008333;

/// Below this UT (hours) two UTs share the same GST on a given date
pub const GST_AMBIGUITY_LIMIT: f64 = 0.065574;

// -------------------------------------------------------------------------------------------------
// Physical constants
// -------------------------------------------------------------------------------------------------

/// Semi-major axis of the Earth orbit in kilometers
pub const SUN_MEAN_DISTANCE_KM: f64 = 149_598_500.0;

/// Angular diameter of the Sun at 1 AU, in degrees
pub const SUN_ANGULAR_DIAMETER_AU: f64 = 0.533128;

/// Earth equatorial radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6_378.14;

/// Earth equatorial radius in meters
pub const EARTH_RADIUS_M: f64 = 6_378_160.0;

/// Polar / equatorial axis ratio of the Earth
pub const EARTH_AXIS_RATIO: f64 = 0.996647;

/// Semi-major axis of the Moon orbit in kilometers
pub const MOON_MEAN_DISTANCE_KM: f64 = 384_401.0;

/// Angular diameter of the Moon at its mean distance, in degrees
pub const MOON_ANGULAR_DIAMETER: f64 = 0.5181;

/// Light time for one AU, in hours
pub const LIGHT_TIME_AU_HOURS: f64 = 0.1386;

/// Light time for one AU, in days
pub const LIGHT_TIME_AU_DAYS: f64 = 0.005775518;

/// Constant of aberration in arcseconds
pub const ABERRATION_CONSTANT: f64 = 20.5;

/// Vertical shift of the Sun at rise and set (refraction + semi-diameter), degrees
pub const SUNRISE_VERTICAL_SHIFT: f64 = 0.8333333;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Time or right ascension in decimal hours
pub type Hour = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in meters
pub type Meter = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian date (days)
pub type JulianDate = f64;
