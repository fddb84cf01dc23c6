use orbital_engine::time::{CivilDate, LocalCivilTime};

/// 0h UT on a Greenwich date.
pub fn midnight(day: f64, month: u32, year: i32) -> LocalCivilTime {
    LocalCivilTime::utc_midnight(CivilDate::new(day, month, year))
}

/// Absolute difference of two angles in degrees, wrapped to `[0, 180]`.
#[inline]
pub fn angle_abs_diff(a: f64, b: f64) -> f64 {
    let mut d = (a - b) % 360.0;
    if d > 180.0 {
        d -= 360.0;
    }
    if d < -180.0 {
        d += 360.0;
    }
    d.abs()
}
