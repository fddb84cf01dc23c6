mod common;

use approx::assert_abs_diff_eq;
use common::midnight;
use orbital_engine::conversion::Hms;
use orbital_engine::ref_system::{
    ecliptic_to_equatorial, equatorial_to_ecliptic, equatorial_to_horizon, horizon_to_equatorial,
};
use orbital_engine::sun::precise_position_of_sun;
use orbital_engine::time::{
    greenwich_sidereal_time_to_universal_time, julian_date_to_civil_date,
    local_civil_time_to_universal_time, universal_time_to_greenwich_sidereal_time,
    CivilDate, LocalCivilTime, TimeConversionStatus, TimeZone,
};

#[test]
fn julian_dates_round_trip_through_the_calendar() {
    for (day, month, year) in [(1.5, 1, 2000), (29.0, 2, 1600), (15.25, 10, 1582), (4.0, 7, -44)] {
        let date = CivilDate::new(day, month, year);
        let back = julian_date_to_civil_date(date.to_julian_date());
        assert_abs_diff_eq!(back.day, day, epsilon = 1e-6);
        assert_eq!((back.month, back.year), (month, year));
    }
}

#[test]
fn a_zoned_civil_time_and_its_universal_time_see_the_same_sun() {
    let lct = LocalCivilTime::new(
        Hms::new(3.0, 37.0, 0.0),
        TimeZone::new(true, 4),
        CivilDate::new(1.0, 7, 2013),
    );
    let ut = local_civil_time_to_universal_time(&lct);
    let utc = LocalCivilTime::new(ut.time, TimeZone::utc(), ut.date);

    assert_eq!(utc.greenwich_date(), lct.greenwich_date());
    let (a, b) = (
        precise_position_of_sun(&utc).unwrap(),
        precise_position_of_sun(&lct).unwrap(),
    );
    assert_abs_diff_eq!(
        a.right_ascension.to_decimal_hours(),
        b.right_ascension.to_decimal_hours(),
        epsilon = 1e-5
    );
    assert_abs_diff_eq!(
        a.declination.to_decimal_degrees(),
        b.declination.to_decimal_degrees(),
        epsilon = 1e-5
    );
}

#[test]
fn sidereal_and_universal_time_are_inverse() {
    let date = midnight(22.0, 4, 1980).greenwich_date();
    for ut in [1.0, 6.5, 14.614353, 23.9] {
        let gst = universal_time_to_greenwich_sidereal_time(ut, &date);
        let (back, status) = greenwich_sidereal_time_to_universal_time(gst, &date);
        assert_abs_diff_eq!(back, ut, epsilon = 1e-6);
        assert_eq!(status, TimeConversionStatus::Ok);
    }
}

#[test]
fn horizon_and_ecliptic_conversions_invert() {
    let latitude = 52.0;
    for (hour_angle, declination) in [(5.862222, 23.219444), (18.0, -10.5), (0.5, 70.0)] {
        let horizon = equatorial_to_horizon(hour_angle, declination, latitude);
        let back = horizon_to_equatorial(horizon.azimuth, horizon.altitude, latitude);
        assert_abs_diff_eq!(back.hour_angle, hour_angle, epsilon = 1e-6);
        assert_abs_diff_eq!(back.declination, declination, epsilon = 1e-6);
    }

    let date = CivilDate::new(6.0, 7, 2009);
    let eq = ecliptic_to_equatorial(139.686111, 4.875278, &date);
    let ecl = equatorial_to_ecliptic(eq.right_ascension, eq.declination, &date);
    assert_abs_diff_eq!(ecl.longitude, 139.686111, epsilon = 1e-6);
    assert_abs_diff_eq!(ecl.latitude, 4.875278, epsilon = 1e-6);
}
