mod common;

use approx::assert_abs_diff_eq;
use common::{angle_abs_diff, midnight};
use orbital_engine::catalog::Catalog;
use orbital_engine::conversion::Hms;
use orbital_engine::moon::{moon_phase, times_of_new_moon_and_full_moon};
use orbital_engine::planet::{planet_coordinates, precise_position_of_planet};
use orbital_engine::ref_system::{equatorial_to_ecliptic, GeographicLocation, RiseSetStatus};
use orbital_engine::sun::{precise_position_of_sun, sun_true_longitude, sunrise_and_sunset};
use orbital_engine::surface_coordinates::carrington_rotation_number;
use orbital_engine::time::{CivilDate, LocalCivilTime, TimeZone};

#[test]
fn precise_sun_lies_on_the_ecliptic() {
    for month in 1..=12 {
        let lct = midnight(15.0, month, 2005);
        let pos = precise_position_of_sun(&lct).unwrap();
        let ecl = equatorial_to_ecliptic(
            pos.right_ascension.to_decimal_hours(),
            pos.declination.to_decimal_degrees(),
            &lct.greenwich_date(),
        );

        assert!(ecl.latitude.abs() < 1e-3, "latitude in month {month}");
        assert!(angle_abs_diff(ecl.longitude, sun_true_longitude(&lct).unwrap()) < 1e-3);
    }
}

#[test]
fn sunrise_and_sunset_are_symmetric_about_the_meridian() {
    let rs = sunrise_and_sunset(
        &CivilDate::new(10.0, 3, 1986),
        TimeZone::new(false, -5),
        &GeographicLocation::new(-71.05, 42.37),
    )
    .unwrap();

    assert_eq!(rs.status, RiseSetStatus::Ok);
    let (rise, set) = (rs.sunrise_azimuth.unwrap(), rs.sunset_azimuth.unwrap());
    assert_abs_diff_eq!(rise + set, 360.0, epsilon = 1.0);
}

#[test]
fn lunations_match_the_moon_phase() {
    let events = times_of_new_moon_and_full_moon(&CivilDate::new(1.0, 9, 2003), TimeZone::utc());

    let at = |event: &orbital_engine::moon::LunarPhaseEvent| {
        LocalCivilTime::new(
            Hms::new(event.local_time.hours, event.local_time.minutes, 0.0),
            TimeZone::utc(),
            event.local_date,
        )
    };

    assert!(moon_phase(&at(&events.new_moon)).unwrap() <= 0.01);
    assert!(moon_phase(&at(&events.full_moon)).unwrap() >= 0.99);
}

#[test]
fn every_catalog_planet_stays_near_the_ecliptic() {
    let catalog = Catalog::default();
    let lct = midnight(22.0, 11, 2003);

    for planet in &catalog.precise_planets {
        let coords = planet_coordinates(&lct, &planet.name, &catalog).unwrap();
        assert!(coords.latitude.abs() < 10.0, "{}", planet.name);
        assert!(coords.distance > 0.0 && coords.radius_vector > 0.0);

        let pos = precise_position_of_planet(&lct, &planet.name, &catalog).unwrap();
        assert!(pos.declination.to_decimal_degrees().abs() < 35.0, "{}", planet.name);
    }
}

#[test]
fn carrington_rotations_advance_every_27_days() {
    let start = carrington_rotation_number(&CivilDate::new(1.0, 1, 2000));
    let next = carrington_rotation_number(&CivilDate::new(28.3, 1, 2000));
    assert_eq!(next, start + 1);
}
