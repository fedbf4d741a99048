use chrono::{DateTime, FixedOffset, Month, TimeZone};

use sun_angle::angles::solar_position;
use sun_angle::error::Error;
use sun_angle::presets::{City, UsTimeZone};
use sun_angle::track::*;
use sun_angle::types::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn nyc(month: Month, day: u32) -> SolarQuery {
    SolarQuery::new(40.7128, -74.0060, -5.0, month, day, 12, 0).unwrap()
}

// ── Config ──

#[test]
fn test_default_config() {
    let c = TrackConfig::default();
    assert_eq!(c.interval_minutes, 15);
    assert_eq!(c.start_minutes, 360);
    assert_eq!(c.end_minutes, 1080);
}

#[test]
fn test_invalid_configs_rejected() {
    let q = nyc(Month::June, 1);
    let bad = [
        TrackConfig {
            interval_minutes: 0,
            ..TrackConfig::default()
        },
        TrackConfig {
            end_minutes: 1440,
            ..TrackConfig::default()
        },
        TrackConfig {
            start_minutes: 700,
            end_minutes: 600,
            ..TrackConfig::default()
        },
    ];
    for config in bad {
        let err = daily_track(&q, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidTrack { .. }), "{:?}", err);
    }
}

// ── Time utilities ──

#[test]
fn test_time_roundtrip() {
    for m in [0, 1, 59, 60, 61, 120, 719, 720, 721, 1439] {
        assert_eq!(time_to_minutes(minutes_to_time(m)), m, "minutes={}", m);
    }
}

#[test]
fn test_known_time_conversions() {
    assert_eq!(minutes_to_time(0), (0, 0));
    assert_eq!(minutes_to_time(720), (12, 0));
    assert_eq!(minutes_to_time(1439), (23, 59));
    assert_eq!(minutes_to_time(390), (6, 30));
}

#[test]
fn test_clock_time_wraps_onto_one_day() {
    assert_eq!(clock_time(267.2), (4, 27));
    assert_eq!(clock_time(-30.0), (23, 30));
    assert_eq!(clock_time(1439.6), (0, 0));
    assert_eq!(clock_time(1500.0), (1, 0));
}

#[test]
fn test_early_sunrise_reads_before_midnight() {
    // UTC-12 well east of its zone meridian: sunrise falls before local midnight
    let q = SolarQuery::new(0.0, -82.5, -12.0, Month::March, 21, 12, 0).unwrap();
    let rise = sunrise_sunset(&q).unwrap().sunrise().unwrap();
    assert!(rise < 0.0 && rise > -60.0, "{}", rise);
    assert_eq!(clock_time(rise).0, 23);
}

// ── Daily track ──

#[test]
fn test_default_track_covers_six_to_six() {
    let track = daily_track(&nyc(Month::June, 1), &TrackConfig::default()).unwrap();
    assert_eq!(track.samples.len(), 49);
    assert_eq!(track.samples.first().unwrap().minutes, 360);
    assert_eq!(track.samples.last().unwrap().minutes, 1080);
    assert_eq!(track.daylight().count(), 49);
}

#[test]
fn test_track_samples_match_facade() {
    let q = nyc(Month::December, 1);
    let track = daily_track(&q, &TrackConfig::default()).unwrap();
    for sample in &track.samples {
        let (hour, minute) = minutes_to_time(sample.minutes);
        assert_eq!(sample.position, solar_position(&q.at_time(hour, minute)).unwrap());
    }
}

#[test]
fn test_track_peak_near_solar_noon() {
    let summer = daily_track(&nyc(Month::June, 1), &TrackConfig::default()).unwrap();
    let peak = summer.peak().unwrap();
    assert_eq!(peak.minutes, 720);
    assert_approx!(peak.position.elevation_deg, 71.2, 0.5);

    let winter = daily_track(&nyc(Month::December, 1), &TrackConfig::default()).unwrap();
    assert_eq!(winter.peak().unwrap().minutes, 705);
}

#[test]
fn test_winter_track_starts_in_darkness() {
    let track = daily_track(&nyc(Month::December, 1), &TrackConfig::default()).unwrap();
    assert!(track.samples[0].position.elevation_deg < 0.0);
    let first_light = track.daylight().next().unwrap();
    assert!(first_light.minutes > 360 && first_light.minutes < 480, "{:?}", first_light);
    assert!(track.daylight().count() < track.samples.len());
}

#[test]
fn test_single_sample_track() {
    let config = TrackConfig {
        interval_minutes: 30,
        start_minutes: 600,
        end_minutes: 600,
    };
    let track = daily_track(&nyc(Month::March, 1), &config).unwrap();
    assert_eq!(track.samples.len(), 1);
    assert_eq!(track.config, config);
}

#[test]
fn test_track_rejects_invalid_site() {
    let q = SolarQuery {
        latitude_deg: 95.0,
        ..nyc(Month::June, 1)
    };
    let err = daily_track(&q, &TrackConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidLatitude { .. }));
}

// ── Sunrise / sunset ──

#[test]
fn test_new_york_june_daylight() {
    let window = sunrise_sunset(&nyc(Month::June, 1)).unwrap();
    // 05:27 / 20:20 EDT, reported here on standard time
    assert_approx!(window.sunrise().unwrap(), 267.0, 3.0);
    assert_approx!(window.sunset().unwrap(), 1160.0, 3.0);
    assert_approx!(window.solar_noon(), 713.5, 1.0);
    assert_approx!(window.day_length(), 892.5, 3.0);
}

#[test]
fn test_daylight_symmetric_about_noon() {
    let window = sunrise_sunset(&nyc(Month::November, 21)).unwrap();
    let (rise, set) = (window.sunrise().unwrap(), window.sunset().unwrap());
    assert_approx!((rise + set) / 2.0, window.solar_noon(), 1e-9);
    assert!(window.day_length() < 720.0);
}

#[test]
fn test_polar_day_and_night() {
    let tromso = |month| SolarQuery::new(70.0, 25.0, 1.0, month, 21, 12, 0).unwrap();

    let summer = sunrise_sunset(&tromso(Month::June)).unwrap();
    assert!(matches!(summer, DaylightWindow::MidnightSun { .. }));
    assert_eq!(summer.sunrise(), None);
    assert_eq!(summer.day_length(), 1440.0);

    let winter = sunrise_sunset(&tromso(Month::December)).unwrap();
    assert!(matches!(winter, DaylightWindow::PolarNight { .. }));
    assert_eq!(winter.sunset(), None);
    assert_eq!(winter.day_length(), 0.0);
}

#[test]
fn test_sunrise_ignores_clock_time() {
    let morning = nyc(Month::April, 10).at_time(6, 0);
    let evening = nyc(Month::April, 10).at_time(21, 45);
    assert_eq!(sunrise_sunset(&morning).unwrap(), sunrise_sunset(&evening).unwrap());
}

// ── Presets ──

#[test]
fn test_time_zone_offsets() {
    assert_eq!(UsTimeZone::Eastern.utc_offset_hours(), -5.0);
    assert_eq!(UsTimeZone::Central.utc_offset_hours(), -6.0);
    assert_eq!(UsTimeZone::Mountain.utc_offset_hours(), -7.0);
    assert_eq!(UsTimeZone::Pacific.utc_offset_hours(), -8.0);
}

#[test]
fn test_city_query() {
    let q = SolarQuery::for_city(City::SanFrancisco, Month::March, 1, 9, 0).unwrap();
    assert_eq!(q.utc_offset_hours, -8.0);
    assert_approx!(q.latitude_deg, 37.7749, 1e-4);
    assert_approx!(q.longitude_deg, -122.4194, 1e-4);

    let pos = solar_position(&q).unwrap();
    assert_approx!(pos.azimuth_deg, 122.6, 1.0);
    assert_approx!(pos.elevation_deg, 24.8, 1.0);
}

#[test]
fn test_city_query_validates_time() {
    let err = SolarQuery::for_city(City::NewYork, Month::May, 1, 12, 61).unwrap_err();
    assert_eq!(err, Error::InvalidMinute { value: 61 });
}

// ── chrono boundary ──

#[test]
fn test_query_from_fixed_offset_datetime() {
    let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
    let dt: DateTime<FixedOffset> = eastern.with_ymd_and_hms(2024, 12, 1, 9, 0, 42).unwrap();
    let q = SolarQuery::from_datetime(40.7128, -74.0060, &dt).unwrap();

    assert_eq!(q.utc_offset_hours, -5.0);
    assert_eq!(q.month, Month::December);
    assert_eq!((q.day_of_month, q.hour, q.minute), (1, 9, 0));
    assert_eq!(q, nyc(Month::December, 1).at_time(9, 0));
}

#[test]
fn test_half_hour_offset() {
    let india = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
    let dt = india.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
    let q = SolarQuery::from_datetime(28.6, 77.2, &dt).unwrap();
    assert_eq!(q.utc_offset_hours, 5.5);
}

#[test]
fn test_month_from_number() {
    assert_eq!(month_from_number(1).unwrap(), Month::January);
    assert_eq!(month_from_number(12).unwrap(), Month::December);
    assert_eq!(month_from_number(13).unwrap_err(), Error::InvalidMonth { value: 13 });
    assert_eq!(month_from_number(0).unwrap_err(), Error::InvalidMonth { value: 0 });
}
