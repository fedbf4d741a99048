use sun_angle::angles::{light_orientation, rad_to_deg, solar_position_traced};
use sun_angle::presets::City;
use sun_angle::track::{clock_time, daily_track, minutes_to_time, sunrise_sunset};
use sun_angle::types::{SolarQuery, TrackConfig};
use sun_angle::Month;

fn main() -> Result<(), sun_angle::Error> {
    env_logger::init();

    let city = City::NewYork;
    let query = SolarQuery::for_city(city, Month::December, 1, 9, 0)?;
    let (pos, trace) = solar_position_traced(&query)?;

    println!("=== Sun Angle Calculation Example ===");
    println!(
        "Location: {:?} ({:.4}°, {:.4}°), UTC{:+}",
        city, query.latitude_deg, query.longitude_deg, query.utc_offset_hours
    );
    println!(
        "Date/Time: {:?} {} {:02}:{:02}",
        query.month, query.day_of_month, query.hour, query.minute
    );
    println!();
    println!("--- Pipeline ---");
    println!("Day of year: {}", trace.day_of_year);
    println!("Fractional year: {:.5} rad", trace.fractional_year);
    println!("Equation of Time: {:.2} minutes", trace.equation_of_time);
    println!("Declination: {:.2}°", rad_to_deg(trace.declination));
    println!("True Solar Time: {:.2} minutes", trace.true_solar_time);
    println!("Hour Angle: {:.2}°", rad_to_deg(trace.hour_angle));
    println!();
    println!("--- Sun ---");
    println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", pos.azimuth_deg);
    println!("Elevation: {:.2}°", pos.elevation_deg);

    let light = light_orientation(&pos);
    println!(
        "Light yaw {:.2}°, then pitch {:.2}°",
        light.yaw_deg, light.pitch_deg
    );
    println!();

    let window = sunrise_sunset(&query)?;
    if let (Some(rise), Some(set)) = (window.sunrise(), window.sunset()) {
        let (rh, rm) = clock_time(rise);
        let (sh, sm) = clock_time(set);
        println!("Sunrise {rh:02}:{rm:02}, sunset {sh:02}:{sm:02}");
    }

    println!("--- Day track ---");
    let track = daily_track(&query, &TrackConfig {
        interval_minutes: 60,
        ..TrackConfig::default()
    })?;
    for sample in &track.samples {
        let (h, m) = minutes_to_time(sample.minutes);
        println!(
            "{h:02}:{m:02}  az {:6.2}°  el {:6.2}°",
            sample.position.azimuth_deg, sample.position.elevation_deg
        );
    }
    Ok(())
}
