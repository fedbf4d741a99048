use crate::angles::{
    self, day_of_year, deg_to_rad, equation_of_time, fractional_year, rad_to_deg,
    solar_declination, MINUTES_PER_DEGREE,
};
use crate::error::{Error, Result};
use crate::types::{DayTrack, DaylightWindow, SolarQuery, TrackConfig, TrackSample};

/// Zenith of the sun's upper limb at rise and set, refraction included.
pub const SUNRISE_ZENITH_DEG: f64 = 90.833;

const LAST_MINUTE_OF_DAY: u32 = 1439;

pub fn minutes_to_time(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_minutes(time: (u32, u32)) -> u32 {
    time.0 * 60 + time.1
}

/// Nearest wall-clock (hour, minute) for a fractional minute count, wrapped
/// onto a single day. `sunrise_sunset` can report minutes outside 0..1440.
pub fn clock_time(minutes: f64) -> (u32, u32) {
    minutes_to_time(minutes.round().rem_euclid(1440.0) as u32)
}

fn validate_config(config: &TrackConfig) -> Result<()> {
    if config.interval_minutes == 0 {
        return Err(Error::InvalidTrack {
            message: "interval must be at least one minute",
        });
    }
    if config.end_minutes > LAST_MINUTE_OF_DAY {
        return Err(Error::InvalidTrack {
            message: "end must fall within the day (at most 23:59)",
        });
    }
    if config.start_minutes > config.end_minutes {
        return Err(Error::InvalidTrack {
            message: "start must not be after end",
        });
    }
    Ok(())
}

/// Samples the sun across the query's date. The query's own clock time is
/// ignored; every sample uses its site, offset and date.
pub fn daily_track(query: &SolarQuery, config: &TrackConfig) -> Result<DayTrack> {
    validate_config(config)?;

    let span = config.end_minutes - config.start_minutes;
    let mut samples = Vec::with_capacity((span / config.interval_minutes + 1) as usize);
    let step = config.interval_minutes as usize;
    for minutes in (config.start_minutes..=config.end_minutes).step_by(step) {
        let (hour, minute) = minutes_to_time(minutes);
        let position = angles::solar_position(&query.at_time(hour, minute))?;
        samples.push(TrackSample { minutes, position });
    }

    log::debug!(
        "tracked {} samples for {:?} {} every {} min",
        samples.len(),
        query.month,
        query.day_of_month,
        config.interval_minutes
    );

    Ok(DayTrack {
        config: *config,
        samples,
    })
}

/// Sunrise, solar noon and sunset for the query's site and date, in local
/// clock minutes. The orbital terms are evaluated at noon; the query's clock
/// time is ignored. Results can fall outside 0..1440 for sites far from
/// their zone meridian.
pub fn sunrise_sunset(query: &SolarQuery) -> Result<DaylightWindow> {
    query.validate()?;

    let y = fractional_year(day_of_year(query.month, query.day_of_month), 12);
    let eot = equation_of_time(y);
    let decl = solar_declination(y);
    let lat_rad = deg_to_rad(query.latitude_deg);

    let local_shift = 60.0 * query.utc_offset_hours;
    let solar_noon =
        720.0 - MINUTES_PER_DEGREE * query.longitude_deg - eot + local_shift;

    let cos_ha = deg_to_rad(SUNRISE_ZENITH_DEG).cos() / (lat_rad.cos() * decl.cos())
        - lat_rad.tan() * decl.tan();

    if cos_ha > 1.0 {
        return Ok(DaylightWindow::PolarNight { solar_noon });
    }
    if cos_ha < -1.0 {
        return Ok(DaylightWindow::MidnightSun { solar_noon });
    }

    let half_day = MINUTES_PER_DEGREE * rad_to_deg(cos_ha.acos());
    Ok(DaylightWindow::Regular {
        sunrise: solar_noon - half_day,
        solar_noon,
        sunset: solar_noon + half_day,
    })
}
