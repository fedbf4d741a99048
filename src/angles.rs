// NOAA low-precision solar position: https://gml.noaa.gov/grad/solcalc/solareqns.PDF
// Radians between stages; degrees only at the query/result boundary and in the
// longitude term of the local-time correction.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use chrono::Month;

use crate::error::{DomainStage, Error, Result};
use crate::types::{
    AzimuthCandidates, LightOrientation, SolarQuery, SolarResult, SolarTrace, ZenithAngles,
};

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Rounding slack accepted past ±1 before a cosine argument counts as out of domain.
pub const ACOS_TOLERANCE: f64 = 1e-9;

/// At or beyond this |latitude| the azimuth is taken from the hour angle.
pub const POLAR_CAP_LATITUDE_DEG: f64 = 89.9999;

// |sin(zenith)| below this is an overhead sun.
const OVERHEAD_SIN_ZENITH: f64 = 1e-6;

// Cumulative days before each month of a 365-day year, January first.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Non-leap year; `day_of_month` is not checked against the month length.
pub fn day_of_year(month: Month, day_of_month: u32) -> u32 {
    DAYS_BEFORE_MONTH[month.number_from_month() as usize - 1] + day_of_month
}

pub fn fractional_year(day_of_year: u32, hour: u32) -> f64 {
    let day = f64::from(day_of_year) - 1.0;
    let hours = (f64::from(hour) - 12.0) / 24.0;
    (2.0 * PI / DAYS_PER_YEAR) * (day + hours)
}

pub fn equation_of_time(fractional_year: f64) -> f64 {
    let y = fractional_year;
    229.18
        * (0.000075 + 0.001868 * y.cos()
            - 0.032077 * y.sin()
            - 0.014615 * (2.0 * y).cos()
            - 0.040849 * (2.0 * y).sin())
}

pub fn solar_declination(fractional_year: f64) -> f64 {
    let y = fractional_year;
    0.006918 - 0.399912 * y.cos() + 0.070257 * y.sin() - 0.006758 * (2.0 * y).cos()
        + 0.000907 * (2.0 * y).sin()
        - 0.002697 * (3.0 * y).cos()
        + 0.00148 * (3.0 * y).sin()
}

pub fn time_offset(equation_of_time: f64, longitude_deg: f64, utc_offset_hours: f64) -> f64 {
    equation_of_time + MINUTES_PER_DEGREE * longitude_deg - 60.0 * utc_offset_hours
}

pub fn true_solar_time(hour: u32, minute: u32, time_offset: f64) -> f64 {
    f64::from(hour) * 60.0 + f64::from(minute) + time_offset
}

pub fn hour_angle(true_solar_time: f64) -> f64 {
    deg_to_rad(true_solar_time / MINUTES_PER_DEGREE - 180.0)
}

fn checked_acos(value: f64, stage: DomainStage) -> Result<f64> {
    // NaN fails the range check as well
    if !(-1.0 - ACOS_TOLERANCE..=1.0 + ACOS_TOLERANCE).contains(&value) {
        log::debug!("{stage} cosine argument out of domain: {value}");
        return Err(Error::Domain { stage, value });
    }
    Ok(value.clamp(-1.0, 1.0).acos())
}

/// Both zenith branches, `am = acos(phi)` and `pm = -acos(phi)`.
pub fn zenith_angles(latitude_rad: f64, declination: f64, hour_angle: f64) -> Result<ZenithAngles> {
    let phi = latitude_rad.sin() * declination.sin()
        + latitude_rad.cos() * declination.cos() * hour_angle.cos();
    let am = checked_acos(phi, DomainStage::Zenith)?;
    Ok(ZenithAngles { am, pm: -am })
}

pub fn solar_elevation(zenith: f64) -> f64 {
    FRAC_PI_2 - zenith
}

/// Both azimuth branches for the negative zenith solution.
///
/// With the sun overhead the bearing is undefined; it is reported on the
/// meridian instead, due south when the observer is at or north of the
/// subsolar latitude and due north otherwise.
pub fn azimuth_candidates(
    latitude_rad: f64,
    declination: f64,
    zenith_pm: f64,
) -> Result<AzimuthCandidates> {
    let a = if zenith_pm.sin().abs() < OVERHEAD_SIN_ZENITH {
        if latitude_rad >= declination {
            0.0
        } else {
            PI
        }
    } else {
        let theta = -((latitude_rad.sin() * zenith_pm.cos() - declination.sin())
            / (latitude_rad.cos() * zenith_pm.sin()));
        checked_acos(theta, DomainStage::Azimuth)?
    };
    Ok(AzimuthCandidates {
        morning: PI - a,
        afternoon: PI + a,
    })
}

/// Azimuth inside the polar caps, where the general formula divides by
/// `cos(latitude) ≈ 0`. Every direction is south at the north pole and north
/// at the south pole, so the bearing follows the hour angle: `180° + H` in the
/// north and `-H` in the south. Both branches carry the same value.
pub fn polar_azimuth(latitude_rad: f64, hour_angle: f64) -> AzimuthCandidates {
    let bearing = if latitude_rad >= 0.0 {
        PI + hour_angle
    } else {
        -hour_angle
    }
    .rem_euclid(TAU);
    AzimuthCandidates {
        morning: bearing,
        afternoon: bearing,
    }
}

/// Runs every stage and keeps the intermediate values.
///
/// Elevation always comes from the positive zenith branch and azimuth from
/// the negative one, except inside the polar caps (see [`polar_azimuth`]).
pub fn solar_position_traced(query: &SolarQuery) -> Result<(SolarResult, SolarTrace)> {
    if let Err(e) = query.validate() {
        log::debug!("rejected solar query: {e}");
        return Err(e);
    }

    let doy = day_of_year(query.month, query.day_of_month);
    let y = fractional_year(doy, query.hour);
    let eot = equation_of_time(y);
    let decl = solar_declination(y);
    let offset = time_offset(eot, query.longitude_deg, query.utc_offset_hours);
    let tst = true_solar_time(query.hour, query.minute, offset);
    let ha = hour_angle(tst);

    let lat_rad = deg_to_rad(query.latitude_deg);
    let zenith = zenith_angles(lat_rad, decl, ha)?;
    let azimuth = if query.latitude_deg.abs() >= POLAR_CAP_LATITUDE_DEG {
        polar_azimuth(lat_rad, ha)
    } else {
        azimuth_candidates(lat_rad, decl, zenith.pm)?
    };

    let result = SolarResult {
        azimuth_deg: normalize_angle(rad_to_deg(azimuth.select(ha))),
        elevation_deg: rad_to_deg(solar_elevation(zenith.am)),
    };
    log::trace!(
        "sun at azimuth {:.3}°, elevation {:.3}° (day {doy}, {:02}:{:02})",
        result.azimuth_deg,
        result.elevation_deg,
        query.hour,
        query.minute
    );

    let trace = SolarTrace {
        day_of_year: doy,
        fractional_year: y,
        equation_of_time: eot,
        declination: decl,
        time_offset: offset,
        true_solar_time: tst,
        hour_angle: ha,
        zenith,
        azimuth,
    };
    Ok((result, trace))
}

pub fn solar_position(query: &SolarQuery) -> Result<SolarResult> {
    solar_position_traced(query).map(|(result, _)| result)
}

pub fn light_orientation(position: &SolarResult) -> LightOrientation {
    LightOrientation {
        yaw_deg: normalize_angle(position.azimuth_deg - 180.0),
        pitch_deg: position.elevation_deg,
    }
}
