pub mod angles;
pub mod error;
pub mod presets;
pub mod track;
pub mod types;

pub use angles::{
    azimuth_candidates, day_of_year, deg_to_rad, equation_of_time, fractional_year, hour_angle,
    light_orientation, normalize_angle, polar_azimuth, rad_to_deg, solar_declination, solar_elevation,
    solar_position, solar_position_traced, time_offset, true_solar_time, zenith_angles,
    ACOS_TOLERANCE, DAYS_PER_YEAR, MINUTES_PER_DEGREE, POLAR_CAP_LATITUDE_DEG,
};

pub use error::{DomainStage, Error, Result};

pub use presets::{City, UsTimeZone};

pub use track::{clock_time, daily_track, minutes_to_time, sunrise_sunset, time_to_minutes, SUNRISE_ZENITH_DEG};

pub use types::{
    month_from_number, AzimuthCandidates, DayTrack, DaylightWindow, LightOrientation, SolarQuery,
    SolarResult, SolarTrace, TrackConfig, TrackSample, ZenithAngles,
};

pub use chrono::Month;
