use chrono::{DateTime, Datelike, FixedOffset, Month, Timelike};

use crate::error::{Error, Result};

/// One observer, calendar date and local clock time. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarQuery {
    /// Positive north.
    pub latitude_deg: f64,
    /// Positive east.
    pub longitude_deg: f64,
    /// Fixed offset from UTC, no daylight-saving adjustment.
    pub utc_offset_hours: f64,
    pub month: Month,
    pub day_of_month: u32,
    pub hour: u32,
    pub minute: u32,
}

impl SolarQuery {
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        utc_offset_hours: f64,
        month: Month,
        day_of_month: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self> {
        let query = Self {
            latitude_deg,
            longitude_deg,
            utc_offset_hours,
            month,
            day_of_month,
            hour,
            minute,
        };
        query.validate()?;
        Ok(query)
    }

    /// Builds a query from a fixed-offset timestamp. Seconds are dropped.
    pub fn from_datetime(
        latitude_deg: f64,
        longitude_deg: f64,
        dt: &DateTime<FixedOffset>,
    ) -> Result<Self> {
        let month = month_from_number(dt.month())?;
        let utc_offset_hours = f64::from(dt.offset().local_minus_utc()) / 3600.0;
        Self::new(
            latitude_deg,
            longitude_deg,
            utc_offset_hours,
            month,
            dt.day(),
            dt.hour(),
            dt.minute(),
        )
    }

    /// Same site and date at another clock time.
    pub fn at_time(&self, hour: u32, minute: u32) -> Self {
        Self {
            hour,
            minute,
            ..*self
        }
    }

    /// Day-of-month is only checked against 1..=31, never against the month length.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(Error::InvalidLatitude {
                value: self.latitude_deg,
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(Error::InvalidLongitude {
                value: self.longitude_deg,
            });
        }
        if !(-12.0..=14.0).contains(&self.utc_offset_hours) {
            return Err(Error::InvalidUtcOffset {
                value: self.utc_offset_hours,
            });
        }
        if !(1..=31).contains(&self.day_of_month) {
            return Err(Error::InvalidDayOfMonth {
                value: self.day_of_month,
            });
        }
        if self.hour > 23 {
            return Err(Error::InvalidHour { value: self.hour });
        }
        if self.minute > 59 {
            return Err(Error::InvalidMinute { value: self.minute });
        }
        Ok(())
    }
}

pub fn month_from_number(number: u32) -> Result<Month> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .ok_or(Error::InvalidMonth { value: number })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarResult {
    /// Compass bearing in [0, 360), 0 = due north.
    pub azimuth_deg: f64,
    /// Negative below the horizon.
    pub elevation_deg: f64,
}

/// Both arc-cosine branches of the zenith angle, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZenithAngles {
    pub am: f64,
    pub pm: f64,
}

/// Both arc-cosine branches of the azimuth, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AzimuthCandidates {
    pub morning: f64,
    pub afternoon: f64,
}

impl AzimuthCandidates {
    /// Negative hour angle picks the morning branch; solar noon and later pick the afternoon one.
    pub fn select(&self, hour_angle: f64) -> f64 {
        if hour_angle < 0.0 {
            self.morning
        } else {
            self.afternoon
        }
    }
}

/// Every intermediate value of one facade call. Angles in radians, times in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTrace {
    pub day_of_year: u32,
    pub fractional_year: f64,
    pub equation_of_time: f64,
    pub declination: f64,
    pub time_offset: f64,
    pub true_solar_time: f64,
    pub hour_angle: f64,
    pub zenith: ZenithAngles,
    pub azimuth: AzimuthCandidates,
}

/// Euler angles for a directional light, degrees.
///
/// Apply `yaw_deg` about the up axis first, then `pitch_deg` about the
/// resulting local right axis: elevation is measured from the horizon at the
/// rotated azimuth. Yaw zero points due north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightOrientation {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
}

/// Sunrise, solar noon and sunset as local clock minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DaylightWindow {
    Regular {
        sunrise: f64,
        solar_noon: f64,
        sunset: f64,
    },
    MidnightSun {
        solar_noon: f64,
    },
    PolarNight {
        solar_noon: f64,
    },
}

impl DaylightWindow {
    pub const fn solar_noon(&self) -> f64 {
        match self {
            Self::Regular { solar_noon, .. }
            | Self::MidnightSun { solar_noon }
            | Self::PolarNight { solar_noon } => *solar_noon,
        }
    }

    pub const fn sunrise(&self) -> Option<f64> {
        match self {
            Self::Regular { sunrise, .. } => Some(*sunrise),
            _ => None,
        }
    }

    pub const fn sunset(&self) -> Option<f64> {
        match self {
            Self::Regular { sunset, .. } => Some(*sunset),
            _ => None,
        }
    }

    pub fn day_length(&self) -> f64 {
        match self {
            Self::Regular {
                sunrise, sunset, ..
            } => *sunset - *sunrise,
            Self::MidnightSun { .. } => 1440.0,
            Self::PolarNight { .. } => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackConfig {
    pub interval_minutes: u32,
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 15,
            start_minutes: 6 * 60,
            end_minutes: 18 * 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSample {
    pub minutes: u32,
    pub position: SolarResult,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayTrack {
    pub config: TrackConfig,
    pub samples: Vec<TrackSample>,
}

impl DayTrack {
    /// Highest-elevation sample, first one on ties.
    pub fn peak(&self) -> Option<&TrackSample> {
        self.samples.iter().reduce(|best, s| {
            if s.position.elevation_deg > best.position.elevation_deg {
                s
            } else {
                best
            }
        })
    }

    pub fn daylight(&self) -> impl Iterator<Item = &TrackSample> {
        self.samples
            .iter()
            .filter(|s| s.position.elevation_deg > 0.0)
    }
}
