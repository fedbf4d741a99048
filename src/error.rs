use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage whose arc-cosine argument left [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainStage {
    Zenith,
    Azimuth,
}

impl fmt::Display for DomainStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zenith => f.write_str("zenith"),
            Self::Azimuth => f.write_str("azimuth"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    #[error("invalid UTC offset {value} h (must be between -12 and +14)")]
    InvalidUtcOffset { value: f64 },

    #[error("invalid day of month {value} (must be between 1 and 31)")]
    InvalidDayOfMonth { value: u32 },

    #[error("invalid month number {value} (must be between 1 and 12)")]
    InvalidMonth { value: u32 },

    #[error("invalid hour {value} (must be between 0 and 23)")]
    InvalidHour { value: u32 },

    #[error("invalid minute {value} (must be between 0 and 59)")]
    InvalidMinute { value: u32 },

    #[error("invalid track configuration: {message}")]
    InvalidTrack { message: &'static str },

    /// An intermediate cosine argument fell outside [-1, 1] (or was NaN).
    #[error("{stage} cosine argument {value} outside [-1, 1]")]
    Domain { stage: DomainStage, value: f64 },
}

impl Error {
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
