//! Named sites and US zones for callers that pick from a fixed list.

use chrono::Month;

use crate::error::Result;
use crate::types::SolarQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsTimeZone {
    Eastern,
    Central,
    Mountain,
    Pacific,
}

impl UsTimeZone {
    /// Standard-time offset; daylight saving is not applied.
    pub const fn utc_offset_hours(self) -> f64 {
        match self {
            Self::Eastern => -5.0,
            Self::Central => -6.0,
            Self::Mountain => -7.0,
            Self::Pacific => -8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    NewYork,
    SanFrancisco,
}

impl City {
    /// (latitude, longitude) in degrees.
    pub const fn coordinates(self) -> (f64, f64) {
        match self {
            Self::NewYork => (40.712776, -74.005974),
            Self::SanFrancisco => (37.774929, -122.419418),
        }
    }

    pub const fn time_zone(self) -> UsTimeZone {
        match self {
            Self::NewYork => UsTimeZone::Eastern,
            Self::SanFrancisco => UsTimeZone::Pacific,
        }
    }
}

impl SolarQuery {
    pub fn for_city(
        city: City,
        month: Month,
        day_of_month: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self> {
        let (latitude, longitude) = city.coordinates();
        Self::new(
            latitude,
            longitude,
            city.time_zone().utc_offset_hours(),
            month,
            day_of_month,
            hour,
            minute,
        )
    }
}
