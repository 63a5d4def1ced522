use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::SkyError;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock hour and minute, the only part of a timestamp the classifiers read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    #[must_use]
    pub fn from_minute_of_day(minutes: u16) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        Self::new((minutes / 60) as u8, (minutes % 60) as u8)
    }

    #[must_use]
    pub fn of<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[must_use]
    pub const fn minutes_since_midnight(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

/// Sunrise and sunset for the requested day, as minutes since local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstronomyInfo {
    pub sunrise_minutes: u16,
    pub sunset_minutes: u16,
}

impl AstronomyInfo {
    /// Builds from provider strings such as `"06:30 AM"` / `"07:45 PM"`.
    pub fn from_clock_strings(sunrise: &str, sunset: &str) -> Result<Self, SkyError> {
        Ok(Self {
            sunrise_minutes: parse_time_to_minutes(sunrise)?,
            sunset_minutes: parse_time_to_minutes(sunset)?,
        })
    }
}

/// Converts a 12-hour `hh:mm AM|PM` string into minutes since midnight.
pub fn parse_time_to_minutes(value: &str) -> Result<u16, SkyError> {
    let time = NaiveTime::parse_from_str(value.trim(), "%I:%M %p")
        .map_err(|_| SkyError::time_of_day(value))?;
    Ok(ClockTime::of(&time).minutes_since_midnight())
}
