//! Time-of-day model.
//!
//! # Responsibility
//! - Convert between `H:MM` / `HH:MM` strings and minute offsets within a day.
//! - Reject malformed input at ingestion instead of coercing it.
//!
//! # Invariants
//! - A `TimeOfDay` always holds `0 <= minutes <= 1439`.
//! - `parse_time_of_day(&format_minutes(m)) == Ok(m)` for every valid `m`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

static TIME_OF_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("valid time-of-day regex"));

/// Error returned when a time string or minute offset is not a valid time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeFormatError {
    /// Input does not match `H:MM` or `HH:MM`.
    Malformed(String),
    /// Hour component outside `0..=23`.
    HourOutOfRange(u16),
    /// Minute component outside `0..=59`.
    MinuteOutOfRange(u16),
    /// Minute offset outside `0..=1439`.
    OffsetOutOfRange(u32),
}

impl Display for TimeFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => {
                write!(f, "invalid time `{value}`; expected H:MM or HH:MM")
            }
            Self::HourOutOfRange(hours) => write!(f, "hour {hours} must be within 0..=23"),
            Self::MinuteOutOfRange(minutes) => {
                write!(f, "minute {minutes} must be within 0..=59")
            }
            Self::OffsetOutOfRange(offset) => {
                write!(f, "minute offset {offset} must be within 0..=1439")
            }
        }
    }
}

impl Error for TimeFormatError {}

/// Parses `H:MM` or `HH:MM` into minutes since midnight.
///
/// # Errors
/// - `Malformed` when the input is not two colon-separated numeric parts
///   with a two-digit minute field.
/// - `HourOutOfRange` / `MinuteOutOfRange` for values outside a 24h clock.
pub fn parse_time_of_day(text: &str) -> Result<u16, TimeFormatError> {
    let trimmed = text.trim();
    let caps = TIME_OF_DAY_RE
        .captures(trimmed)
        .ok_or_else(|| TimeFormatError::Malformed(trimmed.to_string()))?;

    // Regex guarantees at most two ASCII digits per group.
    let hours: u16 = caps[1]
        .parse()
        .map_err(|_| TimeFormatError::Malformed(trimmed.to_string()))?;
    let minutes: u16 = caps[2]
        .parse()
        .map_err(|_| TimeFormatError::Malformed(trimmed.to_string()))?;

    if hours >= 24 {
        return Err(TimeFormatError::HourOutOfRange(hours));
    }
    if minutes >= MINUTES_PER_HOUR {
        return Err(TimeFormatError::MinuteOutOfRange(minutes));
    }

    Ok(hours * MINUTES_PER_HOUR + minutes)
}

/// Formats minutes since midnight as `H:MM`.
///
/// The hour is not padded, the minute is always two digits: `975 -> "16:15"`,
/// `65 -> "1:05"`.
pub fn format_minutes(minutes: u16) -> String {
    let hours = minutes / MINUTES_PER_HOUR;
    let mins = minutes % MINUTES_PER_HOUR;
    format!("{hours}:{mins:02}")
}

/// Builds a `TimeOfDay` from literal components.
///
/// # Panics
/// Panics when `hours > 23` or `minutes > 59`. Intended for constants, where
/// the panic surfaces at compile time.
pub const fn time_of_day(hours: u16, minutes: u16) -> TimeOfDay {
    match TimeOfDay::from_hm_const(hours, minutes) {
        Some(time) => time,
        None => panic!("time of day out of range"),
    }
}

/// Wall-clock time within a single day, stored as a minute offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Builds a time from a minute offset.
    ///
    /// # Errors
    /// - `OffsetOutOfRange` when `minutes > 1439`.
    pub fn from_minutes(minutes: u32) -> Result<Self, TimeFormatError> {
        if minutes >= u32::from(MINUTES_PER_DAY) {
            return Err(TimeFormatError::OffsetOutOfRange(minutes));
        }
        // Bounded by MINUTES_PER_DAY above.
        Ok(Self(minutes as u16))
    }

    /// Const constructor for compile-time defaults; `None` when out of range.
    pub const fn from_hm_const(hours: u16, minutes: u16) -> Option<Self> {
        if hours >= 24 || minutes >= MINUTES_PER_HOUR {
            return None;
        }
        Some(Self(hours * MINUTES_PER_HOUR + minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Signed minute distance `self - other`.
    pub fn minutes_since(self, other: TimeOfDay) -> i32 {
        i32::from(self.0) - i32::from(other.0)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_minutes(self.0))
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time_of_day(s).map(Self)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
