//! Time-of-day handling for trip schedules.
//!
//! The catalog serializes times as "HH:MM:SS" strings. Trips are daily
//! schedules, so there is no date component: two times compare by
//! wall-clock value alone. A trip whose arrival time is before its
//! departure time arrives the following calendar day; that convention
//! never changes how the raw times compare.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day in a daily trip schedule.
///
/// # Examples
///
/// ```
/// use trip_finder::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hms("08:15:00").unwrap();
/// assert_eq!(t.to_string(), "08:15:00");
///
/// // Invalid formats
/// assert!(TimeOfDay::parse_hms("8:15:00").is_err());
/// assert!(TimeOfDay::parse_hms("08:15").is_err());
/// assert!(TimeOfDay::parse_hms("24:00:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Create a TimeOfDay from an already-validated time.
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Parse a time from "HH:MM:SS" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_finder::domain::TimeOfDay;
    ///
    /// // Valid times
    /// assert!(TimeOfDay::parse_hms("00:00:00").is_ok());
    /// assert!(TimeOfDay::parse_hms("23:59:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(TimeOfDay::parse_hms("081500").is_err());
    /// assert!(TimeOfDay::parse_hms("08:15:0").is_err());
    /// assert!(TimeOfDay::parse_hms("08:15:60").is_err());
    /// ```
    pub fn parse_hms(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 8 characters: HH:MM:SS
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();

        // Check colon positions
        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        // Parse hours
        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        // Parse minutes
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        // Parse seconds
        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TimeOfDay({:02}:{:02}:{:02})",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
