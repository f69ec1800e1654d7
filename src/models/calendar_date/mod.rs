// Calendar date model
// Timezone-naive calendar day with a fixed YYYY-MM-DD wire form

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// A plain calendar date: year, month, day.
///
/// Carries no time-of-day and no timezone offset. Arithmetic and comparison
/// are purely calendar-based, so serializing a date never shifts it across a
/// midnight boundary the way a local-timezone conversion can.
///
/// # Examples
/// ```
/// use calendar_scheduler::models::calendar_date::CalendarDate;
///
/// let date = CalendarDate::parse("2024-01-31").unwrap();
/// assert_eq!(date.to_string(), "2024-01-31");
/// assert_eq!(date.add_days(1).to_string(), "2024-02-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Construct from year/month/day, rejecting impossible dates (Feb 30 etc.).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(value: &str) -> Result<Self, SchedulerError> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| SchedulerError::InvalidDate(value.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The date `days` calendar days later (earlier for negative values).
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Days from Sunday for this date's weekday (Sunday = 0 .. Saturday = 6).
    pub fn days_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Access the underlying chrono date.
    pub fn inner(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    // Rendered directly from the date fields; no locale or timezone involved.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = SchedulerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}
