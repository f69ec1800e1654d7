// Recurrence rule model

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::models::calendar_date::CalendarDate;

/// Window applied when a repeating rule has no explicit end date.
pub const DEFAULT_END_WINDOW_DAYS: i64 = 365;

/// How an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrenceType {
    pub fn is_repeating(&self) -> bool {
        !matches!(self, RecurrenceType::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceType::None => "none",
            RecurrenceType::Daily => "daily",
            RecurrenceType::Weekly => "weekly",
            RecurrenceType::Monthly => "monthly",
            RecurrenceType::Yearly => "yearly",
        }
    }

    /// Parse the stored string form back into a type.
    pub fn parse(value: &str) -> Result<Self, SchedulerError> {
        match value {
            "none" => Ok(RecurrenceType::None),
            "daily" => Ok(RecurrenceType::Daily),
            "weekly" => Ok(RecurrenceType::Weekly),
            "monthly" => Ok(RecurrenceType::Monthly),
            "yearly" => Ok(RecurrenceType::Yearly),
            other => Err(SchedulerError::InvalidRule(format!(
                "unknown recurrence type: {other}"
            ))),
        }
    }
}

/// Repeat rule attached to an event form.
///
/// For `RecurrenceType::None` the interval and end date are stored but
/// ignored by the instance generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    #[serde(rename = "type")]
    pub repeat_type: RecurrenceType,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<CalendarDate>,
}

impl RecurrenceRule {
    pub fn none() -> Self {
        Self {
            repeat_type: RecurrenceType::None,
            interval: 1,
            end_date: None,
        }
    }

    pub fn new(repeat_type: RecurrenceType, interval: u32, end_date: Option<CalendarDate>) -> Self {
        Self {
            repeat_type,
            interval,
            end_date,
        }
    }

    /// Reject rules the generator cannot drive.
    ///
    /// An interval of zero would never advance the candidate date, so it is a
    /// caller contract violation rather than something to silently clamp.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.repeat_type.is_repeating() && self.interval < 1 {
            return Err(SchedulerError::InvalidRule(format!(
                "interval must be at least 1, got {}",
                self.interval
            )));
        }
        Ok(())
    }

    /// The last date the generator may emit: the rule's end date, or the
    /// anchor plus the default one-year window when no end date is set.
    pub fn effective_end(&self, anchor: CalendarDate) -> CalendarDate {
        self.end_date
            .unwrap_or_else(|| anchor.add_days(DEFAULT_END_WINDOW_DAYS))
    }
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self::none()
    }
}
