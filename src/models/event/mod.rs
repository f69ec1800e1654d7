// Event models
// The anchor form submitted by callers and the stored occurrence

use serde::{Deserialize, Serialize};

use crate::models::calendar_date::CalendarDate;
use crate::models::recurrence::RecurrenceRule;

/// Event data before it has an identity: the anchor the caller submits, and
/// the shape the instance generator emits one of per occurrence date.
///
/// `start_time` and `end_time` are wall-clock `HH:MM` strings, not dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventForm {
    pub title: String,
    pub date: CalendarDate,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub notification_minutes: i64,
    pub repeat: RecurrenceRule,
}

impl EventForm {
    /// Create a form with required fields and empty optional ones.
    pub fn new(title: impl Into<String>, date: CalendarDate) -> Self {
        Self {
            title: title.into(),
            date,
            start_time: String::new(),
            end_time: String::new(),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            notification_minutes: 0,
            repeat: RecurrenceRule::none(),
        }
    }

    /// Create a builder for constructing forms with optional fields
    pub fn builder() -> EventFormBuilder {
        EventFormBuilder::new()
    }

    /// Validate the form
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        // HH:MM strings order lexically the same as temporally
        if !self.start_time.is_empty() && !self.end_time.is_empty() && self.end_time <= self.start_time
        {
            return Err("Event end time must be after start time".to_string());
        }

        self.repeat.validate().map_err(|e| e.to_string())?;

        Ok(())
    }

    /// Clone the template onto a concrete occurrence date.
    /// Every other field is carried verbatim, including the repeat rule.
    pub fn with_date(&self, date: CalendarDate) -> Self {
        let mut occurrence = self.clone();
        occurrence.date = date;
        occurrence
    }
}

/// A stored event occurrence: form fields plus the identity assigned by the
/// persistence layer.
///
/// `group_id` links occurrences generated from the same schedule. It is never
/// set by the instance generator; the store assigns it at batch-create time.
/// After creation each occurrence is an independent row and may be edited or
/// deleted without affecting its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub group_id: Option<i64>,
    pub title: String,
    pub date: CalendarDate,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub notification_minutes: i64,
    pub repeat: RecurrenceRule,
}

impl Event {
    /// Assign identity to a form, turning it into a stored event.
    pub fn materialize(form: EventForm, id: i64) -> Self {
        Self {
            id,
            group_id: None,
            title: form.title,
            date: form.date,
            start_time: form.start_time,
            end_time: form.end_time,
            description: form.description,
            location: form.location,
            category: form.category,
            notification_minutes: form.notification_minutes,
            repeat: form.repeat,
        }
    }

    /// Check if this event came from a repeating schedule
    pub fn is_repeating(&self) -> bool {
        self.repeat.repeat_type.is_repeating()
    }
}

/// Builder for creating event forms with optional fields
pub struct EventFormBuilder {
    title: Option<String>,
    date: Option<CalendarDate>,
    start_time: String,
    end_time: String,
    description: String,
    location: String,
    category: String,
    notification_minutes: i64,
    repeat: RecurrenceRule,
}

impl EventFormBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            date: None,
            start_time: String::new(),
            end_time: String::new(),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            notification_minutes: 0,
            repeat: RecurrenceRule::none(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn date(mut self, date: CalendarDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = end_time.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn notification_minutes(mut self, minutes: i64) -> Self {
        self.notification_minutes = minutes;
        self
    }

    pub fn repeat(mut self, repeat: RecurrenceRule) -> Self {
        self.repeat = repeat;
        self
    }

    /// Build the form
    pub fn build(self) -> Result<EventForm, String> {
        let title = self.title.ok_or("Event title is required")?;
        let date = self.date.ok_or("Event date is required")?;

        let form = EventForm {
            title,
            date,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
            location: self.location,
            category: self.category,
            notification_minutes: self.notification_minutes,
            repeat: self.repeat,
        };

        form.validate()?;
        Ok(form)
    }
}

impl Default for EventFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}
