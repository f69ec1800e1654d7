use crate::models::calendar_date::CalendarDate;
use crate::models::event::EventForm;

use super::utils::step_by_days;

/// Occurrences every `interval` days from the anchor, inclusive of `end`.
pub(super) fn generate(form: &EventForm, end: CalendarDate) -> Vec<EventForm> {
    step_by_days(form, end, i64::from(form.repeat.interval))
}
