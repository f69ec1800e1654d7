use crate::models::calendar_date::CalendarDate;
use crate::models::event::EventForm;

use super::{MAX_CANDIDATE_STEPS, MAX_OCCURRENCES};

/// Fixed-day stepping shared by the daily and weekly generators.
/// `step` is the day distance between consecutive occurrences.
pub(super) fn step_by_days(form: &EventForm, end: CalendarDate, step: i64) -> Vec<EventForm> {
    let mut occurrences = Vec::new();
    let mut current = form.date;
    let mut steps = 0usize;

    while current <= end {
        if caps_reached(steps, occurrences.len()) {
            break;
        }

        occurrences.push(form.with_date(current));

        let next = current.add_days(step);
        if next <= current {
            log::warn!("recurrence step failed to advance past {current}, stopping");
            break;
        }
        current = next;
        steps += 1;
    }

    occurrences
}

/// Advance a (year, month) pair by a number of calendar months.
/// Arithmetic is widened so a maximal interval cannot overflow; callers
/// carry the year as i64 and stop once it leaves the supported date range.
pub(super) fn advance_months(year: i64, month: u32, months: u32) -> (i64, u32) {
    let zero_based = i64::from(month - 1) + i64::from(months);
    (year + zero_based / 12, (zero_based % 12 + 1) as u32)
}

/// Build a date from a widened year.
/// None when the year leaves the supported range or the day does not exist
/// in the month.
pub(super) fn date_for(year: i64, month: u32, day: u32) -> Option<CalendarDate> {
    CalendarDate::from_ymd(i32::try_from(year).ok()?, month, day)
}

/// Check the step and occurrence ceilings, logging when one trips.
pub(super) fn caps_reached(steps: usize, emitted: usize) -> bool {
    if steps >= MAX_CANDIDATE_STEPS {
        log::warn!("recurrence expansion hit the step ceiling after {emitted} occurrences");
        return true;
    }
    if emitted >= MAX_OCCURRENCES {
        log::warn!("recurrence expansion hit the occurrence ceiling at {emitted}");
        return true;
    }
    false
}
