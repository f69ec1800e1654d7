use crate::models::calendar_date::CalendarDate;
use crate::models::event::EventForm;

use super::utils::{advance_months, caps_reached, date_for};

/// Occurrences on the anchor's day-of-month, every `interval` calendar
/// months.
///
/// Months shorter than the anchor day are skipped outright (a day-31 anchor
/// only lands in 31-day months; nothing shifts to month-end). Skipping never
/// disturbs the cadence: the next candidate month is always `interval` months
/// after the previous one.
pub(super) fn generate(form: &EventForm, end: CalendarDate) -> Vec<EventForm> {
    let mut occurrences = Vec::new();
    let anchor = form.date;
    let (mut year, mut month) = (i64::from(anchor.year()), anchor.month());
    let mut steps = 0usize;

    loop {
        if caps_reached(steps, occurrences.len()) {
            break;
        }

        // A candidate year outside the representable range ends generation.
        // Once the candidate month opens past the end date no later month
        // can produce anything either.
        let Some(month_start) = date_for(year, month, 1) else {
            break;
        };
        if month_start > end {
            break;
        }

        // None here means the month is too short for the anchor day:
        // skip it without disturbing the cadence
        if let Some(candidate) = date_for(year, month, anchor.day()) {
            if candidate <= end {
                occurrences.push(form.with_date(candidate));
            }
        }

        let (next_year, next_month) = advance_months(year, month, form.repeat.interval);
        if (next_year, next_month) == (year, month) {
            log::warn!("monthly cadence failed to advance past {year}-{month:02}, stopping");
            break;
        }
        year = next_year;
        month = next_month;
        steps += 1;
    }

    occurrences
}
