use crate::models::calendar_date::CalendarDate;
use crate::models::event::EventForm;

use super::utils::{caps_reached, date_for};

/// Occurrences on the anchor's month and day, every `interval` years.
///
/// A February 29 anchor only lands in leap years; non-leap target years are
/// skipped without disturbing the year cadence. The year is carried as i64
/// so a maximal interval steps forward cleanly until it leaves the
/// representable date range.
pub(super) fn generate(form: &EventForm, end: CalendarDate) -> Vec<EventForm> {
    let mut occurrences = Vec::new();
    let anchor = form.date;
    let mut year = i64::from(anchor.year());
    let mut steps = 0usize;

    loop {
        if caps_reached(steps, occurrences.len()) {
            break;
        }

        // The marker fails once the candidate year leaves the representable
        // range; past the end date no later year can produce anything.
        let Some(month_start) = date_for(year, anchor.month(), 1) else {
            break;
        };
        if month_start > end {
            break;
        }

        // None here means Feb 29 in a non-leap year: skip, keep the cadence
        if let Some(candidate) = date_for(year, anchor.month(), anchor.day()) {
            if candidate <= end {
                occurrences.push(form.with_date(candidate));
            }
        }

        year += i64::from(form.repeat.interval);
        steps += 1;
    }

    occurrences
}
