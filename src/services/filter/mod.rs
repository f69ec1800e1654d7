//! View filtering for stored events.
//! Narrows an event collection to a week or month window around a reference
//! date, intersected with a free-text search.

use serde::{Deserialize, Serialize};

use crate::models::calendar_date::CalendarDate;
use crate::models::event::Event;
use crate::utils::date::{month_bounds, week_bounds};

/// Which window the calendar is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Week,
    Month,
}

/// Filter events down to those matching the search term and falling inside
/// the view window around the reference date.
///
/// The week window runs Sunday through Saturday; the month window covers the
/// full calendar month. Both boundaries are inclusive. The two predicates
/// compose with AND, an empty search term matches every event, and input
/// order is preserved.
pub fn filtered_events(
    events: &[Event],
    search_term: &str,
    reference: CalendarDate,
    view: CalendarView,
) -> Vec<Event> {
    let (window_start, window_end) = match view {
        CalendarView::Week => week_bounds(reference),
        CalendarView::Month => month_bounds(reference),
    };

    events
        .iter()
        .filter(|event| matches_term(event, search_term))
        .filter(|event| event.date >= window_start && event.date <= window_end)
        .cloned()
        .collect()
}

/// Case-insensitive substring match against title, description, or location.
fn matches_term(event: &Event, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    contains_term(&event.title, &needle)
        || contains_term(&event.description, &needle)
        || contains_term(&event.location, &needle)
}

fn contains_term(target: &str, needle: &str) -> bool {
    target.to_lowercase().contains(needle)
}
