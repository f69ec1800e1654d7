//! Recurrence instance generation.
//! Expands an event form with a repeat rule into one form per occurrence
//! date, handling short months and leap years per frequency.

use crate::error::SchedulerError;
use crate::models::event::EventForm;
use crate::models::recurrence::RecurrenceType;

mod daily;
mod monthly;
mod utils;
mod weekly;
mod yearly;

/// Hard ceiling on candidate steps examined, emitted or not.
/// Bounds generation if date stepping ever stalls.
pub(crate) const MAX_CANDIDATE_STEPS: usize = 1000;

/// Hard ceiling on emitted occurrences.
pub(crate) const MAX_OCCURRENCES: usize = 365;

/// Expand an event form into its concrete occurrences.
///
/// Returns one form per occurrence date, in strictly increasing date order,
/// each carrying the anchor's template fields verbatim. Occurrences never
/// pass the rule's end date (or the anchor plus one year when no end date is
/// set). A rule of type `None` yields exactly the anchor itself.
///
/// Hitting an internal safety cap is not an error; the occurrences produced
/// so far are returned as a truncated but valid sequence.
pub fn generate_instances(form: &EventForm) -> Result<Vec<EventForm>, SchedulerError> {
    form.repeat.validate()?;

    let end = form.repeat.effective_end(form.date);
    let occurrences = match form.repeat.repeat_type {
        RecurrenceType::None => vec![form.clone()],
        RecurrenceType::Daily => daily::generate(form, end),
        RecurrenceType::Weekly => weekly::generate(form, end),
        RecurrenceType::Monthly => monthly::generate(form, end),
        RecurrenceType::Yearly => yearly::generate(form, end),
    };

    Ok(occurrences)
}
