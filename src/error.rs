// Error types shared across the scheduling core

use thiserror::Error;

/// Hard errors surfaced to callers by the scheduling core.
///
/// Safety-cap truncation during recurrence expansion is deliberately not
/// represented here: a truncated sequence is still a valid result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// The input string does not name a real Gregorian calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The recurrence rule cannot drive generation (interval < 1, or an
    /// unrecognized recurrence type).
    #[error("invalid recurrence rule: {0}")]
    InvalidRule(String),
}
