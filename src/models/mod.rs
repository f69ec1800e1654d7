// Data models for the scheduling core

pub mod calendar_date;
pub mod event;
pub mod recurrence;
