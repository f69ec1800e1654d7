// Service layer

pub mod database;
pub mod event;
pub mod filter;
pub mod recurrence;
