//! Event persistence service.
//! Stores generated occurrences in SQLite and exposes the single/batch
//! create split, group deletion, and lookup operations, organized across
//! focused submodules.

use rusqlite::Connection;

pub mod crud;
pub mod queries;
mod shared;

/// Service for managing stored event occurrences.
pub struct EventService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> EventService<'a> {
    /// Create a new EventService with a database connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}
