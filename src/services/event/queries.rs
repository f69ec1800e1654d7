use anyhow::Result;

use super::shared::map_event_row;
use super::EventService;
use crate::models::event::Event;

const EVENT_COLUMNS: &str = "id, group_id, title, date, start_time, end_time,
        description, location, category, notification_minutes,
        repeat_type, repeat_interval, repeat_end_date";

impl EventService<'_> {
    /// Retrieve an event by ID.
    pub fn get(&self, id: i64) -> Result<Option<Event>> {
        let result = self.conn.query_row(
            &format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?"),
            [id],
            map_event_row,
        );

        match result {
            Ok(event) => Ok(Some(event)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List every event ordered by date.
    pub fn list_all(&self) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY date ASC, id ASC"
        ))?;

        let events = stmt
            .query_map([], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(events)
    }

    /// List every occurrence belonging to a recurrence group, date order.
    pub fn find_by_group(&self, group_id: i64) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE group_id = ? ORDER BY date ASC, id ASC"
        ))?;

        let events = stmt
            .query_map([group_id], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(events)
    }
}
