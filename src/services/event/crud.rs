use anyhow::{anyhow, Context, Result};
use rusqlite::params;

use super::shared::insert_form;
use super::EventService;
use crate::models::event::{Event, EventForm};
use crate::services::recurrence::generate_instances;

impl EventService<'_> {
    /// Store a submitted form, expanding repeat rules into occurrences.
    ///
    /// Non-repeating forms become a single row with no group; repeating
    /// forms are expanded by the instance generator and batch-created with a
    /// shared group id. Returns everything that was stored.
    pub fn save(&self, form: EventForm) -> Result<Vec<Event>> {
        form.validate().map_err(|e| anyhow!(e))?;

        if form.repeat.repeat_type.is_repeating() {
            let instances = generate_instances(&form)?;
            self.create_batch(&instances)
        } else {
            Ok(vec![self.create(&form)?])
        }
    }

    /// Create a single event row with no group linkage.
    pub fn create(&self, form: &EventForm) -> Result<Event> {
        form.validate().map_err(|e| anyhow!(e))?;

        let id = insert_form(self.conn, form, None)?;
        Ok(Event::materialize(form.clone(), id))
    }

    /// Create a batch of occurrences sharing a fresh group id.
    ///
    /// All rows commit atomically. The group id is the first inserted row's
    /// id; this is where group identity gets assigned, never earlier.
    pub fn create_batch(&self, forms: &[EventForm]) -> Result<Vec<Event>> {
        if forms.is_empty() {
            return Ok(Vec::new());
        }

        let tx = self
            .conn
            .unchecked_transaction()
            .context("Failed to start transaction")?;

        let mut stored = Vec::with_capacity(forms.len());
        let mut group_id: Option<i64> = None;

        for form in forms {
            let id = insert_form(&tx, form, group_id)?;
            if group_id.is_none() {
                tx.execute(
                    "UPDATE events SET group_id = ? WHERE id = ?",
                    params![id, id],
                )
                .context("Failed to assign group id")?;
                group_id = Some(id);
            }

            let mut event = Event::materialize(form.clone(), id);
            event.group_id = group_id;
            stored.push(event);
        }

        tx.commit().context("Failed to commit batch create")?;

        log::info!(
            "Created schedule of {} occurrences (group {})",
            stored.len(),
            group_id.unwrap_or_default()
        );
        Ok(stored)
    }

    /// Update an existing event row in place.
    pub fn update(&self, event: &Event) -> Result<()> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE events SET
                    title = ?, date = ?, start_time = ?, end_time = ?,
                    description = ?, location = ?, category = ?,
                    notification_minutes = ?, repeat_type = ?,
                    repeat_interval = ?, repeat_end_date = ?
                 WHERE id = ?",
                params![
                    event.title,
                    event.date.to_string(),
                    event.start_time,
                    event.end_time,
                    event.description,
                    event.location,
                    event.category,
                    event.notification_minutes,
                    event.repeat.repeat_type.as_str(),
                    event.repeat.interval,
                    event.repeat.end_date.map(|d| d.to_string()),
                    event.id,
                ],
            )
            .context("Failed to update event")?;

        if rows_affected == 0 {
            return Err(anyhow!("Event with id {} not found", event.id));
        }

        Ok(())
    }

    /// Delete a single occurrence. Siblings in the same group are untouched.
    pub fn delete(&self, id: i64) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM events WHERE id = ?", [id])
            .context("Failed to delete event")?;

        if rows_affected == 0 {
            return Err(anyhow!("Event with id {} not found", id));
        }

        Ok(())
    }

    /// Delete every occurrence in a recurrence group, returning the count.
    pub fn delete_group(&self, group_id: i64) -> Result<usize> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM events WHERE group_id = ?", [group_id])
            .context("Failed to delete event group")?;

        log::info!("Deleted {} occurrences from group {}", rows_affected, group_id);
        Ok(rows_affected)
    }
}
