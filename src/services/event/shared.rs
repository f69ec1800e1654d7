use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};

use crate::models::calendar_date::CalendarDate;
use crate::models::event::{Event, EventForm};
use crate::models::recurrence::{RecurrenceRule, RecurrenceType};

/// Insert a form as a new row, returning the assigned row id.
pub(super) fn insert_form(
    conn: &Connection,
    form: &EventForm,
    group_id: Option<i64>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO events (
            group_id, title, date, start_time, end_time,
            description, location, category, notification_minutes,
            repeat_type, repeat_interval, repeat_end_date
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            group_id,
            form.title,
            form.date.to_string(),
            form.start_time,
            form.end_time,
            form.description,
            form.location,
            form.category,
            form.notification_minutes,
            form.repeat.repeat_type.as_str(),
            form.repeat.interval,
            form.repeat.end_date.map(|d| d.to_string()),
        ],
    )
    .context("Failed to insert event")?;

    Ok(conn.last_insert_rowid())
}

pub(super) fn map_event_row(row: &Row<'_>) -> Result<Event, rusqlite::Error> {
    Ok(Event {
        id: row.get(0)?,
        group_id: row.get(1)?,
        title: row.get(2)?,
        date: to_calendar_date(row.get::<_, String>(3)?)?,
        start_time: row.get(4)?,
        end_time: row.get(5)?,
        description: row.get(6)?,
        location: row.get(7)?,
        category: row.get(8)?,
        notification_minutes: row.get(9)?,
        repeat: RecurrenceRule {
            repeat_type: to_recurrence_type(row.get::<_, String>(10)?)?,
            interval: row.get(11)?,
            end_date: row
                .get::<_, Option<String>>(12)?
                .map(to_calendar_date)
                .transpose()?,
        },
    })
}

pub(super) fn to_calendar_date(value: String) -> Result<CalendarDate, rusqlite::Error> {
    CalendarDate::parse(&value)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

fn to_recurrence_type(value: String) -> Result<RecurrenceType, rusqlite::Error> {
    RecurrenceType::parse(&value)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}
