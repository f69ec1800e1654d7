// Integration tests for the schedule-create / store / filter flow
use calendar_scheduler::models::calendar_date::CalendarDate;
use calendar_scheduler::models::event::EventForm;
use calendar_scheduler::models::recurrence::{RecurrenceRule, RecurrenceType};
use calendar_scheduler::services::database::Database;
use calendar_scheduler::services::event::EventService;
use calendar_scheduler::services::filter::{filtered_events, CalendarView};

fn date(raw: &str) -> CalendarDate {
    CalendarDate::parse(raw).expect("test date should parse")
}

/// Surface service logging under RUST_LOG; safe to call from every test.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_repeating_schedule_lifecycle() {
    init_logging();
    let db = Database::new(":memory:").expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    let service = EventService::new(db.connection());

    // Create a biweekly schedule through January
    let form = EventForm::builder()
        .title("Sprint Planning")
        .date(date("2024-01-01"))
        .start_time("10:00")
        .end_time("11:30")
        .location("Room 4")
        .repeat(RecurrenceRule::new(
            RecurrenceType::Weekly,
            2,
            Some(date("2024-02-01")),
        ))
        .build()
        .expect("form should validate");

    let stored = service.save(form).expect("save should succeed");
    let dates: Vec<String> = stored.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-15", "2024-01-29"]);

    let group_id = stored[0].group_id.expect("batch gets a group id");

    // A one-off event in the same month, outside the schedule
    let one_off = EventForm::builder()
        .title("Dentist")
        .date(date("2024-01-16"))
        .build()
        .expect("form should validate");
    service.save(one_off).expect("save should succeed");

    // Week view around Jan 15 (Sun Jan 14 .. Sat Jan 20) sees one occurrence
    // plus the one-off
    let all = service.list_all().expect("list should succeed");
    let week = filtered_events(&all, "", date("2024-01-15"), CalendarView::Week);
    let titles: Vec<&str> = week.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Sprint Planning", "Dentist"]);

    // Text search narrows within the month window
    let month = filtered_events(&all, "sprint", date("2024-01-15"), CalendarView::Month);
    assert_eq!(month.len(), 3);

    // Editing one occurrence leaves its siblings alone
    let mut second = stored[1].clone();
    second.location = "Room 9".to_string();
    service.update(&second).expect("update should succeed");
    let siblings = service.find_by_group(group_id).expect("lookup should succeed");
    assert_eq!(siblings[0].location, "Room 4");
    assert_eq!(siblings[1].location, "Room 9");

    // Removing the group clears the schedule but keeps the one-off
    service.delete_group(group_id).expect("delete should succeed");
    let remaining = service.list_all().expect("list should succeed");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Dentist");
}

#[test]
fn test_monthly_day_31_schedule_persists_only_valid_months() {
    init_logging();
    let db = Database::new(":memory:").expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    let service = EventService::new(db.connection());

    let form = EventForm::builder()
        .title("Rent Due")
        .date(date("2024-01-31"))
        .repeat(RecurrenceRule::new(
            RecurrenceType::Monthly,
            1,
            Some(date("2024-06-30")),
        ))
        .build()
        .expect("form should validate");

    let stored = service.save(form).expect("save should succeed");
    let dates: Vec<String> = stored.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-01-31", "2024-03-31", "2024-05-31"]);

    // March's month view shows exactly the March occurrence
    let all = service.list_all().expect("list should succeed");
    let march = filtered_events(&all, "", date("2024-03-10"), CalendarView::Month);
    assert_eq!(march.len(), 1);
    assert_eq!(march[0].date.to_string(), "2024-03-31");

    // April has nothing: day 31 never landed there
    let april = filtered_events(&all, "", date("2024-04-10"), CalendarView::Month);
    assert!(april.is_empty());
}

#[test]
fn test_stored_events_round_trip_through_reload() {
    init_logging();
    let db = Database::new(":memory:").expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    let service = EventService::new(db.connection());

    let form = EventForm::builder()
        .title("Anniversary")
        .date(date("2024-02-29"))
        .description("Leap day only")
        .category("Personal")
        .notification_minutes(60)
        .repeat(RecurrenceRule::new(
            RecurrenceType::Yearly,
            1,
            Some(date("2030-02-28")),
        ))
        .build()
        .expect("form should validate");

    let stored = service.save(form).expect("save should succeed");
    assert_eq!(stored.len(), 2);

    let reloaded = service.list_all().expect("list should succeed");
    assert_eq!(reloaded, stored);
    assert_eq!(reloaded[1].date.to_string(), "2028-02-29");
    assert_eq!(reloaded[1].notification_minutes, 60);
}
