// Date utility functions
// Calendar arithmetic shared by the recurrence generator and view filter

use crate::models::calendar_date::CalendarDate;

/// Gregorian leap year check.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Sunday-to-Saturday week containing the given date, both ends inclusive.
pub fn week_bounds(date: CalendarDate) -> (CalendarDate, CalendarDate) {
    let start = date.add_days(-i64::from(date.days_from_sunday()));
    (start, start.add_days(6))
}

/// First and last day of the month containing the given date.
pub fn month_bounds(date: CalendarDate) -> (CalendarDate, CalendarDate) {
    let last_day = days_in_month(date.year(), date.month());
    // both constructions use day values the month is known to contain
    let start = CalendarDate::from_ymd(date.year(), date.month(), 1)
        .unwrap_or(date);
    let end = CalendarDate::from_ymd(date.year(), date.month(), last_day)
        .unwrap_or(date);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(2024, true; "divisible by four")]
    #[test_case(2000, true; "divisible by four hundred")]
    #[test_case(1900, false; "century non leap")]
    #[test_case(2023, false; "plain year")]
    fn test_is_leap_year(year: i32, expected: bool) {
        assert_eq!(is_leap_year(year), expected);
    }

    #[test_case(2024, 1, 31)]
    #[test_case(2024, 2, 29)]
    #[test_case(2023, 2, 28)]
    #[test_case(2024, 4, 30)]
    #[test_case(2024, 12, 31)]
    fn test_days_in_month(year: i32, month: u32, expected: u32) {
        assert_eq!(days_in_month(year, month), expected);
    }

    #[test]
    fn test_week_bounds_wednesday() {
        // 2024-01-10 was a Wednesday; its week is Jan 7 (Sun) .. Jan 13 (Sat)
        let date = CalendarDate::parse("2024-01-10").unwrap();
        let (start, end) = week_bounds(date);
        assert_eq!(start.to_string(), "2024-01-07");
        assert_eq!(end.to_string(), "2024-01-13");
    }

    #[test]
    fn test_week_bounds_on_sunday_starts_same_day() {
        let sunday = CalendarDate::parse("2024-01-07").unwrap();
        let (start, end) = week_bounds(sunday);
        assert_eq!(start, sunday);
        assert_eq!(end.to_string(), "2024-01-13");
    }

    #[test]
    fn test_week_bounds_crosses_month_boundary() {
        // 2025-07-01 was a Tuesday; its week starts in June
        let date = CalendarDate::parse("2025-07-01").unwrap();
        let (start, end) = week_bounds(date);
        assert_eq!(start.to_string(), "2025-06-29");
        assert_eq!(end.to_string(), "2025-07-05");
    }

    #[test]
    fn test_month_bounds() {
        let date = CalendarDate::parse("2025-07-15").unwrap();
        let (start, end) = month_bounds(date);
        assert_eq!(start.to_string(), "2025-07-01");
        assert_eq!(end.to_string(), "2025-07-31");
    }

    #[test]
    fn test_month_bounds_leap_february() {
        let date = CalendarDate::parse("2024-02-10").unwrap();
        let (_, end) = month_bounds(date);
        assert_eq!(end.to_string(), "2024-02-29");
    }
}
