/// Calendar-day helpers
///
/// All completion tracking keys on a plain local calendar day. NaiveDate is
/// the in-memory representation; the textual form is ISO %Y-%m-%d, which is
/// zero-padded and sorts lexicographically in calendar order.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Textual format for a calendar-day identifier
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// The current calendar day in the process's local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render a date as its calendar-day identifier
pub fn day_id(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Parse a calendar-day identifier back into a date
pub fn parse_day_id(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DAY_FORMAT)
}

/// The day exactly n calendar days before the given one
///
/// Crosses month and year boundaries, leap days included.
pub fn days_before(day: NaiveDate, n: u32) -> NaiveDate {
    day - Duration::days(n as i64)
}

/// The last n calendar days ending at `end`, oldest first
pub fn last_n_days_from(end: NaiveDate, n: u32) -> Vec<NaiveDate> {
    (0..n).rev().map(|i| days_before(end, i)).collect()
}

/// The last n calendar days ending today, oldest first
pub fn last_n_days(n: u32) -> Vec<NaiveDate> {
    last_n_days_from(today(), n)
}

/// Abbreviated weekday name for chart labels ("Mon", "Tue", ...)
pub fn weekday_label(day: NaiveDate) -> &'static str {
    match day.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}
