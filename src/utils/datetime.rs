//! Parsing of the program's free-form day headings and time ranges.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{Result, ScheduleError};

/// Day heading formats seen on technical program pages, most specific first.
const DATE_FORMATS: &[&str] = &[
    "%A %B %d, %Y",
    "%A, %B %d, %Y",
    "%B %d, %Y",
    "%Y-%m-%d",
    "%d %B %Y",
    "%A %d %B %Y",
];

const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

/// Parse a program day heading such as `Monday October 24, 2022`.
///
/// ```
/// use chrono::NaiveDate;
/// use timetable::utils::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2022, 10, 24).unwrap();
/// assert_eq!(parse_date("Monday October 24, 2022").unwrap(), expected);
/// assert_eq!(parse_date("2022-10-24").unwrap(), expected);
/// ```
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
        .ok_or_else(|| ScheduleError::InvalidDate(raw.to_string()))
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
}

/// Combine a day with an `HH:MM-HH:MM` range into start and end timestamps.
pub fn parse_time_range(date: NaiveDate, range: &str) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let invalid = || ScheduleError::InvalidTimeRange(range.to_string());

    let (start, end) = range.split_once('-').ok_or_else(invalid)?;
    let start = parse_time(start).ok_or_else(invalid)?;
    let end = parse_time(end).ok_or_else(invalid)?;

    Ok((date.and_time(start), date.and_time(end)))
}

/// Round down to the start of the enclosing `slot`, dropping seconds.
pub fn round_down(at: NaiveDateTime, slot: Duration) -> NaiveDateTime {
    let at = at
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at);

    let slot_minutes = slot.num_minutes().max(1);
    let minute_of_day = i64::from(at.hour()) * 60 + i64::from(at.minute());
    at - Duration::minutes(minute_of_day % slot_minutes)
}
