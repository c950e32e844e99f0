//! Outbound links attached to every timetable row.

use std::fmt::Write;

use chrono::NaiveDateTime;

const SCHOLAR_SEARCH: &str = "https://scholar.google.com/scholar?q=";
const CALENDAR_TEMPLATE: &str = "https://www.google.com/calendar/render?action=TEMPLATE";
const CALENDAR_STAMP: &str = "%Y%m%dT%H%M%S";

/// Percent-encode everything except ASCII alphanumerics and `_.-~/`.
///
/// ```
/// use timetable::utils::quote;
///
/// assert_eq!(quote("Grasp & Place"), "Grasp%20%26%20Place");
/// assert_eq!(quote("a/b"), "a/b");
/// ```
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-' | b'~' | b'/' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{:02X}", byte);
            }
        }
    }
    out
}

pub fn scholar_link(title: &str) -> String {
    format!("{}{}", SCHOLAR_SEARCH, quote(title))
}

/// Google Calendar "add event" link for a talk.
pub fn calendar_link(
    title: &str,
    details: &str,
    location: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> String {
    format!(
        "{}&text={}&details={}&location={}&dates={}%2F{}",
        CALENDAR_TEMPLATE,
        quote(title),
        quote(details),
        quote(location),
        start.format(CALENDAR_STAMP),
        end.format(CALENDAR_STAMP),
    )
}
