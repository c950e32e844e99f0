use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;
use utoipa::ToSchema;

/// A paper flattened into a timetable row.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ScheduledPaper {
    pub id: String,
    /// Human readable room label, e.g. `1`
    pub room: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Comma separated keyword list as printed in the program
    pub keywords: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Start time as `HH:MM`
    pub time: String,
    /// Scholar search for the title
    pub link: String,
    /// Google Calendar event template
    pub calendar_link: String,
}

impl ScheduledPaper {
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// Normalized keyword with the number of papers listing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Tag {
    pub name: String,
    pub count: usize,
}

impl Tag {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.count)
    }
}

/// A day of the conference, as offered in the day selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
pub struct ConferenceDay {
    pub date: NaiveDate,
}

impl ConferenceDay {
    /// `Monday, 24th Oct`
    pub fn label(&self) -> String {
        format!(
            "{}, {}{} {}",
            self.date.format("%A"),
            self.date.day(),
            ordinal_suffix(self.date.day()),
            self.date.format("%b"),
        )
    }

    /// Query-string value, `YYYY-MM-DD`
    pub fn key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
