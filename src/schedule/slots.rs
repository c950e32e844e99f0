//! Grouping of rows into time slots for display.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::ScheduledPaper;
use crate::utils::round_down;

/// Half-open interval `[start, end)` of start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at < self.end
    }
}

/// Papers sharing one start time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot<'a> {
    pub start: NaiveDateTime,
    pub papers: Vec<&'a ScheduledPaper>,
}

impl TimeSlot<'_> {
    /// `Mon 10:00`
    pub fn heading(&self) -> String {
        self.start.format("%a %H:%M").to_string()
    }
}

/// The live view: from `now` rounded down to the slot size, `length` ahead.
///
/// `None` when the window would end past the last representable time.
pub fn live_window(now: NaiveDateTime, slot: Duration, length: Duration) -> Option<TimeWindow> {
    let start = round_down(now, slot);
    let end = start.checked_add_signed(length)?;
    Some(TimeWindow { start, end })
}

pub fn slots_for_day<'a>(rows: &[&'a ScheduledPaper], day: NaiveDate) -> Vec<TimeSlot<'a>> {
    group_by_start(rows.iter().copied().filter(|p| p.date() == day).collect())
}

pub fn slots_in_window<'a>(rows: &[&'a ScheduledPaper], window: TimeWindow) -> Vec<TimeSlot<'a>> {
    group_by_start(rows.iter().copied().filter(|p| window.contains(p.start)).collect())
}

fn group_by_start(mut rows: Vec<&ScheduledPaper>) -> Vec<TimeSlot<'_>> {
    // stable: rows starting together keep program order
    rows.sort_by_key(|p| p.start);

    let mut slots: Vec<TimeSlot<'_>> = Vec::new();
    for row in rows {
        match slots.last_mut() {
            Some(slot) if slot.start == row.start => slot.papers.push(row),
            _ => slots.push(TimeSlot {
                start: row.start,
                papers: vec![row],
            }),
        }
    }
    slots
}
