//! The conference schedule: papers flattened into timetable rows.
//!
//! Loading happens once per process; the resulting [`Schedule`] is read-only
//! and shared by every request.

pub mod filter;
pub mod loader;
pub mod render;
pub mod slots;

use std::collections::BTreeSet;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::models::{ConferenceDay, Paper, RoomMap, ScheduledPaper, Tag};
use crate::utils::{
    calendar_link, count_tags, flatten_newlines, parse_date, parse_time_range, resolve_room,
    scholar_link, split_abstract,
};

pub use filter::ScheduleFilter;
pub use loader::load_sources;
pub use render::{Column, SlotTable, TableOptions};
pub use slots::{live_window, slots_for_day, slots_in_window, TimeSlot, TimeWindow};

#[derive(Debug, Clone, Default)]
pub struct Schedule {
    papers: Vec<ScheduledPaper>,
    tags: Vec<Tag>,
    days: Vec<ConferenceDay>,
}

/// Filtered view of the schedule.
#[derive(Debug)]
pub struct Selection<'a> {
    pub papers: Vec<&'a ScheduledPaper>,
    pub terms: Vec<String>,
    pub total: usize,
}

impl Selection<'_> {
    pub fn shown(&self) -> usize {
        self.papers.len()
    }
}

impl Schedule {
    /// Read both input files named by `config` and derive the schedule.
    pub fn load(config: &Config) -> Result<Self> {
        let (papers, rooms) = load_sources(&config.papers_path, &config.rooms_path)?;
        let schedule = Self::from_sources(papers, &rooms)?;
        info!(
            "Loaded {} papers over {} days with {} distinct tags",
            schedule.papers.len(),
            schedule.days.len(),
            schedule.tags.len()
        );
        Ok(schedule)
    }

    pub fn from_sources(papers: Vec<Paper>, rooms: &RoomMap) -> Result<Self> {
        let papers = papers
            .iter()
            .map(|paper| derive_row(paper, rooms))
            .collect::<Result<Vec<_>>>()?;

        let tags = count_tags(papers.iter().map(|p| p.keywords.as_str()));

        let days = papers
            .iter()
            .map(|p| p.date())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|date| ConferenceDay { date })
            .collect();

        Ok(Self { papers, tags, days })
    }

    pub fn papers(&self) -> &[ScheduledPaper] {
        &self.papers
    }

    /// Tags ordered by popularity.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Days with at least one paper, in calendar order.
    pub fn days(&self) -> &[ConferenceDay] {
        &self.days
    }

    pub fn total(&self) -> usize {
        self.papers.len()
    }

    /// Apply day and keyword predicates, keeping program order.
    pub fn select(&self, filter: &ScheduleFilter) -> Selection<'_> {
        let terms = filter.terms();
        let papers = self
            .papers
            .iter()
            .filter(|p| filter.includes_day(p.date()))
            .filter(|p| ScheduleFilter::matches_terms(p, &terms))
            .collect();

        Selection {
            papers,
            terms,
            total: self.total(),
        }
    }
}

/// Flatten one program entry into a timetable row.
pub fn derive_row(paper: &Paper, rooms: &RoomMap) -> Result<ScheduledPaper> {
    let date = parse_date(&paper.date)?;
    let (start, end) = parse_time_range(date, &paper.time)?;
    let room = resolve_room(&paper.id, rooms)?;

    let (abstract_text, keywords) = split_abstract(&paper.abstract_text);
    let title = flatten_newlines(paper.title.trim());
    let abstract_text = flatten_newlines(&abstract_text);
    let keywords = flatten_newlines(&keywords);

    Ok(ScheduledPaper {
        id: paper.id.clone(),
        link: scholar_link(&title),
        calendar_link: calendar_link(&title, &keywords, &room, start, end),
        time: start.format("%H:%M").to_string(),
        room,
        title,
        abstract_text,
        keywords,
        start,
        end,
    })
}
