//! Turns time slots into HTML-ready tables.
//!
//! Cell values are complete HTML fragments: text is escaped and search terms
//! are wrapped in `<b>` by [`Highlighter`].

use crate::models::ScheduledPaper;
use crate::schedule::TimeSlot;
use crate::utils::{escape_html, Highlighter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Room,
    Title,
    Abstract,
    Keywords,
    Calendar,
}

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Room => "Room",
            Column::Title => "Title",
            Column::Abstract => "Abstract",
            Column::Keywords => "Keywords",
            Column::Calendar => "📅",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOptions {
    pub show_abstract: bool,
    pub show_keywords: bool,
}

impl TableOptions {
    pub fn columns(&self) -> Vec<Column> {
        let mut columns = vec![Column::Room, Column::Title];
        if self.show_abstract {
            columns.push(Column::Abstract);
        }
        if self.show_keywords {
            columns.push(Column::Keywords);
        }
        columns.push(Column::Calendar);
        columns
    }
}

/// One rendered slot: a heading plus rows of HTML cells aligned with `headers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTable {
    pub heading: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl SlotTable {
    pub fn build(slot: &TimeSlot<'_>, options: TableOptions, highlighter: &Highlighter) -> Self {
        let columns = options.columns();
        let rows = slot
            .papers
            .iter()
            .map(|paper| {
                columns
                    .iter()
                    .map(|column| render_cell(paper, *column, highlighter))
                    .collect()
            })
            .collect();

        Self {
            heading: slot.heading(),
            headers: columns.iter().map(Column::header).collect(),
            rows,
        }
    }

    pub fn build_all(
        slots: &[TimeSlot<'_>],
        options: TableOptions,
        highlighter: &Highlighter,
    ) -> Vec<Self> {
        slots
            .iter()
            .map(|slot| Self::build(slot, options, highlighter))
            .collect()
    }
}

fn render_cell(paper: &ScheduledPaper, column: Column, highlighter: &Highlighter) -> String {
    match column {
        Column::Room => format!(
            "<div style='white-space: nowrap'>{}</div>",
            escape_html(&paper.room)
        ),
        Column::Title => format!(
            "<a href='{}'>{}</a>",
            escape_html(&paper.link),
            highlighter.render(&paper.title)
        ),
        Column::Abstract => highlighter.render(&paper.abstract_text),
        Column::Keywords => highlighter.render(&paper.keywords),
        Column::Calendar => format!(
            "<a href='{}' title='Add to calendar'>➕</a>",
            escape_html(&paper.calendar_link)
        ),
    }
}
