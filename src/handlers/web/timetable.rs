use askama::Template;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use chrono::Local;

use crate::handlers::params::TimetableParams;
use crate::schedule::{live_window, slots_for_day, slots_in_window, SlotTable};
use crate::state::AppState;
use crate::utils::Highlighter;

#[derive(Template)]
#[template(path = "timetable.html")]
struct TimetableTemplate {
    title: String,
    days: Vec<DayOption>,
    tags: Vec<TagOption>,
    keywords: String,
    show_abstract: bool,
    show_keywords: bool,
    body: TimetableBody,
}

#[derive(Template)]
#[template(path = "timetable_partial.html")]
struct TimetablePartialTemplate {
    body: TimetableBody,
}

struct TimetableBody {
    shown: usize,
    total: usize,
    sections: Vec<TimetableSection>,
}

/// A collapsible group of slot tables ("All" or "Live").
struct TimetableSection {
    name: &'static str,
    note: String,
    empty_message: &'static str,
    tables: Vec<SlotTable>,
}

struct DayOption {
    key: String,
    label: String,
    selected: bool,
}

struct TagOption {
    name: String,
    label: String,
    selected: bool,
}

pub async fn timetable(
    Query(pairs): Query<Vec<(String, String)>>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, StatusCode> {
    let params = TimetableParams::from_pairs(pairs);
    let filter = params.filter()?;
    let now = params.now()?.unwrap_or_else(|| Local::now().naive_local());

    let schedule = &state.schedule;
    let selection = schedule.select(&filter);
    let highlighter = Highlighter::new(selection.terms.as_slice());
    let options = params.table_options();

    let mut all_tables = Vec::new();
    if !selection.papers.is_empty() {
        for day in schedule.days().iter().filter(|d| filter.includes_day(d.date)) {
            let slots = slots_for_day(&selection.papers, day.date);
            all_tables.extend(SlotTable::build_all(&slots, options, &highlighter));
        }
    }

    let Some(window) = live_window(now, state.config.slot(), state.config.live_window()) else {
        tracing::warn!("Live window from {} is out of range", now);
        return Err(StatusCode::BAD_REQUEST);
    };
    let live_slots = slots_in_window(&selection.papers, window);
    let live_tables = SlotTable::build_all(&live_slots, options, &highlighter);

    let body = TimetableBody {
        shown: selection.shown(),
        total: selection.total,
        sections: vec![
            TimetableSection {
                name: "All",
                note: String::new(),
                empty_message: "No papers match the current filter.",
                tables: all_tables,
            },
            TimetableSection {
                name: "Live",
                note: format!(
                    "({} to {})",
                    window.start.format("%a %H:%M"),
                    window.end.format("%a %H:%M")
                ),
                empty_message: "Nothing scheduled in this window.",
                tables: live_tables,
            },
        ],
    };

    tracing::debug!(
        "Timetable showing {} of {} papers for terms {:?}",
        body.shown,
        body.total,
        selection.terms
    );

    // Check if this is an HTMX request
    let is_htmx = headers.get("hx-request").is_some();

    let html = if is_htmx {
        TimetablePartialTemplate { body }.render()
    } else {
        let days = schedule
            .days()
            .iter()
            .map(|day| DayOption {
                key: day.key(),
                label: day.label(),
                selected: filter.includes_day(day.date),
            })
            .collect();

        let tags = schedule
            .tags()
            .iter()
            .map(|tag| TagOption {
                name: tag.name.clone(),
                label: tag.label(),
                selected: params.tags.contains(&tag.name),
            })
            .collect();

        TimetableTemplate {
            title: state.config.title.clone(),
            days,
            tags,
            keywords: params.keywords.clone(),
            show_abstract: params.show_abstract,
            show_keywords: params.show_keywords,
            body,
        }
        .render()
    };

    match html {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
