use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::ScheduledPaper;
use crate::utils::fold_case;

/// Viewer selection applied to the schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    /// Selected days; `None` selects every day.
    pub days: Option<BTreeSet<NaiveDate>>,
    /// Free-text keywords, one term per space separated word.
    pub keywords: String,
    /// Selected popular tags.
    pub tags: Vec<String>,
}

impl ScheduleFilter {
    pub fn includes_day(&self, day: NaiveDate) -> bool {
        self.days.as_ref().map_or(true, |days| days.contains(&day))
    }

    /// Case-folded search terms: custom keywords followed by selected tags.
    pub fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = Vec::new();
        let candidates = self
            .keywords
            .split(' ')
            .chain(self.tags.iter().map(String::as_str));

        for term in candidates {
            let term = fold_case(term.trim());
            if !term.is_empty() && !terms.contains(&term) {
                terms.push(term);
            }
        }
        terms
    }

    /// True if every term occurs in the paper's title or keywords.
    ///
    /// Both sides are compared in [`fold_case`] form, the same form tag
    /// names are counted in.
    pub fn matches_terms(paper: &ScheduledPaper, terms: &[String]) -> bool {
        if terms.is_empty() {
            return true;
        }
        let title = fold_case(&paper.title);
        let keywords = fold_case(&paper.keywords);
        terms
            .iter()
            .all(|term| title.contains(term.as_str()) || keywords.contains(term.as_str()))
    }
}
