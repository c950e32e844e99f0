//! Query-string filter state shared by the page and the JSON API.
//!
//! Day and tag checkboxes submit repeated keys (`day=...&day=...`), so the
//! query is taken as raw pairs and folded here.

use std::collections::BTreeSet;

use axum::http::StatusCode;
use chrono::{NaiveDate, NaiveDateTime};

use crate::schedule::{ScheduleFilter, TableOptions};

const NOW_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimetableParams {
    pub days: Vec<String>,
    pub tags: Vec<String>,
    pub keywords: String,
    pub show_abstract: bool,
    pub show_keywords: bool,
    pub now: Option<String>,
    /// Set by the filter form; an empty day selection then means "no days".
    pub submitted: bool,
}

impl TimetableParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "day" => params.days.push(value),
                "tag" => {
                    if !value.trim().is_empty() {
                        params.tags.push(value)
                    }
                }
                "keywords" => params.keywords = value,
                "show_abstract" => params.show_abstract = is_checked(&value),
                "show_keywords" => params.show_keywords = is_checked(&value),
                "now" if !value.is_empty() => params.now = Some(value),
                "submitted" => params.submitted = is_checked(&value),
                _ => {}
            }
        }
        params
    }

    pub fn filter(&self) -> Result<ScheduleFilter, StatusCode> {
        let days = if self.submitted || !self.days.is_empty() {
            let parsed = self
                .days
                .iter()
                .map(|day| {
                    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| StatusCode::BAD_REQUEST)
                })
                .collect::<Result<BTreeSet<_>, _>>()?;
            Some(parsed)
        } else {
            None
        };

        Ok(ScheduleFilter {
            days,
            keywords: self.keywords.clone(),
            tags: self.tags.clone(),
        })
    }

    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            show_abstract: self.show_abstract,
            show_keywords: self.show_keywords,
        }
    }

    /// Clock override for previewing the live view.
    pub fn now(&self) -> Result<Option<NaiveDateTime>, StatusCode> {
        let Some(raw) = self.now.as_deref() else {
            return Ok(None);
        };
        NOW_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
            .map(Some)
            .ok_or(StatusCode::BAD_REQUEST)
    }
}

fn is_checked(value: &str) -> bool {
    matches!(value, "on" | "true" | "1" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_from_pairs() {
        let params = TimetableParams::from_pairs(pairs(&[
            ("day", "2022-10-24"),
            ("day", "2022-10-26"),
            ("tag", "slam"),
            ("tag", ""),
            ("keywords", "grasp legged"),
            ("show_abstract", "on"),
            ("unknown", "x"),
        ]));
        assert_eq!(params.days, vec!["2022-10-24", "2022-10-26"]);
        assert_eq!(params.tags, vec!["slam"]);
        assert_eq!(params.keywords, "grasp legged");
        assert!(!params.submitted);
        assert_eq!(
            params.table_options(),
            TableOptions { show_abstract: true, show_keywords: false }
        );
    }

    #[test]
    fn test_first_visit_selects_all_days() {
        let filter = TimetableParams::default().filter().unwrap();
        assert_eq!(filter.days, None);
    }

    #[test]
    fn test_submitted_without_days_selects_none() {
        let params = TimetableParams::from_pairs(pairs(&[("submitted", "1")]));
        assert_eq!(params.filter().unwrap().days, Some(BTreeSet::new()));
    }

    #[test]
    fn test_invalid_day() {
        let params = TimetableParams::from_pairs(pairs(&[("day", "Monday")]));
        assert_eq!(params.filter().unwrap_err(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_now_override() {
        let params = TimetableParams::from_pairs(pairs(&[("now", "2022-10-24T11:23")]));
        assert_eq!(
            params.now().unwrap(),
            NaiveDate::from_ymd_opt(2022, 10, 24).unwrap().and_hms_opt(11, 23, 0)
        );

        let params = TimetableParams::from_pairs(pairs(&[("now", "later")]));
        assert_eq!(params.now().unwrap_err(), StatusCode::BAD_REQUEST);

        assert_eq!(TimetableParams::default().now().unwrap(), None);
    }
}
