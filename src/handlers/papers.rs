use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::handlers::params::TimetableParams;
use crate::models::{ConferenceDay, ScheduledPaper, Tag};
use crate::state::AppState;

/// Filtered schedule
#[derive(Debug, Serialize, ToSchema)]
pub struct PaperListResponse {
    pub shown: usize,
    pub total: usize,
    /// Lowercased search terms that were applied
    pub terms: Vec<String>,
    pub papers: Vec<ScheduledPaper>,
}

#[utoipa::path(
    get,
    path = "/api/papers",
    tag = "papers",
    params(
        ("day" = Option<Vec<String>>, Query, description = "Selected day (YYYY-MM-DD), repeatable; all days when absent unless submitted is set"),
        ("tag" = Option<Vec<String>>, Query, description = "Selected tag, repeatable"),
        ("keywords" = Option<String>, Query, description = "Space separated search terms"),
        ("submitted" = Option<String>, Query, description = "Set to 1 to honor an empty day selection (no days)"),
    ),
    responses(
        (status = 200, description = "Papers matching the filter, in program order", body = PaperListResponse),
        (status = 400, description = "Malformed day")
    )
)]
pub async fn list_papers(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PaperListResponse>, StatusCode> {
    let params = TimetableParams::from_pairs(pairs);
    let filter = params.filter()?;
    let selection = state.schedule.select(&filter);

    Ok(Json(PaperListResponse {
        shown: selection.shown(),
        total: selection.total,
        terms: selection.terms,
        papers: selection.papers.into_iter().cloned().collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/tags",
    tag = "papers",
    responses(
        (status = 200, description = "Keyword tags, most popular first", body = Vec<Tag>)
    )
)]
pub async fn list_tags(State(state): State<AppState>) -> Json<Vec<Tag>> {
    Json(state.schedule.tags().to_vec())
}

#[utoipa::path(
    get,
    path = "/api/days",
    tag = "papers",
    responses(
        (status = 200, description = "Conference days in calendar order", body = Vec<ConferenceDay>)
    )
)]
pub async fn list_days(State(state): State<AppState>) -> Json<Vec<ConferenceDay>> {
    Json(state.schedule.days().to_vec())
}
