pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod schedule;
pub mod state;
pub mod utils;

use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub use config::Config;
pub use error::ScheduleError;
pub use models::{ConferenceDay, Paper, RoomMap, ScheduledPaper, Tag};
pub use schedule::{Schedule, ScheduleFilter};
pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_papers, handlers::list_tags, handlers::list_days),
    components(schemas(handlers::PaperListResponse, ScheduledPaper, Tag, ConferenceDay)),
    tags((name = "papers", description = "Conference schedule"))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router over loaded state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::web::timetable))
        .route("/api/papers", get(handlers::list_papers))
        .route("/api/tags", get(handlers::list_tags))
        .route("/api/days", get(handlers::list_days))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
