use std::path::PathBuf;

use axum::Router;
use timetable::{create_router, AppState, Config, Schedule};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Configuration pointing at the bundled fixture program
pub fn test_config() -> Config {
    Config {
        papers_path: fixture("papers.json"),
        rooms_path: fixture("rooms.json"),
        title: String::from("Test Timetable"),
        ..Config::default()
    }
}

/// Create the application router for testing
pub fn create_test_app() -> Router {
    let config = test_config();
    let schedule = Schedule::load(&config).expect("Failed to load fixture schedule");
    create_router(AppState::new(schedule, config))
}
