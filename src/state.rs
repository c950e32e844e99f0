use std::sync::Arc;

use crate::config::Config;
use crate::schedule::Schedule;

/// Shared, read-only application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub schedule: Arc<Schedule>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(schedule: Schedule, config: Config) -> Self {
        Self {
            schedule: Arc::new(schedule),
            config: Arc::new(config),
        }
    }
}
