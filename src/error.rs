use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading and deriving the schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unrecognized date '{0}'")]
    InvalidDate(String),

    #[error("unrecognized time range '{0}'")]
    InvalidTimeRange(String),

    #[error("paper id '{0}' has no room code")]
    MissingRoomCode(String),

    #[error("room code '{code}' of paper '{id}' is not in the room mapping")]
    UnknownRoom { id: String, code: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
