use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::models::{Paper, RoomMap};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ScheduleError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `papers.json` and `rooms.json`.
pub fn load_sources(papers_path: &Path, rooms_path: &Path) -> Result<(Vec<Paper>, RoomMap)> {
    let papers: Vec<Paper> = read_json(papers_path)?;
    debug!("Read {} papers from {}", papers.len(), papers_path.display());

    let rooms: RoomMap = read_json(rooms_path)?;
    debug!("Read {} rooms from {}", rooms.len(), rooms_path.display());

    Ok((papers, rooms))
}
