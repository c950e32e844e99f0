//! Runtime configuration read from the environment (after `.env` is loaded).

use std::env;
use std::path::PathBuf;

use chrono::Duration;
use tracing::Level;

use crate::error::{Result, ScheduleError};

pub const DEFAULT_TITLE: &str = "IROS 2022 Paper Timetable";

/// Largest accepted slot size: one day.
pub const MAX_SLOT_MINUTES: i64 = 24 * 60;
/// Largest accepted live window: one week.
pub const MAX_LIVE_WINDOW_MINUTES: i64 = 7 * 24 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub papers_path: PathBuf,
    pub rooms_path: PathBuf,
    pub bind_addr: String,
    pub title: String,
    /// Granularity the live view rounds the current time down to.
    pub slot_minutes: i64,
    /// How far ahead of the current slot the live view reaches.
    pub live_window_minutes: i64,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            papers_path: PathBuf::from("papers.json"),
            rooms_path: PathBuf::from("rooms.json"),
            bind_addr: String::from("0.0.0.0:3000"),
            title: String::from(DEFAULT_TITLE),
            slot_minutes: 10,
            live_window_minutes: 60,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let papers_path = env::var("TIMETABLE_PAPERS")
            .map(PathBuf::from)
            .unwrap_or(defaults.papers_path);
        let rooms_path = env::var("TIMETABLE_ROOMS")
            .map(PathBuf::from)
            .unwrap_or(defaults.rooms_path);
        let bind_addr = env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let title = env::var("TIMETABLE_TITLE").unwrap_or(defaults.title);

        let slot_minutes =
            minutes_var("TIMETABLE_SLOT_MINUTES", defaults.slot_minutes, MAX_SLOT_MINUTES)?;
        let live_window_minutes = minutes_var(
            "TIMETABLE_LIVE_WINDOW_MINUTES",
            defaults.live_window_minutes,
            MAX_LIVE_WINDOW_MINUTES,
        )?;

        let log_level = match env::var("LOG_LEVEL") {
            Ok(raw) => raw
                .parse::<Level>()
                .map_err(|_| ScheduleError::Config(format!("LOG_LEVEL '{}' is not a level", raw)))?,
            Err(_) => defaults.log_level,
        };

        Ok(Self {
            papers_path,
            rooms_path,
            bind_addr,
            title,
            slot_minutes,
            live_window_minutes,
            log_level,
        })
    }

    // Clamped so that hand-built configs stay in range too.
    pub fn slot(&self) -> Duration {
        Duration::minutes(self.slot_minutes.clamp(1, MAX_SLOT_MINUTES))
    }

    pub fn live_window(&self) -> Duration {
        Duration::minutes(self.live_window_minutes.clamp(1, MAX_LIVE_WINDOW_MINUTES))
    }
}

fn minutes_var(name: &str, default: i64, max: i64) -> Result<i64> {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse::<i64>() {
            Ok(minutes) if (1..=max).contains(&minutes) => Ok(minutes),
            _ => Err(ScheduleError::Config(format!(
                "{} must be between 1 and {} minutes, got '{}'",
                name, max, raw
            ))),
        },
        Err(_) => Ok(default),
    }
}
