mod program;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use timetable::utils::{parse_date, room_code};
use timetable::{Paper, RoomMap};

use crate::program::parse_program;

#[derive(Parser, Debug)]
#[command(name = "scrape_program")]
#[command(about = "Extract papers.json and rooms.json from technical program pages")]
struct Args {
    /// Program pages to read, one per conference day (local files or http(s) URLs)
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Directory to write papers.json and rooms.json into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Dry run - report what was found without writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut papers: Vec<Paper> = Vec::new();
    let mut rooms = RoomMap::new();

    for input in &args.inputs {
        info!("=== Processing {} ===", input);
        let html = fetch_page(input)?;
        let page = parse_program(&html).with_context(|| format!("Failed to parse {}", input))?;

        if let Err(e) = parse_date(&page.date) {
            warn!("{}: {}", input, e);
        }
        info!(
            "Found {} papers and {} sessions for {}",
            page.papers.len(),
            page.rooms.len(),
            page.date
        );

        papers.extend(page.papers);
        rooms.extend(page.rooms);
    }

    for paper in &papers {
        match room_code(&paper.id) {
            Some(code) if rooms.contains_key(code) => {}
            Some(code) => warn!("{} refers to unknown session {}", paper.id, code),
            None => warn!("{} has no session code", paper.id),
        }
    }

    if args.dry_run {
        for paper in &papers {
            info!("  - {} [{} {}] {}", paper.id, paper.date, paper.time, paper.title);
        }
        info!("Dry run: {} papers, {} sessions not written", papers.len(), rooms.len());
        return Ok(());
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    // sorted keys keep the output diffable between runs
    let rooms: BTreeMap<String, String> = rooms.into_iter().collect();
    write_json(&args.out_dir.join("papers.json"), &papers)?;
    write_json(&args.out_dir.join("rooms.json"), &rooms)?;

    info!(
        "Wrote {} papers and {} sessions to {}",
        papers.len(),
        rooms.len(),
        args.out_dir.display()
    );
    Ok(())
}

fn fetch_page(input: &str) -> Result<String> {
    if input.starts_with("http://") || input.starts_with("https://") {
        info!("Fetching: {}", input);
        let response = reqwest::blocking::get(input)
            .with_context(|| format!("Failed to fetch {}", input))?
            .error_for_status()
            .with_context(|| format!("Bad response from {}", input))?;
        return response
            .text()
            .with_context(|| format!("Failed to read body of {}", input));
    }

    fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
