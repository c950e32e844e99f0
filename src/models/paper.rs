use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One program entry as found in `papers.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Session-qualified id, e.g. `Paper MoA-1.3`
    pub id: String,
    pub title: String,
    /// `Keywords: ... Abstract: ...` blob
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Day heading of the program page, e.g. `Monday October 24, 2022`
    pub date: String,
    /// `HH:MM-HH:MM`
    pub time: String,
}

/// Room code (e.g. `MoA-1`) to session header label, as found in `rooms.json`.
pub type RoomMap = HashMap<String, String>;
