//! Room code extraction and label cleanup.
//!
//! Paper ids look like `Paper MoA-1.3`: the second token names the session
//! (`MoA-1`) and its position within it (`3`). Sessions map to headers such as
//! `Regular session, Kyoto (Room 1)` in the room mapping.

use crate::error::{Result, ScheduleError};
use crate::models::RoomMap;

/// Extract the session/room code from a paper id.
///
/// ```
/// use timetable::utils::room_code;
///
/// assert_eq!(room_code("Paper MoA-1.3"), Some("MoA-1"));
/// assert_eq!(room_code("MoA-1.3"), None);
/// ```
pub fn room_code(id: &str) -> Option<&str> {
    let token = id.split_whitespace().nth(1)?;
    token.split('.').next().filter(|code| !code.is_empty())
}

/// Reduce a session header to the room shown in the table.
///
/// Takes the text between the first `(` and the last `)`, then drops the
/// `Room ` prefix. Headers without parentheses are used whole.
///
/// ```
/// use timetable::utils::room_label;
///
/// assert_eq!(room_label("Regular session, Kyoto (Room 1)"), "1");
/// assert_eq!(room_label("Room Annex"), "Annex");
/// ```
pub fn room_label(raw: &str) -> String {
    let inner = match (raw.find('('), raw.rfind(')')) {
        (Some(open), Some(close)) if open < close => &raw[open + 1..close],
        _ => raw,
    };
    inner.replace("Room ", "").trim().to_string()
}

/// Resolve the display room of a paper id against the room mapping.
pub fn resolve_room(id: &str, rooms: &RoomMap) -> Result<String> {
    let code = room_code(id).ok_or_else(|| ScheduleError::MissingRoomCode(id.to_string()))?;

    rooms
        .get(code)
        .map(|label| room_label(label))
        .ok_or_else(|| ScheduleError::UnknownRoom {
            id: id.to_string(),
            code: code.to_string(),
        })
}
