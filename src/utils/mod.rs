pub mod datetime;
pub mod highlight;
pub mod links;
pub mod normalize;
pub mod rooms;
pub mod text;

pub use datetime::{parse_date, parse_time_range, round_down};
pub use highlight::{escape_html, Highlighter};
pub use links::{calendar_link, quote, scholar_link};
pub use normalize::{count_tags, fold_case, normalize_tag};
pub use rooms::{resolve_room, room_code, room_label};
pub use text::{flatten_newlines, split_abstract};
