pub mod papers;
pub mod params;
pub mod web;

pub use papers::*;
pub use params::TimetableParams;
