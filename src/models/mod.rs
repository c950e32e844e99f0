pub mod paper;
pub mod schedule;

pub use paper::*;
pub use schedule::*;
