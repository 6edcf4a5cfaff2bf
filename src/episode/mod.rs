mod display;
mod duration;

pub use display::Episode;
pub use duration::{format_duration, parse_duration};
