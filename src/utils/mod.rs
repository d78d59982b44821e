pub mod poise;
pub use poise::Context;

pub mod format_duration;
pub use format_duration::FormatDuration;
