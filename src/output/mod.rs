//! Output formatting for found directories

mod config;
mod lines;
mod utils;

pub use config::OutputConfig;
pub use lines::LineFormatter;
pub use utils::{MTIME_FORMAT, format_mtime, format_timestamp};
