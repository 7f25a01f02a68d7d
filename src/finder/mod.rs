//! Directory finding
//!
//! Walks a root depth-first and reports every directory whose walk path
//! satisfies the configured `MatchMode`. Matches are streamed to a
//! `MatchOutput` sink as they are found, never buffered.

mod config;
mod utils;
mod walker;

pub use config::{ErrorPolicy, FinderConfig, MatchMode, PathStyle};
pub use utils::clean_root;
pub use walker::{DirFinder, FindError, FoundDir, MatchOutput};
