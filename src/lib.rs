//! Shelltools - small helpers for shell scripts: find directories by path, merge PATH lists,
//! build and filter CSV rows, split URLs into fields

pub mod csvcols;
pub mod finder;
pub mod license;
pub mod logging;
pub mod output;
pub mod pathmerge;
pub mod urlparse;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use finder::{
    DirFinder, ErrorPolicy, FindError, FinderConfig, FoundDir, MatchMode, MatchOutput, PathStyle,
};
pub use output::{LineFormatter, OutputConfig};
pub use pathmerge::{MergeAction, merge};
