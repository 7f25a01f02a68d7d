//! Output configuration types

/// Configuration for match output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Prefix each line with the directory's modification time
    pub show_mtime: bool,
}
