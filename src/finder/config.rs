//! Configuration types for directory finding

/// How a visited directory's walk path is compared against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Walk path equals the target exactly
    #[default]
    Exact,
    /// Walk path starts with the target
    Prefix,
    /// Walk path ends with the target
    Suffix,
    /// Walk path contains the target
    Contains,
    /// Every directory matches, the target is ignored
    All,
}

impl MatchMode {
    /// Resolve the active mode from the raw CLI flags.
    ///
    /// Match-all overrides everything else. Otherwise prefix wins over
    /// suffix, which wins over contains; with none set the mode is exact.
    pub fn resolve(prefix: bool, suffix: bool, contains: bool, all: bool) -> Self {
        if all {
            MatchMode::All
        } else if prefix {
            MatchMode::Prefix
        } else if suffix {
            MatchMode::Suffix
        } else if contains {
            MatchMode::Contains
        } else {
            MatchMode::Exact
        }
    }

    /// Whether this mode consumes a target argument.
    pub fn needs_target(&self) -> bool {
        !matches!(self, MatchMode::All)
    }

    pub fn matches(&self, subject: &str, target: &str) -> bool {
        match self {
            MatchMode::Exact => subject == target,
            MatchMode::Prefix => subject.starts_with(target),
            MatchMode::Suffix => subject.ends_with(target),
            MatchMode::Contains => subject.contains(target),
            MatchMode::All => true,
        }
    }
}

/// What to do when a directory entry can't be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Skip the entry and keep walking
    #[default]
    Skip,
    /// Abandon the walk of the current root
    Stop,
}

/// Which form of path is reported for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    /// Relative to the root that produced the match (`.` for the root)
    #[default]
    Relative,
    /// Absolute, made so against the current directory
    Absolute,
}

/// Configuration for a directory find.
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    pub mode: MatchMode,
    /// Ignored when `mode` is `MatchMode::All`
    pub target: String,
    /// Maximum walk path depth (separators plus one); `None` walks the whole tree
    pub max_depth: Option<usize>,
    pub on_error: ErrorPolicy,
    pub path_style: PathStyle,
}

impl FinderConfig {
    /// Convert the CLI depth convention (0 = unlimited) to an optional limit.
    pub fn depth_limit(depth: usize) -> Option<usize> {
        if depth == 0 { None } else { Some(depth) }
    }

    pub fn is_match(&self, walk_path: &str) -> bool {
        self.mode.matches(walk_path, &self.target)
    }

    /// Check if a walk path depth is past the limit (pruned, not reported)
    pub fn exceeds_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}
