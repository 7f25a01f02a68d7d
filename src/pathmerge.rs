//! Merge a directory into a colon-delimited PATH-like list.
//!
//! The directory is deduplicated on every merge: existing components equal
//! to it are removed before it is appended or prepended.

/// Separator between list components.
pub const PATH_DELIMITER: char = ':';

/// What to do with the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeAction {
    #[default]
    Append,
    Prepend,
    /// Remove the directory without adding it back
    Clip,
}

impl MergeAction {
    /// Resolve from CLI flags. Clip wins over both; an explicit append
    /// cancels prepend. With no flags the action is append.
    pub fn resolve(append: bool, prepend: bool, clip: bool) -> Self {
        if clip {
            MergeAction::Clip
        } else if prepend && !append {
            MergeAction::Prepend
        } else {
            MergeAction::Append
        }
    }
}

/// Remove every component exactly equal to `dir`.
///
/// # Example
///
/// ```
/// use shelltools::pathmerge::clip;
///
/// assert_eq!(clip("/bin:/usr/bin:/bin", "/bin"), "/usr/bin");
/// ```
pub fn clip(path_list: &str, dir: &str) -> String {
    path_list
        .split(PATH_DELIMITER)
        .filter(|component| *component != dir)
        .collect::<Vec<_>>()
        .join(&PATH_DELIMITER.to_string())
}

/// Apply `action` for `dir` to `path_list`.
pub fn merge(path_list: &str, dir: &str, action: MergeAction) -> String {
    let rest = clip(path_list, dir);
    match action {
        MergeAction::Clip => rest,
        _ if rest.is_empty() => dir.to_string(),
        MergeAction::Append => format!("{}{}{}", rest, PATH_DELIMITER, dir),
        MergeAction::Prepend => format!("{}{}{}", dir, PATH_DELIMITER, rest),
    }
}
