//! Path helpers shared by the walker

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Normalize a root into its walk path by dropping `.` components.
///
/// `./src/` becomes `src`, while a bare `.` (or `./`) stays `.`.
pub fn clean_root(root: &Path) -> PathBuf {
    let cleaned: PathBuf = root
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Walk path of a child entry. Children of `.` are walked as bare names.
pub fn child_path(parent: &Path, name: &OsStr) -> PathBuf {
    if parent == Path::new(".") {
        PathBuf::from(name)
    } else {
        parent.join(name)
    }
}

/// Depth of a walk path: its separator count plus one, i.e. its component count.
///
/// `.` and `a` are depth 1, `b/c` is 2, `/tmp/x` is 3.
pub fn walk_depth(path: &Path) -> usize {
    path.components().count().max(1)
}

/// Lexically resolve `..` and `.` components without touching the file system.
///
/// `..` at the root stays at the root; leading `..` of a relative path is kept.
pub fn lexical_clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    let cleaned: PathBuf = parts.iter().collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Root-relative form of a path, `.` for the root itself.
pub fn relative_display(rel: &Path) -> PathBuf {
    if rel.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        rel.to_path_buf()
    }
}

/// Join a relative path onto an absolute root without a trailing separator for the root.
pub fn absolute_display(absolute_root: &Path, rel: &Path) -> PathBuf {
    if rel.as_os_str().is_empty() {
        absolute_root.to_path_buf()
    } else {
        absolute_root.join(rel)
    }
}
