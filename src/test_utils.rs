//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::finder::{FoundDir, MatchOutput};

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a tree with the given directories already in place.
    pub fn with_dirs(dirs: &[&str]) -> Self {
        let tree = Self::new();
        for dir in dirs {
            tree.add_dir(dir);
        }
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a directory, including missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a file.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a wide, nested tree: `width` directories per level, `depth` levels deep.
    pub fn add_fanout(&self, width: usize, depth: usize) {
        fn build(base: &Path, width: usize, depth: usize) {
            if depth == 0 {
                return;
            }
            for i in 0..width {
                let dir = base.join(format!("dir_{}", i));
                fs::create_dir_all(&dir).expect("Failed to create dir");
                fs::write(dir.join("file.txt"), "x").expect("Failed to write file");
                build(&dir, width, depth - 1);
            }
        }
        build(self.dir.path(), width, depth);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Make a directory unreadable for the duration of the guard.
///
/// Permissions are restored on drop so the temporary tree can be removed.
#[cfg(unix)]
pub struct LockedDir {
    path: PathBuf,
}

#[cfg(unix)]
impl LockedDir {
    pub fn new(path: PathBuf) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(&path).expect("Failed to stat dir").permissions();
        perms.set_mode(0o000);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");
        Self { path }
    }

    /// Whether the lock is effective. Privileged users can read any directory.
    pub fn is_effective(&self) -> bool {
        fs::read_dir(&self.path).is_err()
    }
}

#[cfg(unix)]
impl Drop for LockedDir {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(meta) = fs::metadata(&self.path) {
            let mut perms = meta.permissions();
            perms.set_mode(0o755);
            let _ = fs::set_permissions(&self.path, perms);
        }
    }
}

/// Output sink that deletes a directory when a given path is reported.
///
/// The walk then fails to stat or list the removed directory, which works
/// the same for privileged users as for everyone else.
pub struct RemovingSink {
    /// Every reported path, in order
    pub found: Vec<PathBuf>,
    trigger: PathBuf,
    victim: PathBuf,
}

impl RemovingSink {
    /// Remove `victim` (a real path) once `trigger` (a reported path) is seen.
    pub fn new(trigger: impl Into<PathBuf>, victim: impl Into<PathBuf>) -> Self {
        Self {
            found: Vec::new(),
            trigger: trigger.into(),
            victim: victim.into(),
        }
    }

    pub fn found_set(&self) -> BTreeSet<PathBuf> {
        self.found.iter().cloned().collect()
    }
}

impl MatchOutput for RemovingSink {
    fn output_match(&mut self, found: &FoundDir<'_>) -> io::Result<()> {
        self.found.push(found.path.to_path_buf());
        if found.path == self.trigger && self.victim.exists() {
            fs::remove_dir_all(&self.victim)?;
        }
        Ok(())
    }
}
