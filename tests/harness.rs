//! Test harness for finddir integration tests

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::path::Path;
use std::process::Command;

pub use shelltools::test_utils::TestTree;
#[cfg(unix)]
pub use shelltools::test_utils::LockedDir;

pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Output lines as a set; sibling order is not part of the contract.
    pub fn lines(&self) -> BTreeSet<String> {
        self.stdout.lines().map(str::to_string).collect()
    }
}

pub fn run_finddir(dir: &Path, args: &[&str]) -> RunResult {
    let binary = env!("CARGO_BIN_EXE_finddir");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run finddir");

    RunResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code(),
    }
}

pub fn set(lines: &[&str]) -> BTreeSet<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_dir() {
        let tree = TestTree::with_dirs(&["a/b"]);
        assert!(tree.path().join("a/b").is_dir());
    }
}
