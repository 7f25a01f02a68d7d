//! Edge case and error handling tests for finddir

mod harness;

use harness::{TestTree, run_finddir, set};
#[cfg(unix)]
use harness::LockedDir;
#[cfg(unix)]
use std::os::unix::fs::symlink;

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlink_to_directory_not_reported() {
    let tree = TestTree::with_dirs(&["realdir/inner"]);
    symlink(tree.path().join("realdir"), tree.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let result = run_finddir(tree.path(), &["-a"]);
    assert!(result.success());
    assert_eq!(result.lines(), set(&[".", "realdir", "realdir/inner"]));
}

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::with_dirs(&["subdir"]);
    symlink("..", tree.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let result = run_finddir(tree.path(), &["-a"]);
    assert!(result.success(), "finddir should not hang on parent symlink");
    assert_eq!(result.lines(), set(&[".", "subdir"]));
}

#[test]
#[cfg(unix)]
fn test_broken_symlink() {
    let tree = TestTree::with_dirs(&["real"]);
    symlink("nonexistent", tree.path().join("broken")).expect("Failed to create broken symlink");

    let result = run_finddir(tree.path(), &["-a", "-e"]);
    assert!(result.success(), "stderr: {}", result.stderr);
    assert_eq!(result.lines(), set(&[".", "real"]));
}

#[test]
#[cfg(unix)]
fn test_symlinked_root_is_followed() {
    let tree = TestTree::with_dirs(&["target/inner"]);
    symlink(tree.path().join("target"), tree.path().join("root_link"))
        .expect("Failed to create root symlink");

    let result = run_finddir(tree.path(), &["-a", "root_link"]);
    assert!(result.success());
    assert_eq!(result.lines(), set(&[".", "inner"]));
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
#[cfg(unix)]
fn test_unreadable_directory_skipped() {
    let tree = TestTree::with_dirs(&["a", "locked/hidden", "z/deeper"]);
    let lock = LockedDir::new(tree.path().join("locked"));
    if !lock.is_effective() {
        return;
    }

    let result = run_finddir(tree.path(), &["-a"]);
    assert!(result.success(), "skip mode should exit 0: {}", result.stderr);
    assert!(result.stderr.is_empty(), "skipped errors are silent: {}", result.stderr);
    assert_eq!(result.lines(), set(&[".", "a", "locked", "z", "z/deeper"]));
}

#[test]
#[cfg(unix)]
fn test_unreadable_directory_stops_walk() {
    let tree = TestTree::with_dirs(&["locked/hidden", "z"]);
    let lock = LockedDir::new(tree.path().join("locked"));
    if !lock.is_effective() {
        return;
    }

    let result = run_finddir(tree.path(), &["-a", "-e"]);
    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("can't read locked"), "{}", result.stderr);
    // The directory is reported before its listing fails
    assert!(result.lines().contains("locked"), "{}", result.stdout);
    // "z" sorts after the failing directory and is never reached
    assert!(!result.lines().contains("z"));
}

#[test]
#[cfg(unix)]
fn test_failed_root_does_not_stop_next_root() {
    let tree = TestTree::with_dirs(&["first/locked/hidden", "second/found"]);
    let lock = LockedDir::new(tree.path().join("first/locked"));
    if !lock.is_effective() {
        return;
    }

    let result = run_finddir(tree.path(), &["-e", "-s", "found", "first", "second"]);
    assert_eq!(result.code, Some(1), "a failed root sets the exit status");
    assert!(result.stderr.contains("first/locked"), "{}", result.stderr);
    assert_eq!(result.lines(), set(&["found"]));
}

#[test]
fn test_missing_root() {
    let tree = TestTree::with_dirs(&["a"]);

    let skip = run_finddir(tree.path(), &["-a", "nope", "a"]);
    assert!(skip.success());
    assert_eq!(skip.lines(), set(&["."]));

    let stop = run_finddir(tree.path(), &["-a", "-e", "nope", "a"]);
    assert_eq!(stop.code, Some(1));
    assert!(stop.stderr.contains("nope"));
    assert_eq!(stop.lines(), set(&["."]));
}

// ============================================================================
// Special Names
// ============================================================================

#[test]
fn test_dirname_with_spaces() {
    let tree = TestTree::with_dirs(&["dir with spaces/nested"]);

    let result = run_finddir(tree.path(), &["-s", "nested"]);
    assert!(result.success());
    assert_eq!(result.lines(), set(&["dir with spaces/nested"]));
}

#[test]
fn test_dirname_with_unicode() {
    let tree = TestTree::with_dirs(&["中文目录/日本語", "émoji_🎉"]);

    let result = run_finddir(tree.path(), &["-c", "日本"]);
    assert!(result.success());
    assert_eq!(result.lines(), set(&["中文目录/日本語"]));

    let result = run_finddir(tree.path(), &["-p", "émoji"]);
    assert_eq!(result.lines(), set(&["émoji_🎉"]));
}

#[test]
fn test_hidden_directories_are_walked() {
    let tree = TestTree::with_dirs(&[".config/app"]);

    let result = run_finddir(tree.path(), &["-a"]);
    assert!(result.success());
    assert_eq!(result.lines(), set(&[".", ".config", ".config/app"]));
}

#[test]
fn test_empty_root() {
    let tree = TestTree::new();

    let result = run_finddir(tree.path(), &["-a"]);
    assert!(result.success());
    assert_eq!(result.stdout, ".\n");
}
