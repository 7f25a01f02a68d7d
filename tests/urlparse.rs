//! Integration tests for urlparse

use assert_cmd::Command;
use predicates::prelude::*;

const PAGE: &str = "http://example.com/my/page.html";

fn urlparse() -> Command {
    let mut cmd = Command::cargo_bin("urlparse").expect("urlparse binary should build");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_fields() {
    urlparse()
        .arg(PAGE)
        .assert()
        .success()
        .stdout("http\texample.com\t/my/page.html\n");
}

#[test]
fn test_single_fields() {
    for (flag, expected) in [
        ("--protocol", "http\n"),
        ("-H", "example.com\n"),
        ("--path", "/my/page.html\n"),
        ("-b", "page.html\n"),
        ("--directory", "/my\n"),
        ("-e", ".html\n"),
    ] {
        urlparse().args([flag, PAGE]).assert().success().stdout(expected);
    }
}

#[test]
fn test_fields_follow_fixed_order_with_delimiter() {
    urlparse()
        .args(["-e", "-P", "-D", ",", PAGE])
        .assert()
        .success()
        .stdout("http,.html\n");
}

#[test]
fn test_host_includes_port() {
    urlparse()
        .args(["-H", "http://localhost:8080/"])
        .assert()
        .success()
        .stdout("localhost:8080\n");
}

#[test]
fn test_missing_url_is_usage_error() {
    urlparse()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing URL"));
}

#[test]
fn test_unparsable_url() {
    urlparse()
        .arg("http://[bad")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("urlparse: can't parse"));
}
