//! Error output and exit status.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_uninitialized_store_hint() {
    let t = Test::new();

    for output in [t.get("K"), t.list(), t.env(), t.set("K", "v"), t.delete("K")] {
        assert_exit_code(&output, 1);
        assert_stderr_contains(&output, "✗");
        assert_stderr_contains(&output, "not initialized");
        assert_stderr_contains(&output, "lockbox init");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_corrupt_store_reports_error() {
    let t = Test::new();
    std::fs::write(t.db_path(), b"this is not a sqlite database, just junk bytes").unwrap();

    let output = t.list();
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "✗");
}

#[test]
fn test_unknown_command() {
    let t = Test::new();

    t.cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}

#[test]
fn test_completions() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lockbox"));
}
