//! Tests for `lockbox init`.

use crate::support::*;

#[test]
fn test_init_creates_store() {
    let t = Test::new();

    let output = t.init_cmd();
    assert_success(&output);
    assert_stdout_contains(&output, "Lockbox initialized successfully");
    assert!(t.db_path().exists());
}

#[test]
fn test_init_is_idempotent() {
    let t = Test::init();
    assert_success(&t.set("KEEP", "me"));

    let output = t.init_cmd();
    assert_success(&output);
    assert_stdout_contains(&output, "already initialized");

    // the original key still opens existing values
    let output = t.get("KEEP");
    assert_success(&output);
    assert_eq!(stdout(&output), "me");
}

#[test]
fn test_init_creates_parent_dirs() {
    let t = Test::new();
    let nested = t.dir.path().join("a/b/c/store.db");

    let output = t
        .cmd()
        .env("LOCKBOX_DB_PATH", &nested)
        .arg("init")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(nested.exists());
}

#[test]
fn test_db_flag_overrides_env() {
    let t = Test::new();
    let other = t.dir.path().join("other.db");

    let output = t
        .cmd()
        .args(["--db", other.to_str().unwrap(), "init"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(other.exists());
    assert!(!t.db_path().exists());
}

#[test]
fn test_default_location_under_home() {
    let t = Test::new();

    let output = t
        .cmd()
        .env_remove("LOCKBOX_DB_PATH")
        .arg("init")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.home.path().join(".lockbox/lockbox.db").exists());
}

#[cfg(unix)]
#[test]
fn test_store_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::init();
    let mode = std::fs::metadata(t.db_path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
