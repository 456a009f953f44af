//! Tests for `lockbox set/get/delete/list`.

use crate::support::*;

#[test]
fn test_set_and_get_roundtrip() {
    let t = Test::init();

    let output = t.set("DATABASE_URL", "postgres://localhost/db");
    assert_success(&output);
    assert_stdout_contains(&output, "DATABASE_URL");

    assert_roundtrip(&t, "DATABASE_URL", "postgres://localhost/db");
}

#[test]
fn test_get_prints_no_trailing_newline() {
    let t = Test::with_secrets(&[("K", "v")]);

    let output = t.get("K");
    assert_success(&output);
    assert_eq!(output.stdout, b"v");
}

#[test]
fn test_set_overwrites() {
    let t = Test::with_secrets(&[("K", "v1")]);

    assert_success(&t.set("K", "v2"));
    assert_eq!(stdout(&t.get("K")), "v2");
}

#[test]
fn test_special_characters_roundtrip() {
    let t = Test::init();

    assert_roundtrip(&t, "QUOTED", r#"he said "hi" and $HOME `x` \n"#);
    assert_roundtrip(&t, "MULTILINE", "line1\nline2\n");
    assert_roundtrip(&t, "UNICODE", "pässwörd 🔑");
    assert_roundtrip(&t, "EMPTY", "");
}

#[test]
fn test_lowercase_and_dotted_keys_allowed() {
    let t = Test::init();

    assert_roundtrip(&t, "api.token", "a");
    assert_roundtrip(&t, "my-key", "b");
}

#[test]
fn test_invalid_keys_rejected() {
    let t = Test::init();

    let output = t.set("", "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "empty");

    let output = t.set("A=B", "value");
    assert_failure(&output);

    let output = t.set("LINE\nBREAK", "value");
    assert_failure(&output);

    for key in [".", ".."] {
        let output = t.set(key, "value");
        assert_failure(&output);
        assert_stderr_contains(&output, "dot segments");
    }
}

#[test]
fn test_get_missing_fails() {
    let t = Test::init();

    let output = t.get("NOPE");
    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_delete() {
    let t = Test::with_secrets(&[("GONE", "x")]);

    let output = t.delete("GONE");
    assert_success(&output);
    assert_stdout_contains(&output, "deleted");

    assert_failure(&t.get("GONE"));
}

#[test]
fn test_delete_missing_fails() {
    let t = Test::init();

    let output = t.delete("NOPE");
    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
}

#[test]
fn test_rm_alias() {
    let t = Test::with_secrets(&[("K", "v")]);

    let output = t.cmd().args(["rm", "K"]).output().unwrap();
    assert_success(&output);
    assert_failure(&t.get("K"));
}

#[test]
fn test_list_sorted() {
    let t = Test::with_secrets(&[("ZED", "1"), ("ALPHA", "2"), ("MIDDLE", "3")]);

    let output = t.list();
    assert_success(&output);
    assert_eq!(stdout(&output), "ALPHA\nMIDDLE\nZED\n");
}

#[test]
fn test_list_never_prints_values() {
    let t = Test::with_secrets(&[("K", "super-secret-value")]);

    assert_stdout_excludes(&t.list(), "super-secret-value");
    assert_stdout_excludes(&t.list_json(), "super-secret-value");
}

#[test]
fn test_list_empty() {
    let t = Test::init();

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "No secrets found");
}

#[test]
fn test_list_excludes_encryption_key() {
    let t = Test::with_secrets(&[("K", "v")]);

    assert_stdout_excludes(&t.list(), "encryption_key");
}

#[test]
fn test_list_json() {
    let t = Test::with_secrets(&[("B", "1"), ("A", "2")]);

    let output = t.list_json();
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 2);
    let secrets = json["secrets"].as_array().unwrap();
    assert_eq!(secrets[0]["key"], "A");
    assert_eq!(secrets[1]["key"], "B");
    assert!(secrets[0]["created_at"].is_string());
    assert!(secrets[0]["updated_at"].is_string());
}

#[test]
fn test_values_not_stored_in_plaintext() {
    let t = Test::with_secrets(&[("K", "plaintext-canary-value")]);

    let needle = b"plaintext-canary-value";
    for suffix in ["", "-wal"] {
        let path = format!("{}{}", t.db_path().display(), suffix);
        if let Ok(raw) = std::fs::read(&path) {
            assert!(!raw.windows(needle.len()).any(|w| w == needle), "{}", path);
        }
    }
}
