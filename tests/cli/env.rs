//! Tests for `lockbox env`.

use crate::support::*;

#[test]
fn test_env_export_format() {
    let t = Test::with_secrets(&[("B_KEY", "two"), ("A_KEY", "one")]);

    let output = t.env();
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "export A_KEY=\"one\"\nexport B_KEY=\"two\"\n"
    );
}

#[test]
fn test_env_escapes_shell_metacharacters() {
    let t = Test::with_secrets(&[("Q", r#"a"b$c`d\e"#)]);

    let output = t.env();
    assert_success(&output);
    assert_eq!(stdout(&output), "export Q=\"a\\\"b\\$c\\`d\\\\e\"\n");
}

#[test]
fn test_env_empty_store_prints_nothing() {
    let t = Test::init();

    let output = t.env();
    assert_success(&output);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_env_stdout_is_only_exports_when_verbose() {
    let t = Test::with_secrets(&[("K", "v")]);

    let output = t.cmd().args(["--verbose", "env"]).output().unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "export K=\"v\"\n");
}

#[test]
fn test_env_warns_on_non_identifier_keys() {
    let t = Test::with_secrets(&[("my-key", "v")]);

    let output = t.env();
    assert_success(&output);
    assert_stderr_contains(&output, "my-key");
    assert_eq!(stdout(&output), "export my-key=\"v\"\n");
}

#[cfg(unix)]
#[test]
fn test_env_output_evaluates_in_sh() {
    let value = "it's a \"test\" with $dollar `tick` \\slash\nand newline";
    let t = Test::with_secrets(&[("TRICKY", value)]);

    let exports = stdout(&t.env());
    let script = format!("{}printf '%s' \"$TRICKY\"", exports);
    let output = std::process::Command::new("sh")
        .args(["-c", &script])
        .output()
        .unwrap();

    assert_success(&output);
    assert_eq!(stdout(&output), value);
}
