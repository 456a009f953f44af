//! Tests for `lockbox serve` with `env --remote` and `run --remote`.

use crate::support::*;

#[test]
fn test_env_remote_matches_local() {
    let t = Test::with_secrets(&[("B", "two"), ("A", "o\"ne$")]);
    let served = t.serve();

    let local = t.env();
    let remote = t.env_remote(&served.addr);
    assert_success(&remote);
    assert_eq!(remote.stdout, local.stdout);
}

#[test]
fn test_env_remote_accepts_http_url() {
    let t = Test::with_secrets(&[("K", "v")]);
    let served = t.serve();

    let output = t.env_remote(&format!("http://{}/", served.addr));
    assert_success(&output);
    assert_eq!(stdout(&output), "export K=\"v\"\n");
}

#[test]
fn test_remote_from_env_var() {
    let t = Test::with_secrets(&[("K", "v")]);
    let served = t.serve();

    let output = t
        .cmd()
        .env("LOCKBOX_REMOTE", &served.addr)
        .arg("env")
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "export K=\"v\"\n");
}

#[cfg(unix)]
#[test]
fn test_run_remote_injects() {
    let t = Test::with_secrets(&[("REMOTE_VAR", "over-the-wire")]);
    let served = t.serve();

    // a client with no local store of its own
    let client = Test::new();
    let output = client.run_remote(&served.addr, &["sh", "-c", "printf '%s' \"$REMOTE_VAR\""]);
    assert_success(&output);
    assert_eq!(stdout(&output), "over-the-wire");
}

#[test]
fn test_remote_unreachable_fails() {
    let t = Test::new();

    // bind then drop to get a port nothing listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let output = t.env_remote(&format!("127.0.0.1:{}", port));
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "failed to reach remote");
}

#[test]
fn test_remote_rejects_malformed_address() {
    let t = Test::new();

    let output = t.env_remote("https://example.com/secrets");
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "invalid remote");
}

#[test]
fn test_serve_requires_init() {
    let t = Test::new();

    let output = t.cmd().args(["serve", "--port", "0"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}
