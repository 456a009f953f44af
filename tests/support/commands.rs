//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a lockbox command bound to this environment.
    ///
    /// - `LOCKBOX_DB_PATH` points at the temp store file
    /// - `HOME` points at the temp home
    /// - remote and log overrides from the outer environment are cleared
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("lockbox").expect("failed to find lockbox binary");
        cmd.env("LOCKBOX_DB_PATH", self.db_path());
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("LOCKBOX_REMOTE");
        cmd.env_remove("LOCKBOX_LOG");
        cmd.env_remove("LOCKBOX_PORT");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `lockbox init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .arg("init")
            .output()
            .expect("failed to run lockbox init")
    }

    /// Shortcut for `lockbox set`.
    pub fn set(&self, key: &str, val: &str) -> Output {
        self.cmd()
            .args(["set", key, val])
            .output()
            .expect("failed to run lockbox set")
    }

    /// Shortcut for `lockbox get`.
    pub fn get(&self, key: &str) -> Output {
        self.cmd()
            .args(["get", key])
            .output()
            .expect("failed to run lockbox get")
    }

    /// Shortcut for `lockbox delete`.
    pub fn delete(&self, key: &str) -> Output {
        self.cmd()
            .args(["delete", key])
            .output()
            .expect("failed to run lockbox delete")
    }

    /// Shortcut for `lockbox list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run lockbox list")
    }

    /// Shortcut for `lockbox list --json`.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run lockbox list --json")
    }

    /// Shortcut for `lockbox env`.
    pub fn env(&self) -> Output {
        self.cmd()
            .arg("env")
            .output()
            .expect("failed to run lockbox env")
    }

    /// Shortcut for `lockbox env --remote <addr>`.
    pub fn env_remote(&self, remote: &str) -> Output {
        self.cmd()
            .args(["env", "--remote", remote])
            .output()
            .expect("failed to run lockbox env --remote")
    }

    /// Shortcut for `lockbox run -- <args>`.
    pub fn run(&self, args: &[&str]) -> Output {
        let mut full_args = vec!["run", "--"];
        full_args.extend_from_slice(args);
        self.cmd()
            .args(&full_args)
            .output()
            .expect("failed to run lockbox run")
    }

    /// Shortcut for `lockbox run --remote <addr> -- <args>`.
    pub fn run_remote(&self, remote: &str, args: &[&str]) -> Output {
        let mut full_args = vec!["run", "--remote", remote, "--"];
        full_args.extend_from_slice(args);
        self.cmd()
            .args(&full_args)
            .output()
            .expect("failed to run lockbox run --remote")
    }
}
