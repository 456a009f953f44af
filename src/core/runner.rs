//! Subprocess execution for `lockbox run`.
//!
//! The child inherits the parent's environment and stdio; resolved secrets
//! are layered on top and win over any colliding variable. The parent blocks
//! until the child exits.

use std::ffi::OsString;
use std::io;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::core::types::SecretMap;
use crate::error::{Result, RunError};

/// Spawn `command` with `secrets` injected and wait for it.
///
/// # Returns
///
/// The child's exit code. A child killed by a signal reports `128 + signal`
/// on Unix, following shell convention.
///
/// # Errors
///
/// - `RunError::NoCommand` if `command` is empty
/// - `RunError::CommandNotFound` if the program cannot be located
/// - `RunError::Spawn` for any other failure to start the child
pub fn run(command: &[String], secrets: &SecretMap) -> Result<i32> {
    let (program, args) = command.split_first().ok_or(RunError::NoCommand)?;

    if which::which(program).is_err() {
        return Err(RunError::CommandNotFound(program.clone()).into());
    }

    let mut cmd = Command::new(program);
    cmd.args(args);
    for (key, value) in secrets {
        cmd.env(key, to_os_string(value));
    }

    debug!(program = %program, secrets = secrets.len(), "spawning child");
    let status = cmd.status().map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => RunError::CommandNotFound(program.clone()),
        _ => RunError::Spawn {
            command: program.clone(),
            source,
        },
    })?;

    let code = exit_code(status);
    debug!(code, "child exited");
    Ok(code)
}

#[cfg(unix)]
fn to_os_string(value: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::OsStr::from_bytes(value).to_os_string()
}

#[cfg(not(unix))]
fn to_os_string(value: &[u8]) -> OsString {
    OsString::from(String::from_utf8_lossy(value).into_owned())
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
