//! Run command - execute a program with secrets injected as env vars.

use std::path::Path;

use tracing::info;

use crate::cli::resolve::Source;
use crate::core::runner;
use crate::error::{Result, RunError};

/// Run `command` with secrets from the local store or a remote server.
///
/// Exits the process with the child's exit code.
pub fn execute(db: Option<&Path>, remote: Option<&str>, command: &[String]) -> Result<()> {
    if command.is_empty() {
        return Err(RunError::NoCommand.into());
    }

    let secrets = Source::new(db, remote).secrets()?;
    info!("Running {:?} with {} secrets", command[0], secrets.len());

    let code = runner::run(command, &secrets)?;

    // process::exit skips destructors
    drop(secrets);
    std::process::exit(code);
}
