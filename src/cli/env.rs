//! Env command - print secrets as shell export lines.
//!
//! Output is meant for `eval "$(lockbox env)"`, so nothing but export lines
//! is written to stdout.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::cli::output;
use crate::core::remote::Client;
use crate::core::validation::is_shell_identifier;
use crate::core::vault::Vault;
use crate::error::Result;

/// Print export lines from the local store, or from a remote server.
pub fn execute(db: Option<&Path>, remote: Option<&str>) -> Result<()> {
    match remote {
        Some(remote) => remote_export(remote),
        None => local_export(db),
    }
}

fn local_export(db: Option<&Path>) -> Result<()> {
    let vault = Vault::open(db)?;

    let keys = vault.list()?;
    for key in &keys {
        if !is_shell_identifier(key) {
            output::warn(&format!(
                "'{}' is not a valid shell variable name; eval will reject its line",
                key
            ));
        }
    }

    let mut stdout = std::io::stdout().lock();
    for line in vault.export_keys(keys) {
        stdout.write_all(&line?)?;
    }
    stdout.flush()?;
    Ok(())
}

fn remote_export(remote: &str) -> Result<()> {
    let client = Client::connect(remote)?;
    debug!(remote = %client.endpoint(), "fetching export");
    let body = client.export()?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&body)?;
    stdout.flush()?;
    Ok(())
}
