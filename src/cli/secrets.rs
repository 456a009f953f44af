//! Secret management commands: set, get, delete, list.

use std::io::Write;
use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::cli::output;
use crate::core::vault::Vault;
use crate::error::Result;

/// Set a secret, replacing any existing value.
pub fn set(db: Option<&Path>, key: &str, value: &str) -> Result<()> {
    let vault = Vault::open(db)?;
    vault.set(key, value.as_bytes())?;
    info!("Set secret: {}", key);
    output::success(&format!("Secret '{}' set", key));
    Ok(())
}

/// Write a secret's exact bytes to stdout, with no trailing newline.
pub fn get(db: Option<&Path>, key: &str) -> Result<()> {
    let vault = Vault::open(db)?;
    let value = vault.get(key)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&value)?;
    stdout.flush()?;
    Ok(())
}

/// Delete a secret.
pub fn delete(db: Option<&Path>, key: &str) -> Result<()> {
    let vault = Vault::open(db)?;
    vault.delete(key)?;
    info!("Deleted secret: {}", key);
    output::success(&format!("Secret '{}' deleted", key));
    Ok(())
}

/// List secret keys, one per line, or as JSON with timestamps.
pub fn list(db: Option<&Path>, as_json: bool) -> Result<()> {
    let vault = Vault::open(db)?;

    if as_json {
        let records = vault.records()?;
        let out = json!({
            "count": records.len(),
            "secrets": records,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let keys = vault.list()?;
    if keys.is_empty() {
        output::dimmed("No secrets found");
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    for key in keys {
        writeln!(stdout, "{}", key)?;
    }
    Ok(())
}
