//! Init command - create the store and its encryption key.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::config;
use crate::core::keys::{self, InitOutcome};
use crate::core::store::Sqlite;
use crate::error::Result;

/// Initialize the store at `db`. Running it again leaves the key untouched.
pub fn execute(db: Option<&Path>) -> Result<()> {
    let path = config::store_path(db)?;
    info!("Initializing store at {}", path.display());

    let store = Sqlite::open(&path)?;
    match keys::initialize(&store)? {
        InitOutcome::Created => output::success("Lockbox initialized successfully"),
        InitOutcome::AlreadyInitialized => {
            println!("Lockbox is already initialized. Encryption key already exists.")
        }
    }
    Ok(())
}
