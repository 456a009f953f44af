//! Persistent secret and config storage.
//!
//! Two string-keyed mappings live side by side: `secrets` holds sealed
//! values with timestamps, `config` holds small raw metadata (today only the
//! encryption key). Values are opaque bytes here; encryption happens above.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::core::domain::SecretRecord;
use crate::core::types::{EncryptedValue, SecretKey};
use crate::error::Result;

mod memory;
mod sqlite;

pub use memory::Memory;
pub use sqlite::Sqlite;

/// Secret storage backend.
///
/// Implementations must be shareable across threads: the server hands one
/// instance to every concurrent request handler. Every mutating call must be
/// durable before it returns.
pub trait Store: Send + Sync {
    /// Insert or fully replace a sealed secret value.
    ///
    /// Keeps the original creation time on overwrite and refreshes the
    /// update time.
    fn upsert_secret(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Fetch a sealed secret value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the key is absent.
    fn get_secret(&self, key: &str) -> Result<EncryptedValue>;

    /// Remove a secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if nothing was deleted.
    fn delete_secret(&self, key: &str) -> Result<()>;

    /// All secret keys in ascending lexical order.
    fn list_secrets(&self) -> Result<Vec<SecretKey>>;

    /// Key and timestamps for one secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the key is absent.
    fn describe(&self, key: &str) -> Result<SecretRecord>;

    /// Key and timestamps for every secret, ascending by key.
    fn records(&self) -> Result<Vec<SecretRecord>>;

    /// Fetch a config entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ConfigNotFound` if the name is absent.
    fn get_config(&self, name: &str) -> Result<Vec<u8>>;

    /// Insert or replace a config entry.
    fn set_config(&self, name: &str, value: &[u8]) -> Result<()>;
}
