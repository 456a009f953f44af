//! SQLite-backed store.
//!
//! One database file holds both mappings. WAL journaling with
//! `synchronous = FULL` makes each autocommitted statement durable before
//! the call returns.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::Store;
use crate::core::config;
use crate::core::domain::SecretRecord;
use crate::core::types::{EncryptedValue, SecretKey};
use crate::error::{Result, StoreError};

const SCHEMA: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA synchronous = FULL;

CREATE TABLE IF NOT EXISTS config (
    key TEXT PRIMARY KEY NOT NULL,
    value BLOB NOT NULL
);

CREATE TABLE IF NOT EXISTS secrets (
    key TEXT PRIMARY KEY NOT NULL,
    value BLOB NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Store backed by a single SQLite file.
pub struct Sqlite {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl Sqlite {
    /// Open (creating if needed) the store at `path` and apply the schema.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be created,
    /// `StoreError::Open` if the database cannot be opened, or
    /// `StoreError::Sqlite` if the schema cannot be applied.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening store");

        config::ensure_parent_dir(path)?;
        config::restrict_file(path)?;
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        conn.execute_batch(SCHEMA).map_err(StoreError::Sqlite)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: path.to_path_buf(),
        })
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // A panic mid-statement cannot leave SQLite inconsistent, so a
        // poisoned lock is still usable.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Store for Sqlite {
    fn upsert_secret(&self, key: &str, value: &[u8]) -> Result<()> {
        let now = Utc::now();
        self.conn()
            .execute(
                "INSERT INTO secrets (key, value, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(StoreError::Sqlite)?;
        debug!(key, "secret written");
        Ok(())
    }

    fn get_secret(&self, key: &str) -> Result<EncryptedValue> {
        self.conn()
            .query_row(
                "SELECT value FROM secrets WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(StoreError::Sqlite)?
            .ok_or_else(|| StoreError::NotFound(key.to_string()).into())
    }

    fn delete_secret(&self, key: &str) -> Result<()> {
        let affected = self
            .conn()
            .execute("DELETE FROM secrets WHERE key = ?1", params![key])
            .map_err(StoreError::Sqlite)?;

        if affected == 0 {
            return Err(StoreError::NotFound(key.to_string()).into());
        }
        debug!(key, "secret deleted");
        Ok(())
    }

    fn list_secrets(&self) -> Result<Vec<SecretKey>> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT key FROM secrets ORDER BY key ASC")
            .map_err(StoreError::Sqlite)?;
        let keys = stmt
            .query_map([], |row| row.get(0))
            .map_err(StoreError::Sqlite)?
            .collect::<std::result::Result<Vec<SecretKey>, _>>()
            .map_err(StoreError::Sqlite)?;
        Ok(keys)
    }

    fn describe(&self, key: &str) -> Result<SecretRecord> {
        self.conn()
            .query_row(
                "SELECT key, created_at, updated_at FROM secrets WHERE key = ?1",
                params![key],
                record_from_row,
            )
            .optional()
            .map_err(StoreError::Sqlite)?
            .ok_or_else(|| StoreError::NotFound(key.to_string()).into())
    }

    fn records(&self) -> Result<Vec<SecretRecord>> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT key, created_at, updated_at FROM secrets ORDER BY key ASC")
            .map_err(StoreError::Sqlite)?;
        let records = stmt
            .query_map([], record_from_row)
            .map_err(StoreError::Sqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StoreError::Sqlite)?;
        Ok(records)
    }

    fn get_config(&self, name: &str) -> Result<Vec<u8>> {
        self.conn()
            .query_row(
                "SELECT value FROM config WHERE key = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .map_err(StoreError::Sqlite)?
            .ok_or_else(|| StoreError::ConfigNotFound(name.to_string()).into())
    }

    fn set_config(&self, name: &str, value: &[u8]) -> Result<()> {
        self.conn()
            .execute(
                "INSERT INTO config (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![name, value],
            )
            .map_err(StoreError::Sqlite)?;
        Ok(())
    }
}

fn record_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SecretRecord> {
    Ok(SecretRecord {
        key: row.get(0)?,
        created_at: row.get::<_, DateTime<Utc>>(1)?,
        updated_at: row.get::<_, DateTime<Utc>>(2)?,
    })
}
