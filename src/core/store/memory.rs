//! In-memory store.
//!
//! Nothing is persisted. Useful for tests and for handing a prepared store
//! to the server without touching disk.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use super::Store;
use crate::core::domain::SecretRecord;
use crate::core::types::{EncryptedValue, SecretKey};
use crate::error::{Result, StoreError};

#[derive(Default)]
struct Inner {
    secrets: BTreeMap<SecretKey, (EncryptedValue, SecretRecord)>,
    config: BTreeMap<String, Vec<u8>>,
}

/// Volatile store kept in a `BTreeMap`, so iteration is already sorted.
#[derive(Default)]
pub struct Memory {
    inner: RwLock<Inner>,
}

impl Memory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Store for Memory {
    fn upsert_secret(&self, key: &str, value: &[u8]) -> Result<()> {
        let now = Utc::now();
        let mut inner = self.write();
        match inner.secrets.get_mut(key) {
            Some((stored, record)) => {
                *stored = value.to_vec();
                record.updated_at = now;
            }
            None => {
                inner.secrets.insert(
                    key.to_string(),
                    (value.to_vec(), SecretRecord::new(key.to_string(), now)),
                );
            }
        }
        Ok(())
    }

    fn get_secret(&self, key: &str) -> Result<EncryptedValue> {
        self.read()
            .secrets
            .get(key)
            .map(|(value, _)| value.clone())
            .ok_or_else(|| StoreError::NotFound(key.to_string()).into())
    }

    fn delete_secret(&self, key: &str) -> Result<()> {
        self.write()
            .secrets
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(key.to_string()).into())
    }

    fn list_secrets(&self) -> Result<Vec<SecretKey>> {
        Ok(self.read().secrets.keys().cloned().collect())
    }

    fn describe(&self, key: &str) -> Result<SecretRecord> {
        self.read()
            .secrets
            .get(key)
            .map(|(_, record)| record.clone())
            .ok_or_else(|| StoreError::NotFound(key.to_string()).into())
    }

    fn records(&self) -> Result<Vec<SecretRecord>> {
        Ok(self
            .read()
            .secrets
            .values()
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn get_config(&self, name: &str) -> Result<Vec<u8>> {
        self.read()
            .config
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::ConfigNotFound(name.to_string()).into())
    }

    fn set_config(&self, name: &str, value: &[u8]) -> Result<()> {
        self.write().config.insert(name.to_string(), value.to_vec());
        Ok(())
    }
}
