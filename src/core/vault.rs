//! Vault.
//!
//! A store paired with its encryption key: the local-mode interface for
//! every secret operation, and the shared state behind the server.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config;
use crate::core::crypto::{self, EncryptionKey};
use crate::core::domain::SecretRecord;
use crate::core::env;
use crate::core::keys;
use crate::core::store::{Sqlite, Store};
use crate::core::types::{Plaintext, SecretKey, SecretMap};
use crate::core::validation::validate_key;
use crate::error::Result;

/// An opened store plus the key that seals its values.
#[derive(Clone)]
pub struct Vault {
    store: Arc<dyn Store>,
    key: EncryptionKey,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault").field("key", &self.key).finish()
    }
}

impl Vault {
    /// Open the on-disk store and load its key.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotInitialized` if `lockbox init` has not run
    /// against this store, or a `StoreError` if it cannot be opened.
    pub fn open(db: Option<&Path>) -> Result<Self> {
        let path = config::store_path(db)?;
        let store = Sqlite::open(&path)?;
        Self::from_store(Arc::new(store))
    }

    /// Wrap an already opened store, loading its key.
    pub fn from_store(store: Arc<dyn Store>) -> Result<Self> {
        let key = keys::load_key(store.as_ref())?;
        Ok(Self { store, key })
    }

    /// Pair a store with an explicit key.
    pub fn new(store: Arc<dyn Store>, key: EncryptionKey) -> Self {
        Self { store, key }
    }

    /// The underlying store.
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Encrypt and store a secret, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an unusable key name.
    pub fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        let sealed = crypto::encrypt(value, self.key.as_bytes())?;
        self.store.upsert_secret(key, &sealed)
    }

    /// Fetch and decrypt a secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if absent, or a `CryptoError` if the
    /// stored blob does not open under this vault's key.
    pub fn get(&self, key: &str) -> Result<Plaintext> {
        let sealed = self.store.get_secret(key)?;
        crypto::decrypt(&sealed, self.key.as_bytes())
    }

    /// Remove a secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the key did not exist.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.store.delete_secret(key)
    }

    /// All secret keys, ascending.
    pub fn list(&self) -> Result<Vec<SecretKey>> {
        self.store.list_secrets()
    }

    /// Key and timestamps for every secret, ascending.
    pub fn records(&self) -> Result<Vec<SecretRecord>> {
        self.store.records()
    }

    /// Decrypt every secret into a key to plaintext mapping.
    ///
    /// Fails on the first key that cannot be read or decrypted.
    pub fn decrypt_all(&self) -> Result<SecretMap> {
        let keys = self.list()?;
        debug!(count = keys.len(), "decrypting all secrets");

        let mut map = SecretMap::new();
        for key in keys {
            let value = self.get(&key)?;
            map.insert(key, value);
        }
        Ok(map)
    }

    /// Export lines for every secret, ascending by key.
    ///
    /// Lines are produced lazily so a caller can stream them; an error on
    /// one key ends the sequence but leaves earlier lines valid.
    pub fn export_lines(&self) -> Result<impl Iterator<Item = Result<Zeroizing<Vec<u8>>>> + '_> {
        Ok(self.export_keys(self.list()?))
    }

    /// Export lines for exactly `keys`, in the order given.
    ///
    /// Lets a caller inspect a key listing and export that same listing.
    pub fn export_keys(
        &self,
        keys: Vec<SecretKey>,
    ) -> impl Iterator<Item = Result<Zeroizing<Vec<u8>>>> + '_ {
        keys.into_iter().map(move |key| {
            let value = self.get(&key)?;
            Ok(Zeroizing::new(env::format_export_line(&key, &value)))
        })
    }

    /// All export lines concatenated.
    pub fn export(&self) -> Result<Zeroizing<Vec<u8>>> {
        let mut out = Zeroizing::new(Vec::new());
        for line in self.export_lines()? {
            out.extend_from_slice(&line?);
        }
        Ok(out)
    }
}
