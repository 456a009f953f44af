//! Encryption key lifecycle.
//!
//! One key per store, generated exactly once and kept hex-encoded in the
//! config mapping under [`ENCRYPTION_KEY_NAME`]. It is never regenerated or
//! rotated.

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::constants::ENCRYPTION_KEY_NAME;
use crate::core::crypto::{EncryptionKey, KEY_SIZE};
use crate::core::store::Store;
use crate::error::{Error, KeyError, Result, StoreError};

/// Result of [`initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// A fresh key was generated and persisted.
    Created,
    /// A key was already present and left untouched.
    AlreadyInitialized,
}

/// Ensure the store has an encryption key.
///
/// Idempotent: an existing key is never replaced.
///
/// # Errors
///
/// Propagates storage errors other than the key being absent.
pub fn initialize(store: &dyn Store) -> Result<InitOutcome> {
    match store.get_config(ENCRYPTION_KEY_NAME) {
        Ok(_) => {
            debug!("encryption key already present");
            return Ok(InitOutcome::AlreadyInitialized);
        }
        Err(Error::Store(StoreError::ConfigNotFound(_))) => {}
        Err(e) => return Err(e),
    }

    let key = EncryptionKey::generate();
    store.set_config(ENCRYPTION_KEY_NAME, key.to_hex().as_bytes())?;
    info!("generated new encryption key");

    Ok(InitOutcome::Created)
}

/// Load the store's encryption key.
///
/// # Errors
///
/// - `KeyError::NotInitialized` if no key has been created yet
/// - `KeyError::CorruptKey` if the stored value is not 32 bytes of hex
pub fn load_key(store: &dyn Store) -> Result<EncryptionKey> {
    let stored = match store.get_config(ENCRYPTION_KEY_NAME) {
        Ok(bytes) => Zeroizing::new(bytes),
        Err(Error::Store(StoreError::ConfigNotFound(_))) => {
            return Err(KeyError::NotInitialized.into())
        }
        Err(e) => return Err(e),
    };

    let text = std::str::from_utf8(&stored)
        .map_err(|_| KeyError::CorruptKey("not valid UTF-8".to_string()))?;
    let raw = Zeroizing::new(
        hex::decode(text.trim()).map_err(|e| KeyError::CorruptKey(e.to_string()))?,
    );

    if raw.len() != KEY_SIZE {
        return Err(KeyError::CorruptKey(format!(
            "expected {} bytes, got {}",
            KEY_SIZE,
            raw.len()
        ))
        .into());
    }

    EncryptionKey::from_slice(&raw)
}
