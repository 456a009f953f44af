//! Authenticated encryption for secret values.
//!
//! AES-256-GCM with a fresh random 96-bit nonce per call. The sealed blob is
//! laid out as `nonce[12] || ciphertext || tag[16]`, which is also the on-disk
//! and wire format.

use std::fmt;

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::{CryptoError, Result};

/// Key length in bytes (AES-256).
pub const KEY_SIZE: usize = 32;

/// Nonce length in bytes (96-bit GCM nonce).
pub const NONCE_SIZE: usize = 12;

/// Authentication tag length appended by the seal operation.
pub const TAG_SIZE: usize = 16;

/// The single store-wide symmetric key.
///
/// Wiped from memory on drop. `Debug` never prints the key bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionKey(Zeroizing<[u8; KEY_SIZE]>);

impl EncryptionKey {
    /// Generate a new key from the operating system's CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = Zeroizing::new([0u8; KEY_SIZE]);
        OsRng.fill_bytes(&mut *bytes);
        Self(bytes)
    }

    /// Build a key from raw bytes, which must be exactly [`KEY_SIZE`] long.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKeySize` for any other length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        check_key_size(bytes)?;
        let mut key = Zeroizing::new([0u8; KEY_SIZE]);
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Lowercase hex encoding, the persisted form.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.as_bytes()))
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey(..)")
    }
}

fn check_key_size(key: &[u8]) -> Result<()> {
    if key.len() != KEY_SIZE {
        return Err(CryptoError::InvalidKeySize {
            expected: KEY_SIZE,
            actual: key.len(),
        }
        .into());
    }
    Ok(())
}

/// Encrypt `plaintext` under `key`.
///
/// Empty plaintext is valid and yields a nonce plus a bare tag.
///
/// # Errors
///
/// Returns `CryptoError::InvalidKeySize` if `key` is not 32 bytes.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    check_key_size(key)?;
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| CryptoError::InvalidKeySize {
        expected: KEY_SIZE,
        actual: key.len(),
    })?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let sealed = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| CryptoError::EncryptionFailed)?;

    let mut blob = Vec::with_capacity(NONCE_SIZE + sealed.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&sealed);
    Ok(blob)
}

/// Decrypt a blob produced by [`encrypt`].
///
/// # Errors
///
/// - `CryptoError::InvalidKeySize` if `key` is not 32 bytes
/// - `CryptoError::MalformedCiphertext` if the blob is shorter than a nonce
/// - `CryptoError::AuthenticationFailure` on a bad tag (tampering or wrong key)
pub fn decrypt(blob: &[u8], key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    check_key_size(key)?;
    if blob.len() < NONCE_SIZE {
        return Err(CryptoError::MalformedCiphertext {
            len: blob.len(),
            min: NONCE_SIZE,
        }
        .into());
    }

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| CryptoError::InvalidKeySize {
        expected: KEY_SIZE,
        actual: key.len(),
    })?;

    let (nonce_bytes, sealed) = blob.split_at(NONCE_SIZE);
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), sealed)
        .map_err(|_| CryptoError::AuthenticationFailure)?;

    Ok(Zeroizing::new(plaintext))
}
