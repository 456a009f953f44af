//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

use zeroize::Zeroizing;

/// A secret key name (e.g., DATABASE_URL, API_KEY).
pub type SecretKey = String;

/// A sealed secret value: `nonce || ciphertext || tag`.
pub type EncryptedValue = Vec<u8>;

/// A decrypted secret value, wiped on drop.
pub type Plaintext = Zeroizing<Vec<u8>>;

/// Fully resolved key to plaintext mapping, as consumed by `env` and `run`.
pub type SecretMap = BTreeMap<SecretKey, Plaintext>;
