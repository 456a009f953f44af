//! Error types.
//!
//! Each layer owns a focused error enum; [`Error`] aggregates them at the
//! application boundary so callers can still match on the category.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for all lockbox operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error means "the requested secret does not exist",
    /// whichever layer reported it.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Store(StoreError::NotFound(_)) | Error::Remote(RemoteError::NotFound(_))
        )
    }
}

/// Authenticated encryption failures.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid key size: expected {expected} bytes, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    #[error("ciphertext too short: expected at least {min} bytes, got {len}")]
    MalformedCiphertext { len: usize, min: usize },

    /// Tag mismatch. Tampered data and a wrong key are deliberately the same case.
    #[error("decryption failed: invalid key or corrupted data")]
    AuthenticationFailure,

    #[error("encryption failed")]
    EncryptionFailed,
}

/// Encryption key lifecycle failures.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("encryption key not found, store is not initialized")]
    NotInitialized,

    #[error("stored encryption key is corrupt: {0}")]
    CorruptKey(String),
}

/// Persistent store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("secret '{0}' not found")]
    NotFound(String),

    #[error("config entry '{0}' not found")]
    ConfigNotFound(String),

    #[error("failed to open store at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not determine home directory, set LOCKBOX_DB_PATH")]
    NoHomeDir,

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Remote protocol failures, on either side of the connection.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("invalid remote '{input}': {reason}")]
    InvalidEndpoint { input: String, reason: String },

    #[error("refusing to bind non-loopback address {0}")]
    NotLoopback(std::net::SocketAddr),

    #[error("failed to reach remote: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote server returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("secret '{0}' not found on remote")]
    NotFound(String),

    #[error("server error: {0}")]
    Server(String),
}

/// Subprocess failures for `run`.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("no command provided, usage: lockbox run -- command [args...]")]
    NoCommand,

    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Input validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret key cannot be empty")]
    EmptyKey,

    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
