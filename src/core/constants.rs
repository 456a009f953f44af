//! Constants used throughout lockbox.
//!
//! Centralizes magic strings and configuration values.

/// Environment variable naming an explicit store file path.
pub const DB_PATH_ENV: &str = "LOCKBOX_DB_PATH";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "LOCKBOX_LOG";

/// Environment variable supplying a default for `--remote`.
pub const REMOTE_ENV: &str = "LOCKBOX_REMOTE";

/// Environment variable supplying a default for `serve --port`.
pub const PORT_ENV: &str = "LOCKBOX_PORT";

/// Store directory relative to HOME (~/.lockbox).
pub const STORE_DIR: &str = ".lockbox";

/// Store file name inside [`STORE_DIR`].
pub const STORE_FILE: &str = "lockbox.db";

/// Reserved config entry holding the hex-encoded encryption key.
pub const ENCRYPTION_KEY_NAME: &str = "encryption_key";

/// Default port for `lockbox serve`.
pub const DEFAULT_PORT: u16 = 8100;
