//! Store location resolution.
//!
//! The store file lives at `~/.lockbox/lockbox.db` unless an explicit path is
//! given (the `--db` flag, which clap also fills from `LOCKBOX_DB_PATH`).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::error::{Result, StoreError};

/// Resolve the store file path.
///
/// An explicit path wins; otherwise the per-user default under HOME is used.
///
/// # Errors
///
/// Returns `StoreError::NoHomeDir` when no explicit path is given and the
/// home directory cannot be determined.
pub fn store_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(home.join(constants::STORE_DIR).join(constants::STORE_FILE))
}

/// Create the parent directory of `path` with owner-only permissions.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };

    if dir.exists() {
        return Ok(());
    }

    debug!(dir = %dir.display(), "creating store directory");
    fs::create_dir_all(dir).map_err(StoreError::Io)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o700)).map_err(StoreError::Io)?;
    }

    Ok(())
}

/// SQLite sidecar files that inherit the main file's mode when created.
const SIDECAR_SUFFIXES: [&str; 3] = ["-wal", "-shm", "-journal"];

/// Create the store file if missing and restrict it, plus any existing
/// sidecars, to owner read/write (Unix only).
///
/// Must run before SQLite opens the file: the `-wal` and `-shm` files are
/// created with whatever mode the main file has at that moment.
pub fn restrict_file(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        fs::OpenOptions::new()
            .create(true)
            .write(true)
            .mode(0o600)
            .open(path)
            .map_err(StoreError::Io)?;

        let private = || fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, private()).map_err(StoreError::Io)?;

        for suffix in SIDECAR_SUFFIXES {
            let mut sidecar = path.as_os_str().to_os_string();
            sidecar.push(suffix);
            let sidecar = PathBuf::from(sidecar);
            if sidecar.exists() {
                fs::set_permissions(&sidecar, private()).map_err(StoreError::Io)?;
            }
        }
    }
    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}
