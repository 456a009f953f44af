//! Where secrets come from: the local store or a remote server.

use std::path::Path;

use tracing::debug;

use crate::core::remote::Client;
use crate::core::types::SecretMap;
use crate::core::vault::Vault;
use crate::error::Result;

/// Source selected by the `--remote` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    Local(Option<&'a Path>),
    Remote(&'a str),
}

impl<'a> Source<'a> {
    pub fn new(db: Option<&'a Path>, remote: Option<&'a str>) -> Self {
        match remote {
            Some(remote) => Source::Remote(remote),
            None => Source::Local(db),
        }
    }

    /// Decrypted key to value mapping from this source.
    pub fn secrets(self) -> Result<SecretMap> {
        match self {
            Source::Local(db) => {
                debug!("resolving secrets from local store");
                Vault::open(db)?.decrypt_all()
            }
            Source::Remote(remote) => {
                debug!(remote, "resolving secrets from remote");
                Client::connect(remote)?.fetch_all()
            }
        }
    }
}
