//! Blocking client for the remote protocol.
//!
//! One synchronous round trip per call and no retries: any non-success
//! status is a hard failure.

use reqwest::blocking::Response;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;
use zeroize::Zeroizing;

use super::{Endpoint, EXPORT_PATH, HEALTH_PATH, SECRETS_PATH};
use crate::core::types::{Plaintext, SecretKey, SecretMap};
use crate::error::{RemoteError, Result};

#[derive(Deserialize)]
struct Health {
    status: String,
}

/// Client bound to one remote endpoint.
pub struct Client {
    endpoint: Endpoint,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Build a client for `endpoint`.
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("lockbox/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RemoteError::Transport)?;
        Ok(Self { endpoint, http })
    }

    /// Parse `remote` and build a client for it.
    pub fn connect(remote: &str) -> Result<Self> {
        Self::new(Endpoint::parse(remote)?)
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Check that the server is up.
    pub fn health(&self) -> Result<()> {
        let resp = self.send(HEALTH_PATH, None)?;
        let health: Health = serde_json::from_slice(&read_body(resp)?)?;
        if health.status != "ok" {
            return Err(RemoteError::Server(format!("unhealthy: {}", health.status)).into());
        }
        Ok(())
    }

    /// All secret keys, ascending.
    pub fn list_keys(&self) -> Result<Vec<SecretKey>> {
        let resp = self.send(SECRETS_PATH, None)?;
        Ok(serde_json::from_slice(&read_body(resp)?)?)
    }

    /// One decrypted value.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotFound` if the server has no such key.
    pub fn get(&self, key: &str) -> Result<Plaintext> {
        let path = format!("{}/{}", SECRETS_PATH, urlencoding::encode(key));
        let resp = self.send(&path, Some(key))?;
        read_body(resp)
    }

    /// The bulk export body: `export KEY="value"` lines, ascending.
    pub fn export(&self) -> Result<Zeroizing<Vec<u8>>> {
        let resp = self.send(EXPORT_PATH, None)?;
        read_body(resp)
    }

    /// Rebuild the full key to plaintext mapping: list, then one get per key.
    pub fn fetch_all(&self) -> Result<SecretMap> {
        let keys = self.list_keys()?;
        debug!(count = keys.len(), remote = %self.endpoint, "fetching secrets");

        let mut map = SecretMap::new();
        for key in keys {
            let value = self.get(&key)?;
            map.insert(key, value);
        }
        Ok(map)
    }

    fn send(&self, path: &str, key: Option<&str>) -> Result<Response> {
        let url = format!("{}{}", self.endpoint.base_url(), path);
        debug!(url = %url, "remote request");

        let resp = self
            .http
            .get(&url)
            .send()
            .map_err(RemoteError::Transport)?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        if let (StatusCode::NOT_FOUND, Some(key)) = (status, key) {
            return Err(RemoteError::NotFound(key.to_string()).into());
        }

        let body = resp.text().unwrap_or_default();
        Err(RemoteError::Status {
            status: status.as_u16(),
            body: body.trim().to_string(),
        }
        .into())
    }
}

fn read_body(resp: Response) -> Result<Zeroizing<Vec<u8>>> {
    let bytes = resp.bytes().map_err(RemoteError::Transport)?;
    Ok(Zeroizing::new(bytes.to_vec()))
}
