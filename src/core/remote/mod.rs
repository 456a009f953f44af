//! Read-only remote access to a vault.
//!
//! A plain HTTP protocol served on loopback only. It is unauthenticated and
//! unencrypted: values cross the wire as plaintext, so anything beyond the
//! local host must be tunnelled by the caller.
//!
//! | Route             | Success                               | Failure          |
//! |-------------------|---------------------------------------|------------------|
//! | `GET /health`     | `{"status":"ok"}`                     |                  |
//! | `GET /secrets`    | JSON array of keys, ascending         | 500              |
//! | `GET /secrets/K`  | decrypted value, `text/plain`         | 404 / 400 / 500  |
//! | `GET /env`        | `export K="v"` lines, ascending       | 500              |

use std::fmt;
use std::str::FromStr;

use crate::error::{RemoteError, Result};

mod client;
mod server;

pub use client::Client;
pub use server::{router, Server, ServerContext};

/// Health check route.
pub const HEALTH_PATH: &str = "/health";

/// Key listing route; `/secrets/{key}` fetches one value.
pub const SECRETS_PATH: &str = "/secrets";

/// Bulk export route.
pub const EXPORT_PATH: &str = "/env";

/// Address of a remote server.
///
/// The canonical form is a bare `HOST:PORT`. An `http://HOST:PORT` URL,
/// optionally with a trailing `/`, is accepted and normalised. Anything else
/// (another scheme, a path, credentials, a query) is rejected rather than
/// guessed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    /// Parse and normalise a remote address.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::InvalidEndpoint` describing what is wrong.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: &str| RemoteError::InvalidEndpoint {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let mut rest = input.trim();
        if let Some((scheme, after)) = rest.split_once("://") {
            if !scheme.eq_ignore_ascii_case("http") {
                return Err(invalid("only http:// or a bare HOST:PORT is supported").into());
            }
            rest = after.strip_suffix('/').unwrap_or(after);
        }

        if rest.contains(['/', '?', '#', '@']) {
            return Err(invalid("expected HOST:PORT with no path").into());
        }

        let (host, port) = rest
            .rsplit_once(':')
            .ok_or_else(|| invalid("missing port, expected HOST:PORT"))?;

        if host.is_empty() {
            return Err(invalid("missing host").into());
        }
        let bracketed = host.starts_with('[') && host.ends_with(']');
        if host.contains(':') && !bracketed {
            return Err(invalid("IPv6 hosts must be written as [addr]:PORT").into());
        }

        let port: u16 = port
            .parse()
            .map_err(|_| invalid("port must be a number between 1 and 65535"))?;
        if port == 0 {
            return Err(invalid("port must be a number between 1 and 65535").into());
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    /// Host part, brackets kept for IPv6.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port part.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// `http://HOST:PORT`, with no trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}", self)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for Endpoint {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
