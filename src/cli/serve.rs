//! Serve command - expose the store read-only on loopback.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use crate::cli::output;
use crate::core::remote::Server;
use crate::core::vault::Vault;
use crate::error::Result;

/// Serve the store on `127.0.0.1:port` until interrupted.
pub fn execute(db: Option<&Path>, port: u16) -> Result<()> {
    let vault = Vault::open(db)?;
    let server = Server::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, port)), vault)?;

    output::success(&format!(
        "Server listening on http://{}",
        server.local_addr()?
    ));
    output::hint("values are served unencrypted; tunnel the port to reach it from elsewhere");

    server.run()
}
