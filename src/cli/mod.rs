//! Command-line interface.

pub mod completions;
pub mod env;
pub mod init;
pub mod output;
pub mod resolve;
pub mod run;
pub mod secrets;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::{DB_PATH_ENV, DEFAULT_PORT, PORT_ENV, REMOTE_ENV};

/// Lockbox - encrypted local secret storage.
#[derive(Parser)]
#[command(
    name = "lockbox",
    about = "Encrypted local secret storage with a read-only loopback server",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Store file (default: ~/.lockbox/lockbox.db)
    #[arg(long, global = true, env = DB_PATH_ENV, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the store and generate the encryption key
    Init,

    /// Set a secret value (overwrites an existing one)
    Set {
        /// Secret key (e.g., DATABASE_URL)
        key: String,
        /// Secret value
        value: String,
    },

    /// Print a secret value
    Get {
        /// Secret key
        key: String,
    },

    /// Delete a secret
    #[command(alias = "rm")]
    Delete {
        /// Secret key
        key: String,
    },

    /// List all secret keys
    List {
        /// Output as JSON, with timestamps
        #[arg(long)]
        json: bool,
    },

    /// Print secrets as shell export lines
    ///
    /// Use with eval: eval "$(lockbox env)"
    Env {
        /// Fetch from a running `lockbox serve` (HOST:PORT)
        #[arg(short, long, env = REMOTE_ENV, value_name = "HOST:PORT")]
        remote: Option<String>,
    },

    /// Run a command with secrets injected as env vars
    Run {
        /// Fetch from a running `lockbox serve` (HOST:PORT)
        #[arg(short, long, env = REMOTE_ENV, value_name = "HOST:PORT")]
        remote: Option<String>,

        /// Command and arguments to run
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Serve secrets read-only over HTTP on 127.0.0.1
    ///
    /// Unauthenticated and unencrypted; tunnel it if it must leave the host.
    Serve {
        /// Port to listen on
        #[arg(short, long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command against the store at `db` (or the default location).
pub fn execute(command: Command, db: Option<PathBuf>) -> crate::error::Result<()> {
    use Command::*;

    let db = db.as_deref();
    match command {
        Init => init::execute(db),
        Set { key, value } => secrets::set(db, &key, &value),
        Get { key } => secrets::get(db, &key),
        Delete { key } => secrets::delete(db, &key),
        List { json } => secrets::list(db, json),
        Env { remote } => env::execute(db, remote.as_deref()),
        Run { remote, command } => run::execute(db, remote.as_deref(), &command),
        Serve { port } => serve::execute(db, port),
        Completions { shell } => completions::execute(shell),
    }
}
