//! Lockbox - encrypted local secret storage.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lockbox::cli::output;
use lockbox::cli::{execute, Cli};
use lockbox::core::constants::LOG_ENV;
use lockbox::error::{Error, KeyError, RemoteError, RunError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("lockbox=debug,tower_http=debug")
        } else {
            EnvFilter::new("lockbox=warn")
        }
    });

    // stdout carries secret values and export lines; logs stay on stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.db) {
        let suggestion = match &e {
            Error::Key(KeyError::NotInitialized) => Some("run: lockbox init"),
            Error::Remote(RemoteError::Transport(_)) => Some("is `lockbox serve` running there?"),
            Error::Remote(RemoteError::InvalidEndpoint { .. }) => {
                Some("use HOST:PORT, e.g. 127.0.0.1:8100")
            }
            Error::Run(RunError::NoCommand) => Some("usage: lockbox run -- <command> [args...]"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
