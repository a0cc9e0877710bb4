//! Kpenv - run commands with secrets from a KeePass database.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kpenv::cli::output;
use kpenv::cli::{execute, Cli};
use kpenv::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("KPENV_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("kpenv=debug")
        } else {
            EnvFilter::new("kpenv=warn")
        }
    });

    // Log to stderr: --dry-run output on stdout must stay machine-readable
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::NoCommand => Some("pass the command after '--', or use --dry-run"),
            Error::StoreOpen(_) => Some("check the database path and master password"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
