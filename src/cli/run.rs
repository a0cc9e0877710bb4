//! Run command.
//!
//! Resolves a KeePass path into environment variables, then either prints
//! them (--dry-run) or replaces the current process with the target command.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::Cli;
use crate::core::constants::{DEFAULT_DB_DIR, DEFAULT_DB_FILE};
use crate::core::path::CredentialPath;
use crate::core::store::Store;
use crate::core::{exec, password, resolve};
use crate::error::{Error, Result};

/// Resolve secrets and run the target command.
pub fn execute(cli: Cli) -> Result<()> {
    if !cli.dry_run && cli.command.is_empty() {
        return Err(Error::NoCommand);
    }

    let db_path = cli.db.unwrap_or_else(default_db_path);
    debug!("using database {}", db_path.display());

    let master_password = password::master_password()?;
    let store = Store::open(&db_path, &master_password)?;

    let path = CredentialPath::parse(&cli.path);
    let env = resolve::resolve(&store, &path)?;
    debug!("resolved {} variables from {}", env.len(), path);

    if cli.dry_run {
        print!("{}", exec::render(&env));
        return Ok(());
    }

    exec::replace(&cli.command, &env)
}

/// Default database location: `~/.keypass/.kp.kdbx`.
fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DB_DIR)
        .join(DEFAULT_DB_FILE)
}
