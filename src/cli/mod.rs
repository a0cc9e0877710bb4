//! Command-line interface.

pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::Parser;

use crate::core::constants::{DB_PATH_ENV, DEFAULT_PATH, PATH_ENV};

/// Kpenv - run commands with secrets from a KeePass database.
#[derive(Parser, Debug)]
#[command(
    name = "kpenv",
    about = "Run a command with environment variables loaded from a KeePass database",
    version,
    after_help = "Example: kpenv --path Services/Stripe -- npm start"
)]
pub struct Cli {
    /// Path to the KeePass .kdbx database file [default: ~/.keypass/.kp.kdbx]
    #[arg(long = "db", value_name = "FILE", env = DB_PATH_ENV)]
    pub db: Option<PathBuf>,

    /// Path to the KeePass group or entry containing the secrets
    #[arg(long, value_name = "PATH", env = PATH_ENV, default_value = DEFAULT_PATH)]
    pub path: String,

    /// Print NAME=VALUE pairs and exit; do not run a command
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run, preceded by '--' (not required with --dry-run)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Execute the command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    run::execute(cli)
}
