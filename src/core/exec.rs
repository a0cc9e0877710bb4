//! Environment materialization.
//!
//! Merges resolved variables over the ambient process environment and either
//! renders them for --dry-run or replaces the current process image with the
//! target command.

use std::collections::HashMap;
use std::process::Command;

use tracing::debug;

use crate::core::resolve::EnvMap;
use crate::error::{Error, Result};

/// Render resolved variables as `NAME=VALUE` lines.
///
/// This is the --dry-run output format: one line per resolved variable, no
/// quoting, nothing but the resolved subset.
pub fn render(resolved: &EnvMap) -> String {
    let mut out = String::new();
    for (name, value) in resolved {
        out.push_str(name);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Overlay resolved variables onto an ambient environment snapshot.
///
/// Every resolved key is set or overwritten; ambient keys not named in
/// `resolved` keep their value.
pub fn overlay(
    ambient: impl IntoIterator<Item = (String, String)>,
    resolved: &EnvMap,
) -> HashMap<String, String> {
    let mut merged: HashMap<String, String> = ambient.into_iter().collect();
    for (name, value) in resolved {
        merged.insert(name.clone(), value.clone());
    }
    merged
}

/// Replace the current process with `command`, carrying the merged
/// environment.
///
/// `command[0]` is both the program and argv[0]; the remaining elements pass
/// through unmodified. On Unix this only returns on launch failure. On other
/// platforms the command is spawned and its exit code forwarded.
pub fn replace(command: &[String], resolved: &EnvMap) -> Result<()> {
    let program = command.first().ok_or(Error::NoCommand)?;
    let merged = overlay(std::env::vars(), resolved);

    debug!("launching {} with {} resolved variables", program, resolved.len());

    let mut cmd = Command::new(program);
    cmd.args(&command[1..]).env_clear().envs(&merged);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;

        let err = cmd.exec();
        Err(Error::Launch {
            command: program.clone(),
            source: err,
        })
    }

    #[cfg(not(unix))]
    {
        let status = cmd.status().map_err(|source| Error::Launch {
            command: program.clone(),
            source,
        })?;
        std::process::exit(status.code().unwrap_or(1));
    }
}
