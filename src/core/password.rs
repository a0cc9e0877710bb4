//! Master password acquisition.
//!
//! The password comes from the `KEEPASS_PASSWORD` environment variable when
//! set, from piped stdin when not attached to a terminal, or from a hidden
//! interactive prompt. Interrupt or end-of-input aborts the invocation.

use std::io::{self, IsTerminal};

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::PASSWORD_ENV;
use crate::error::{Error, Result};

/// Obtain the master password.
///
/// The result is wrapped in [`Zeroizing`] so the password is wiped from
/// memory when dropped.
pub fn master_password() -> Result<Zeroizing<String>> {
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        if !password.is_empty() {
            debug!("using master password from {}", PASSWORD_ENV);
            return Ok(Zeroizing::new(password));
        }
    }

    if !io::stdin().is_terminal() {
        return read_piped_password();
    }

    let password = Password::new()
        .with_prompt("Enter KeePass master password")
        .allow_empty_password(true)
        .interact()
        .map_err(|_| Error::PasswordAborted)?;
    Ok(Zeroizing::new(password))
}

/// Read one line of piped input as the password.
fn read_piped_password() -> Result<Zeroizing<String>> {
    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .map_err(|_| Error::PasswordAborted)?;
    if read == 0 {
        return Err(Error::PasswordAborted);
    }
    Ok(Zeroizing::new(
        line.trim_end_matches(['\r', '\n']).to_string(),
    ))
}
