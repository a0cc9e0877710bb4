//! Constants used throughout kpenv.
//!
//! Centralizes magic strings and configuration values.

/// Default database directory relative to HOME (~/.keypass).
pub const DEFAULT_DB_DIR: &str = ".keypass";

/// Default database file name (.kp.kdbx).
pub const DEFAULT_DB_FILE: &str = ".kp.kdbx";

/// Default group/entry path when --path is not given.
pub const DEFAULT_PATH: &str = "EnvVars";

/// Entry attribute that supplies the value during group resolution.
pub const VALUE_FIELD: &str = "value";

/// Environment variable overriding the interactive password prompt.
pub const PASSWORD_ENV: &str = "KEEPASS_PASSWORD";

/// Environment variable overriding --db.
pub const DB_PATH_ENV: &str = "KEEPASS_DB_PATH";

/// Environment variable overriding --path.
pub const PATH_ENV: &str = "KEEPASS_PATH";

/// Entry fields that are not custom attributes.
pub const RESERVED_FIELDS: &[&str] = &["Title", "UserName", "Password", "URL", "Notes"];
