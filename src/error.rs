use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open KeePass database: {0}")]
    StoreOpen(#[from] keepass::error::DatabaseOpenError),

    #[error("the path {0} is neither a group nor an entry")]
    PathNotFound(String),

    #[error("no environment variables found in KeePass group {0}")]
    EmptyGroup(String),

    #[error("no key/value attributes found in KeePass entry {0}")]
    EmptyEntry(String),

    #[error("no command specified after '--'")]
    NoCommand,

    #[error("password entry aborted")]
    PasswordAborted,

    #[error("failed to launch {command}: {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Store-open and I/O failures exit 1, resolution and usage failures
    /// exit 2, an aborted password prompt exits 130, and launch failures
    /// follow the shell convention (127 command not found, 126 otherwise).
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::StoreOpen(_) | Error::Io(_) => 1,
            Error::PathNotFound(_)
            | Error::EmptyGroup(_)
            | Error::EmptyEntry(_)
            | Error::NoCommand => 2,
            Error::PasswordAborted => 130,
            Error::Launch { source, .. } => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    127
                } else {
                    126
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
