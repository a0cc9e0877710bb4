//! Kpenv - run commands with secrets from a KeePass database.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Resolve secrets and launch the command
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── path          # Slash-delimited credential paths
//!     ├── store         # KeePass database access and path lookup
//!     ├── resolve       # Group/entry resolution into env variables
//!     ├── exec          # Environment merge, dry-run, process replace
//!     ├── password      # Master password acquisition
//!     └── constants     # Defaults and magic strings
//! ```
//!
//! # Behavior
//!
//! A path like `EnvVars` or `Services/Stripe` addresses either a group or an
//! entry in the database. A group yields one variable per child entry (title
//! and `value` attribute); an entry yields its custom attributes verbatim.
//! The resolved variables are overlaid on the ambient environment and the
//! target command replaces the current process.

pub mod cli;
pub mod core;
pub mod error;
