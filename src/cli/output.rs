//! Terminal output helpers.
//!
//! Diagnostics go to stderr; stdout is reserved for --dry-run output.
//! Styling is handled by `console`, which respects NO_COLOR and non-tty
//! streams.

use console::style;

/// Print an error message to stderr (red).
///
/// Example: `✗ the path Ops was neither a group nor an entry`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ check the database path and master password`
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
}
