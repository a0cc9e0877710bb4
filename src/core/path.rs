//! Slash-delimited paths into the credential store.

use std::fmt;

/// A parsed path addressing a group or entry in the store.
///
/// The input is split on `/` with no escaping; segments are matched verbatim
/// against group names and entry titles. The raw string is kept for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPath {
    raw: String,
    segments: Vec<String>,
}

impl CredentialPath {
    /// Parse a raw path string.
    pub fn parse(raw: &str) -> Self {
        let segments = raw.split('/').map(str::to_string).collect();
        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    /// Path segments, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for CredentialPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
