//! Path resolution.
//!
//! Turns a group or entry addressed by a [`CredentialPath`] into a flat
//! name→value mapping of environment variables.

use std::collections::BTreeMap;

use keepass::db::{Entry, Group, Node};
use tracing::debug;

use crate::core::constants::{RESERVED_FIELDS, VALUE_FIELD};
use crate::core::path::CredentialPath;
use crate::core::store::{Lookup, Store};
use crate::error::{Error, Result};

/// Resolved environment variables, keyed by name.
///
/// Never empty on success; an empty result is a resolution failure. Insert
/// overwrites, so a duplicate name keeps the last value seen.
pub type EnvMap = BTreeMap<String, String>;

/// Resolve a path to environment variables.
///
/// A group yields one variable per qualifying child entry: the trimmed entry
/// title names the variable and the entry's `value` attribute supplies the
/// value. An entry yields its custom attributes verbatim. When a group and
/// an entry share a path, the group wins.
pub fn resolve(store: &Store, path: &CredentialPath) -> Result<EnvMap> {
    match store.lookup(path) {
        Lookup::Group(group) => env_from_group(group, path),
        Lookup::Entry(entry) => env_from_entry(entry, path),
        Lookup::NotFound => Err(Error::PathNotFound(path.to_string())),
    }
}

/// Collect variables from a group's direct child entries.
///
/// Entries with a blank title or an empty/absent `value` attribute are
/// skipped. Values pass through as opaque text.
pub fn env_from_group(group: &Group, path: &CredentialPath) -> Result<EnvMap> {
    let mut env = EnvMap::new();

    for node in &group.children {
        let Node::Entry(entry) = node else { continue };

        let name = entry.get_title().unwrap_or("").trim();
        if name.is_empty() {
            debug!("skipping entry with blank title in group {}", path);
            continue;
        }

        match entry.get(VALUE_FIELD) {
            Some(value) if !value.is_empty() => {
                env.insert(name.to_string(), value.to_string());
            }
            _ => debug!("skipping entry {} without a {} attribute", name, VALUE_FIELD),
        }
    }

    if env.is_empty() {
        return Err(Error::EmptyGroup(path.to_string()));
    }
    Ok(env)
}

/// Collect an entry's custom attributes verbatim.
///
/// Custom attributes are every string field except the reserved
/// Title/UserName/Password/URL/Notes set. Names are not trimmed and empty
/// values are kept.
pub fn env_from_entry(entry: &Entry, path: &CredentialPath) -> Result<EnvMap> {
    let mut env = EnvMap::new();

    for field in entry.fields.keys() {
        if RESERVED_FIELDS.contains(&field.as_str()) {
            continue;
        }
        // Binary fields have no string form and are not attributes
        if let Some(value) = entry.get(field) {
            env.insert(field.clone(), value.to_string());
        }
    }

    if env.is_empty() {
        return Err(Error::EmptyEntry(path.to_string()));
    }
    Ok(env)
}
