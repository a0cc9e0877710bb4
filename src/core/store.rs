//! KeePass database access.
//!
//! Wraps the `keepass` driver crate: opens a database file with the master
//! password and looks up groups and entries by path. Read-only; kpenv never
//! writes credential data.

use std::fs::File;
use std::path::Path;

use keepass::db::{Entry, Group, Node};
use keepass::{Database, DatabaseKey};
use tracing::debug;

use crate::core::path::CredentialPath;
use crate::error::Result;

/// An open, decrypted credential store.
pub struct Store {
    db: Database,
}

/// Result of looking up a path in the store.
///
/// A group and an entry may share a path; the lookup reports the group in
/// that case, so callers never see both.
pub enum Lookup<'a> {
    Group(&'a Group),
    Entry(&'a Entry),
    NotFound,
}

impl Store {
    /// Open a database file and decrypt it with the master password.
    pub fn open(path: &Path, password: &str) -> Result<Self> {
        debug!("opening database {}", path.display());
        let key = DatabaseKey::new().with_password(password);
        let db = Database::open(&mut File::open(path)?, key)?;
        Ok(Self { db })
    }

    /// Look up a path, preferring a group match over an entry match.
    pub fn lookup(&self, path: &CredentialPath) -> Lookup<'_> {
        if let Some(group) = find_group(&self.db.root, path.segments()) {
            return Lookup::Group(group);
        }
        if let Some(entry) = find_entry(&self.db.root, path.segments()) {
            return Lookup::Entry(entry);
        }
        Lookup::NotFound
    }
}

/// Walk child groups by name from the root, one segment each.
pub fn find_group<'a>(root: &'a Group, segments: &[String]) -> Option<&'a Group> {
    let mut current = root;
    for segment in segments {
        current = child_group(current, segment)?;
    }
    Some(current)
}

/// Walk all but the last segment as groups, then match a direct child entry
/// by title.
pub fn find_entry<'a>(root: &'a Group, segments: &[String]) -> Option<&'a Entry> {
    let (title, parents) = segments.split_last()?;
    let mut current = root;
    for segment in parents {
        current = child_group(current, segment)?;
    }
    current.children.iter().find_map(|node| match node {
        Node::Entry(entry) if entry.get_title().unwrap_or("") == title => Some(entry),
        _ => None,
    })
}

fn child_group<'a>(group: &'a Group, name: &str) -> Option<&'a Group> {
    group.children.iter().find_map(|node| match node {
        Node::Group(child) if child.name == name => Some(child),
        _ => None,
    })
}
