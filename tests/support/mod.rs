//! Test support utilities for kpenv integration tests.
//!
//! Builds throwaway KeePass databases with the `keepass` crate's save
//! support and provides a preconfigured command for the kpenv binary.

#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use keepass::config::DatabaseConfig;
use keepass::db::{Entry, Group, Node, Value};
use keepass::{Database, DatabaseKey};
use tempfile::TempDir;

/// Master password used for every fixture database.
pub const MASTER_PASSWORD: &str = "fixture-master";

/// A temporary KeePass database on disk.
pub struct TestStore {
    dir: TempDir,
    path: PathBuf,
}

impl TestStore {
    /// Write a database whose root group has the given children.
    pub fn new(children: Vec<Node>) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("store.kdbx");

        let mut db = Database::new(DatabaseConfig::default());
        db.root.children = children;

        let key = DatabaseKey::new().with_password(MASTER_PASSWORD);
        let mut file = File::create(&path).expect("failed to create database file");
        db.save(&mut file, key).expect("failed to save database");

        Self { dir, path }
    }

    /// Path to the .kdbx file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A kpenv command pointed at this database, password supplied via env.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("kpenv").expect("failed to find kpenv binary");
        cmd.env("KEEPASS_PASSWORD", MASTER_PASSWORD);
        cmd.env_remove("KEEPASS_DB_PATH");
        cmd.env_remove("KEEPASS_PATH");
        cmd.arg("--db").arg(&self.path);
        cmd
    }
}

/// An entry resolvable as a group member: title plus a `value` attribute.
pub fn value_entry(title: &str, value: &str) -> Entry {
    let mut entry = Entry::new();
    entry
        .fields
        .insert("Title".to_string(), Value::Unprotected(title.to_string()));
    entry
        .fields
        .insert("value".to_string(), Value::Unprotected(value.to_string()));
    entry
}

/// An entry with arbitrary custom attributes.
pub fn attr_entry(title: &str, attrs: &[(&str, &str)]) -> Entry {
    let mut entry = Entry::new();
    entry
        .fields
        .insert("Title".to_string(), Value::Unprotected(title.to_string()));
    for (name, value) in attrs {
        entry
            .fields
            .insert(name.to_string(), Value::Unprotected(value.to_string()));
    }
    entry
}

/// A group with the given children.
pub fn group(name: &str, children: Vec<Node>) -> Group {
    let mut group = Group::new(name);
    group.children = children;
    group
}
