//! Tests for launching commands through the kpenv binary.

mod support;

use keepass::db::Node;
use predicates::prelude::*;
use support::{group, value_entry, TestStore};

#[test]
fn test_missing_command_exits_2() {
    let store = TestStore::new(vec![Node::Group(group(
        "EnvVars",
        vec![Node::Entry(value_entry("UNUSED", "x"))],
    ))]);

    store
        .cmd()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no command specified"));
}

#[cfg(unix)]
#[test]
fn test_run_injects_resolved_variables() {
    let store = TestStore::new(vec![Node::Group(group(
        "EnvVars",
        vec![Node::Entry(value_entry("INJECTED_VAR", "injected_value"))],
    ))]);

    store
        .cmd()
        .args(["--", "sh", "-c", "echo $INJECTED_VAR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("injected_value"));
}

#[cfg(unix)]
#[test]
fn test_run_preserves_ambient_environment() {
    let store = TestStore::new(vec![Node::Group(group(
        "EnvVars",
        vec![Node::Entry(value_entry("INJECTED_VAR", "new"))],
    ))]);

    store
        .cmd()
        .env("AMBIENT_VAR", "kept")
        .args(["--", "sh", "-c", "echo $AMBIENT_VAR:$INJECTED_VAR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kept:new"));
}

#[cfg(unix)]
#[test]
fn test_run_resolved_overrides_ambient() {
    let store = TestStore::new(vec![Node::Group(group(
        "EnvVars",
        vec![Node::Entry(value_entry("SHADOWED_VAR", "resolved"))],
    ))]);

    store
        .cmd()
        .env("SHADOWED_VAR", "ambient")
        .args(["--", "sh", "-c", "echo $SHADOWED_VAR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resolved"));
}

#[cfg(unix)]
#[test]
fn test_run_exit_code_passthrough() {
    let store = TestStore::new(vec![Node::Group(group(
        "EnvVars",
        vec![Node::Entry(value_entry("UNUSED", "x"))],
    ))]);

    // The command replaces the kpenv process, so its exit code is ours
    store
        .cmd()
        .args(["--", "sh", "-c", "exit 42"])
        .assert()
        .code(42);
}

#[cfg(unix)]
#[test]
fn test_run_command_not_found_exits_127() {
    let store = TestStore::new(vec![Node::Group(group(
        "EnvVars",
        vec![Node::Entry(value_entry("UNUSED", "x"))],
    ))]);

    store
        .cmd()
        .args(["--", "kpenv-no-such-command-exists"])
        .assert()
        .failure()
        .code(127)
        .stderr(predicate::str::contains("failed to launch"));
}

#[cfg(unix)]
#[test]
fn test_dry_run_never_launches() {
    let store = TestStore::new(vec![Node::Group(group(
        "EnvVars",
        vec![Node::Entry(value_entry("ONLY", "printed"))],
    ))]);

    // With --dry-run the trailing command is ignored, not executed
    store
        .cmd()
        .args(["--dry-run", "--", "sh", "-c", "echo LAUNCHED"])
        .assert()
        .success()
        .stdout("ONLY=printed\n");
}
