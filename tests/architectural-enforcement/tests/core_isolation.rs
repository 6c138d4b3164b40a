//! Integration Test: Core Isolation
//!
//! **Policy**: `engine/core` is headless. It MUST NOT depend on a terminal
//! library or an async runtime, MUST NOT touch files or sockets, and MUST
//! NOT keep session state in globals. Surfaces own all I/O.

use std::fs;

use architectural_enforcement::{find_violations, rust_sources, workspace_root};

const CORE_SRC: &str = "engine/core/src";
const TUI_SRC: &str = "tui/src";

fn report(violations: &[String], what: &str) {
    if violations.is_empty() {
        return;
    }

    eprintln!("\n{what}:");
    for violation in violations {
        eprintln!("  {violation}");
    }
    panic!("\nFound {} violation(s). Fix these before merging!", violations.len());
}

#[test]
fn test_core_sources_exist() {
    assert!(
        !rust_sources(CORE_SRC).is_empty(),
        "no sources under {CORE_SRC}; was the core moved?"
    );
}

#[test]
fn test_core_has_no_terminal_or_runtime_code() {
    let violations = find_violations(CORE_SRC, &["ratatui", "crossterm", "tokio", "futures::"]);
    report(&violations, "Terminal or async code in the headless core");
}

#[test]
fn test_core_does_no_io() {
    let violations = find_violations(
        CORE_SRC,
        &["std::fs", "std::net", "std::process", "stdin()", "stdout()", "println!"],
    );
    report(&violations, "I/O in the headless core (surfaces own I/O)");
}

#[test]
fn test_core_writes_nothing_out() {
    // Only the config document is read; no core type is serialized.
    let violations = find_violations(CORE_SRC, &["Serialize", "serde_json"]);
    report(&violations, "Serialization in the headless core");
}

#[test]
fn test_no_global_session_state() {
    for dir in [CORE_SRC, TUI_SRC] {
        let violations = find_violations(dir, &["static mut", "thread_local!", "lazy_static!"]);
        report(&violations, "Global mutable state");
    }
}

#[test]
fn test_production_code_propagates_errors() {
    for dir in [CORE_SRC, TUI_SRC] {
        let violations = find_violations(dir, &[".unwrap()", ".expect("]);
        report(&violations, "unwrap/expect in production code");
    }
}

#[test]
fn test_core_manifest_has_no_terminal_crates() {
    let manifest = fs::read_to_string(workspace_root().join("engine/core/Cargo.toml"))
        .expect("core manifest readable");

    let forbidden: Vec<&str> = manifest
        .lines()
        .map(str::trim)
        .filter(|line| {
            ["ratatui", "crossterm", "tokio"]
                .iter()
                .any(|name| line.starts_with(name))
        })
        .collect();

    assert!(
        forbidden.is_empty(),
        "core manifest pulls in terminal/runtime crates: {forbidden:?}"
    );
}
