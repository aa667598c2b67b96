//! Architecture guard tests for the deckgen workspace.
//!
//! These tests scan source files to enforce design-level consistency:
//! - Error handling style (thiserror vs hand-written Display)
//! - No `Result<_, String>` in deckgen-core
//! - Shared state behind parking_lot locks
//! - The compiler stays a pure function
//!
//! Run: `cargo test --package deckgen-core --test architecture_guards -- --nocapture`

use std::fs;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Walk `dir` recursively, collecting .rs files that pass `filter`.
fn collect_rs_files(dir: &Path, filter: &dyn Fn(&Path) -> bool) -> Vec<PathBuf> {
    let mut result = Vec::new();
    if !dir.exists() {
        return result;
    }
    for entry in walkdir(dir) {
        if entry.extension().is_some_and(|e| e == "rs") && filter(&entry) {
            result.push(entry);
        }
    }
    result
}

/// Simple recursive directory walk (no external dep).
fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(walkdir(&path));
            } else {
                files.push(path);
            }
        }
    }
    files
}

/// Return the workspace root (two levels up from deckgen-core/tests/).
fn workspace_root() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("cannot determine workspace root")
        .to_path_buf()
}

fn is_test_file(path: &Path) -> bool {
    let s = path.to_string_lossy();
    s.contains("/tests/") || s.ends_with("tests.rs") || s.ends_with("_test.rs")
}

/// Strip the workspace root prefix for display.
fn rel(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

fn is_comment(line: &str) -> bool {
    line.starts_with("//") || line.starts_with('*')
}

/// Report every non-comment line of `files` matching `violates`.
fn scan(
    files: &[PathBuf],
    root: &Path,
    violates: &dyn Fn(&str) -> bool,
) -> Vec<(String, usize, String)> {
    let mut violations = Vec::new();
    for file in files {
        let Ok(content) = fs::read_to_string(file) else {
            continue;
        };
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if !is_comment(trimmed) && violates(trimmed) {
                violations.push((rel(file, root), i + 1, trimmed.to_string()));
            }
        }
    }
    violations
}

fn fail_on(violations: &[(String, usize, String)], header: &str) {
    if violations.is_empty() {
        return;
    }
    let mut msg = format!("\n{}\n\n", header);
    for (file, line, text) in violations {
        msg.push_str(&format!("  {}:{} -> {}\n", file, line, text));
    }
    panic!("{msg}");
}

// ---------------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------------

#[test]
fn test_error_types_use_thiserror() {
    let root = workspace_root();
    let files = collect_rs_files(&root.join("crates"), &|p| !is_test_file(p));

    let violations = scan(&files, &root, &|line| {
        line.starts_with("impl") && line.contains("Display for") && line.contains("Error")
    });

    fail_on(
        &violations,
        "Hand-written Display for Error types detected.\nUse #[derive(thiserror::Error)] instead.",
    );
}

#[test]
fn test_no_result_string_in_core() {
    let root = workspace_root();
    let files = collect_rs_files(&root.join("crates/deckgen-core/src"), &|p| !is_test_file(p));

    let violations = scan(&files, &root, &|line| {
        line.find("Result<").is_some_and(|pos| {
            let after = &line[pos..];
            after.contains(", String>") || after.contains(",String>")
        })
    });

    fail_on(
        &violations,
        "Result<_, String> found in deckgen-core.\nUse DeckResult / DeckError instead.",
    );
}

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

#[test]
fn test_shared_state_uses_parking_lot() {
    let root = workspace_root();
    let files = collect_rs_files(&root.join("crates/deckgen-core/src"), &|p| !is_test_file(p));

    let violations = scan(&files, &root, &|line| {
        line.contains("std::sync::Mutex") || line.contains("std::sync::RwLock")
    });

    fail_on(
        &violations,
        "std::sync locks found in deckgen-core.\nUse parking_lot::Mutex instead.",
    );
}

// ---------------------------------------------------------------------------
// Compiler purity
// ---------------------------------------------------------------------------

#[test]
fn test_compiler_has_no_side_effects() {
    let root = workspace_root();
    let compiler = root.join("crates/deckgen-core/src/compiler");
    let files = collect_rs_files(&compiler, &|p| !is_test_file(p));
    assert!(!files.is_empty(), "compiler module not found");

    let violations = scan(&files, &root, &|line| {
        ["std::fs", "tracing", "reqwest", "tokio", "Mutex", "println!"]
            .iter()
            .any(|needle| line.contains(needle))
    });

    fail_on(
        &violations,
        "The compiler must stay a pure Deck -> String function.",
    );
}
