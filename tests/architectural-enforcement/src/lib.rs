//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - The core stays headless (no terminal, async runtime or file/network I/O)
//! - Session state lives in the navigator, never in globals
//! - Production code propagates errors instead of unwrapping
//!
//! The helpers below walk the workspace sources and yield the lines that
//! count as production code.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root, two levels above this package
#[must_use]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// All `.rs` files under `dir` (relative to the workspace root), sorted
#[must_use]
pub fn rust_sources(dir: &str) -> Vec<PathBuf> {
    let root = workspace_root().join(dir);
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(walkdir::DirEntry::into_path)
        .collect();
    files.sort();
    files
}

/// Production lines of a source file as `(line number, code)`.
///
/// Comments are stripped and scanning stops at the first `#[cfg(test)]`,
/// which by convention opens the trailing test module.
#[must_use]
pub fn production_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .map(|(idx, line)| (idx + 1, line.split("//").next().unwrap_or(line)))
        .filter(|(_, code)| !code.trim().is_empty())
        .collect()
}

/// Every production line under `dir` containing one of `patterns`
#[must_use]
pub fn find_violations(dir: &str, patterns: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();

    for path in rust_sources(dir) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (line_number, code) in production_lines(&content) {
            for pattern in patterns {
                if code.contains(pattern) {
                    violations.push(format!(
                        "{}:{} - '{}': {}",
                        path.display(),
                        line_number,
                        pattern,
                        code.trim()
                    ));
                }
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_skip_comments_and_tests() {
        let source = "//! docs\nuse a; // trailing\n\nfn f() {}\n#[cfg(test)]\nmod tests {}\n";
        let lines = production_lines(source);
        assert_eq!(lines, vec![(2, "use a; "), (4, "fn f() {}")]);
    }

    #[test]
    fn test_workspace_root_holds_manifest() {
        assert!(workspace_root().join("Cargo.toml").exists());
    }
}
