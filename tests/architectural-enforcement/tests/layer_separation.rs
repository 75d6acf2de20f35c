//! Integration Test: Layer Separation
//!
//! **Policy**: `life/core` is headless. Terminal crates belong in `tui` only.

use architectural_enforcement::{assert_clean, find_violations, production_lines};

const CORE: &str = "life/core/src";

#[test]
fn test_core_has_no_terminal_dependencies() {
    let violations = find_violations(CORE, |code| {
        code.contains("ratatui") || code.contains("crossterm")
    });
    assert_clean("Simulation core must not use terminal crates", &violations);
}

#[test]
fn test_core_manifest_has_no_terminal_dependencies() {
    let manifest = std::fs::read_to_string(
        architectural_enforcement::workspace_root().join("life/core/Cargo.toml"),
    )
    .unwrap();
    assert!(!manifest.contains("ratatui"));
    assert!(!manifest.contains("crossterm"));
}

#[test]
fn test_scanned_directories_exist() {
    assert!(!production_lines(CORE).is_empty());
    assert!(!production_lines("tui/src").is_empty());
}
