//! Integration Test: Panic-Free Production Code
//!
//! **Policy**: Production code propagates errors with `?`.
//! `.unwrap()` and `.expect(` are for tests only.
//!
//! **Policy**: Only the run loop in `driver.rs` may call `thread::sleep`.
//! Everything else waits through a `RunControl`.

use architectural_enforcement::{assert_clean, find_violations};

const DIRS: [&str; 2] = ["life/core/src", "tui/src"];

#[test]
fn test_no_unwrap_or_expect_in_production_code() {
    let violations: Vec<_> = DIRS
        .iter()
        .flat_map(|dir| {
            find_violations(dir, |code| {
                code.contains(".unwrap()") || code.contains(".expect(")
            })
        })
        .collect();

    assert_clean("unwrap()/expect() in production code", &violations);
}

#[test]
fn test_sleep_only_in_run_loop() {
    let violations: Vec<_> = DIRS
        .iter()
        .flat_map(|dir| find_violations(dir, |code| code.contains("sleep(")))
        .filter(|v| !v.file.ends_with("life/core/src/driver.rs"))
        .collect();

    assert_clean("thread::sleep outside the run loop", &violations);
}
