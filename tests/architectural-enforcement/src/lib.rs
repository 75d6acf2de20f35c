//! Architectural Enforcement Integration Tests
//!
//! Source scans that keep the workspace honest:
//! - The simulation core stays free of terminal crates
//! - No panicking shortcuts in production code
//! - Only the run loop may block on sleep
//!
//! Helpers here read source text; the checks live under `tests/`.

use std::fs;
use std::path::{Path, PathBuf};

/// A production source line that matched a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File the line came from, relative to the workspace root
    pub file: PathBuf,
    /// 1-based line number
    pub line: usize,
    /// The offending code, comments stripped
    pub code: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.file.display(), self.line, self.code.trim())
    }
}

/// Workspace root, two levels above this package
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Production lines of every `.rs` file under `dir` (relative to the root)
///
/// Lines from the first `#[cfg(test)]` onward are skipped, and so is
/// anything after `//` on a line.
pub fn production_lines(dir: &str) -> Vec<(PathBuf, usize, String)> {
    let root = workspace_root();
    let mut out = Vec::new();

    for entry in walkdir::WalkDir::new(root.join(dir))
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(path) else {
            continue;
        };
        let relative = path.strip_prefix(&root).unwrap_or(path).to_path_buf();

        for (idx, line) in content.lines().enumerate() {
            if line.trim_start().starts_with("#[cfg(test)]") {
                break;
            }
            let code = line.split("//").next().unwrap_or(line);
            if !code.trim().is_empty() {
                out.push((relative.clone(), idx + 1, code.to_string()));
            }
        }
    }
    out
}

/// Lines under `dir` for which `matches` holds
pub fn find_violations<F>(dir: &str, matches: F) -> Vec<Violation>
where
    F: Fn(&str) -> bool,
{
    production_lines(dir)
        .into_iter()
        .filter(|(_, _, code)| matches(code))
        .map(|(file, line, code)| Violation { file, line, code })
        .collect()
}

/// Panic with a readable report if `violations` is non-empty
pub fn assert_clean(rule: &str, violations: &[Violation]) {
    if violations.is_empty() {
        return;
    }
    eprintln!("\n❌ {rule}\n");
    for violation in violations {
        eprintln!("  ❌ {violation}");
    }
    panic!("\nFound {} violation(s): {rule}", violations.len());
}
