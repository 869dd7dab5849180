//! Shared helpers for integration tests: stub validators run through `sh`.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Stub that prints `OK` for every fixture and nothing on stderr.
pub const OK_STUB: &str = "echo OK";

/// Stub that mimics the validator's verdicts: `Invalid*` fixtures fail with a message on stderr.
pub const VERDICT_STUB: &str = r#"case "$1" in
  Invalid*) echo "$1: not valid TBX" >&2; exit 1 ;;
  *) echo "$1: valid" ;;
esac"#;

/// Write a stub validator script into `dir`.
///
/// The script is run as `sh <script> <fixture>`, so `$1` is the fixture name. It is never executed directly.
pub fn write_stub(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("stub-validator.sh");
    fs::write(&path, format!("{body}\n")).unwrap();
    path
}

/// Files left in `dir` with a capture suffix.
pub fn leftover_captures(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().to_str().map(str::to_owned))
        .filter(|n| n.ends_with(".out") || n.ends_with(".err"))
        .collect();
    names.sort();
    names
}
