//! Per-fixture result records.

use std::fmt;

use serde::Serialize;

/// How the validator process ended.
///
/// The runner records this but never branches on it; callers decide whether a non-zero exit matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorExit {
    /// Exited normally with this code.
    Code(i32),
    /// Terminated without an exit code (killed by a signal).
    Signal,
    /// The process could not be started at all.
    NotLaunched,
}

impl ValidatorExit {
    pub fn is_success(self) -> bool {
        matches!(self, ValidatorExit::Code(0))
    }
}

impl From<Option<i32>> for ValidatorExit {
    fn from(code: Option<i32>) -> Self {
        code.map_or(ValidatorExit::Signal, ValidatorExit::Code)
    }
}

impl fmt::Display for ValidatorExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorExit::Code(code) => write!(f, "code {code}"),
            ValidatorExit::Signal => f.write_str("signal"),
            ValidatorExit::NotLaunched => f.write_str("not launched"),
        }
    }
}

/// Outcome of running the validator against one fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureRecord {
    /// Fixture name exactly as it appeared in the fixture list.
    pub file: String,
    /// Captured standard output, one entry per line with terminators kept.
    pub out: Vec<String>,
    /// Captured standard error, one entry per line with terminators kept.
    pub err: Vec<String>,
    pub exit: ValidatorExit,
}

impl FixtureRecord {
    pub fn new(file: impl Into<String>, out: Vec<String>, err: Vec<String>, exit: ValidatorExit) -> Self {
        Self {
            file: file.into(),
            out,
            err,
            exit,
        }
    }
}

/// Mapping-like rendering: `{file: "a.xml", out: ["OK\n"], err: [], exit: code 0}`.
///
/// Strings are escaped so every record fits on one line.
impl fmt::Display for FixtureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{file: {:?}, out: {:?}, err: {:?}, exit: {}}}",
            self.file, self.out, self.err, self.exit
        )
    }
}
