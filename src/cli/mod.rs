//! CLI module for the saltrun fixture runner
//!
//! ## Usage
//!
//! - `saltrun` - run the validator over the default fixture set in the current directory
//! - `saltrun -C fixtures a.xml b.xml` - run selected fixtures from another directory
//! - `saltrun --list` - print the fixture list and exit
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use crate::config::DEFAULT_MAIN_CLASS;
use crate::version::SALTRUN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Render a diagnostic through miette's report handler.
    pub fn diagnostic<D>(diagnostic: D) -> Self
    where
        D: miette::Diagnostic + Send + Sync + 'static,
    {
        Self::failure(format!("{:?}", miette::Report::new(diagnostic)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// How the validator process is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LauncherKind {
    /// Through the host shell with `>` / `2>` redirections
    #[default]
    Shell,
    /// Spawned directly with capture files attached
    Direct,
}

/// How records are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `{file: ..., out: [...], err: [...], exit: ...}` per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Run the SALT TBX validator over XML fixtures and print what it says
#[derive(Parser, Debug)]
#[command(name = "saltrun")]
#[command(version = SALTRUN_VERSION)]
#[command(about = "Run the SALT TBX validator over XML fixtures", long_about = None)]
pub struct Cli {
    /// Fixtures to run, relative to --dir (default: the built-in fixture set)
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Directory holding the fixtures; the validator runs there
    #[arg(short = 'C', long = "dir", value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Java runtime [default: $SALTRUN_JAVA or "java"]
    #[arg(long, value_name = "PROGRAM")]
    pub java: Option<String>,

    /// Validator classpath [default: $CLASSPATH]
    #[arg(long, value_name = "CLASSPATH")]
    pub classpath: Option<String>,

    /// Validator entry point
    #[arg(long = "main-class", value_name = "CLASS", default_value = DEFAULT_MAIN_CLASS)]
    pub main_class: String,

    /// Extra argument passed to the validator before the fixture name (repeatable)
    #[arg(short = 'a', long = "validator-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub validator_args: Vec<String>,

    /// How to start the validator
    #[arg(long, value_enum, default_value_t = LauncherKind::Shell)]
    pub launcher: LauncherKind,

    /// Output format for records
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 if any validator run did not exit with code 0
    #[arg(long = "check-status")]
    pub check_status: bool,

    /// Print the fixture list and exit
    #[arg(long)]
    pub list: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the parsed command line and return the exit code.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let fixtures = commands::fixture_list(&cli.files)?;
    if cli.list {
        return commands::list_fixtures(&fixtures);
    }
    commands::run_fixtures(&cli, fixtures)
}

// ============================================================================
// Tests
// ============================================================================
