//! Process launchers: how the validator gets started with its output redirected to disk.
//!
//! The runner only needs "run the validator on this fixture, sending stdout and stderr to these two files, and tell
//! me how it ended". [`ProcessLauncher`] is that seam. Two implementations ship:
//!
//! - [`ShellLauncher`] renders one command line with shell redirections and hands it to the host shell. The shell
//!   creates the capture files, so a launch that fails early may leave them missing.
//! - [`DirectLauncher`] creates the capture files itself and spawns the validator without a shell.
//!
//! [`from_fn`] wraps a closure as a launcher, which keeps test doubles short.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use saltrun_core::{CaptureStream, ValidatorExit};

/// Program and leading arguments of a validator invocation.
///
/// The fixture name is always appended as the final argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorCommand {
    program: String,
    args: Vec<String>,
}

impl ValidatorCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// One validator invocation.
///
/// `input`, `stdout` and `stderr` are relative to `work_dir`, which is also the child's working directory.
#[derive(Debug, Clone, Copy)]
pub struct LaunchRequest<'a> {
    pub work_dir: &'a Path,
    pub input: &'a str,
    pub stdout: &'a str,
    pub stderr: &'a str,
}

impl LaunchRequest<'_> {
    pub fn sink_name(&self, stream: CaptureStream) -> &str {
        match stream {
            CaptureStream::Stdout => self.stdout,
            CaptureStream::Stderr => self.stderr,
        }
    }

    /// Location of a capture file as seen from the runner's own working directory.
    pub fn sink_path(&self, stream: CaptureStream) -> PathBuf {
        self.work_dir.join(self.sink_name(stream))
    }
}

/// Start the validator for one fixture and block until it exits.
///
/// An `Err` means the process could not be started (or its sinks could not be prepared). Implementations must not
/// treat a non-zero exit as an error; that is reported through [`ValidatorExit`].
pub trait ProcessLauncher {
    fn launch(&self, request: &LaunchRequest<'_>) -> io::Result<ValidatorExit>;
}

impl<L: ProcessLauncher + ?Sized> ProcessLauncher for &L {
    fn launch(&self, request: &LaunchRequest<'_>) -> io::Result<ValidatorExit> {
        (**self).launch(request)
    }
}

impl<L: ProcessLauncher + ?Sized> ProcessLauncher for Box<L> {
    fn launch(&self, request: &LaunchRequest<'_>) -> io::Result<ValidatorExit> {
        (**self).launch(request)
    }
}

/// Launcher backed by a closure. Built with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnLauncher<F>(F);

/// Wrap a closure as a [`ProcessLauncher`].
pub fn from_fn<F>(f: F) -> FnLauncher<F>
where
    F: Fn(&LaunchRequest<'_>) -> io::Result<ValidatorExit>,
{
    FnLauncher(f)
}

impl<F> ProcessLauncher for FnLauncher<F>
where
    F: Fn(&LaunchRequest<'_>) -> io::Result<ValidatorExit>,
{
    fn launch(&self, request: &LaunchRequest<'_>) -> io::Result<ValidatorExit> {
        (self.0)(request)
    }
}

// ============================================================================
// Shell launcher
// ============================================================================

/// Runs `<program> <args...> <input> > <stdout> 2> <stderr>` through the host shell.
#[derive(Debug, Clone)]
pub struct ShellLauncher {
    command: ValidatorCommand,
}

impl ShellLauncher {
    pub fn new(command: ValidatorCommand) -> Self {
        Self { command }
    }

    /// The exact command line handed to the shell. Every word is quoted.
    pub fn command_line(&self, request: &LaunchRequest<'_>) -> String {
        let words: Vec<String> = std::iter::once(self.command.program())
            .chain(self.command.args().iter().map(String::as_str))
            .chain(std::iter::once(request.input))
            .map(quote_word)
            .collect();

        format!(
            "{} > {} 2> {}",
            words.join(" "),
            quote_word(request.stdout),
            quote_word(request.stderr)
        )
    }
}

impl ProcessLauncher for ShellLauncher {
    fn launch(&self, request: &LaunchRequest<'_>) -> io::Result<ValidatorExit> {
        let line = self.command_line(request);
        tracing::debug!(command = %line, "launching validator through shell");

        let status = shell_command(&line).current_dir(request.work_dir).status()?;
        Ok(ValidatorExit::from(status.code()))
    }
}

#[cfg(not(windows))]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(line);
    command
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    use std::os::windows::process::CommandExt;

    let mut command = Command::new("cmd");
    command.raw_arg(cmd_arguments(line));
    command
}

/// Raw argument string for `cmd.exe`. With `/S`, cmd strips exactly the outer pair of quotes and runs the rest
/// verbatim, so quoted words inside `line` survive.
#[cfg_attr(not(windows), allow(dead_code))]
fn cmd_arguments(line: &str) -> String {
    format!("/S /C \"{line}\"")
}

/// Quote one word for the host shell, leaving plain words untouched.
pub fn quote_word(word: &str) -> String {
    if cfg!(windows) {
        quote_cmd_word(word)
    } else {
        quote_posix_word(word)
    }
}

fn quote_posix_word(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"_-./:=,+@%".contains(&b));
    if plain {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', r"'\''"))
}

fn quote_cmd_word(word: &str) -> String {
    if !word.is_empty() && !word.contains([' ', '\t', '"', '&', '|', '<', '>', '^']) {
        return word.to_string();
    }
    format!("\"{}\"", word.replace('"', "\"\""))
}

// ============================================================================
// Direct launcher
// ============================================================================

/// Spawns the validator directly, with stdout/stderr attached to freshly created capture files.
#[derive(Debug, Clone)]
pub struct DirectLauncher {
    command: ValidatorCommand,
}

impl DirectLauncher {
    pub fn new(command: ValidatorCommand) -> Self {
        Self { command }
    }
}

impl ProcessLauncher for DirectLauncher {
    fn launch(&self, request: &LaunchRequest<'_>) -> io::Result<ValidatorExit> {
        let stdout = File::create(request.sink_path(CaptureStream::Stdout))?;
        let stderr = File::create(request.sink_path(CaptureStream::Stderr))?;

        tracing::debug!(
            program = self.command.program(),
            args = ?self.command.args(),
            input = request.input,
            "launching validator"
        );

        let status = Command::new(self.command.program())
            .args(self.command.args())
            .arg(request.input)
            .current_dir(request.work_dir)
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .status()?;
        Ok(ValidatorExit::from(status.code()))
    }
}
