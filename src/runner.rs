//! The fixture runner and its driver loop.
//!
//! For each fixture the runner launches the validator with stdout and stderr redirected to `<fixture>.out` and
//! `<fixture>.err`, waits for it, reads both capture files into lines, deletes them, and returns a
//! [`FixtureRecord`]. Everything is sequential and blocking: one validator process at a time, no timeout.
//!
//! A launch failure is only logged. The runner still goes on to read the captures, so a validator that never wrote
//! its output surfaces as [`RunError::ReadCapture`] with a `NotFound` source. The first error aborts the batch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use miette::Diagnostic;
use saltrun_core::{CaptureStream, FixtureRecord, ValidatorExit, capture_file_name, split_lines};
use thiserror::Error;

use crate::config::RunnerConfig;
use crate::launcher::{LaunchRequest, ProcessLauncher};
use crate::report::{Reporter, RunSummary};

#[derive(Debug, Error, Diagnostic)]
pub enum RunError {
    #[error("could not read captured {stream} of '{fixture}' from {}", .path.display())]
    #[diagnostic(
        code(saltrun::read_capture),
        help("the validator probably failed before writing its output; check the java runtime, classpath and fixture directory")
    )]
    ReadCapture {
        fixture: String,
        stream: CaptureStream,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not remove capture file {}", .path.display())]
    #[diagnostic(code(saltrun::remove_capture))]
    RemoveCapture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write report output")]
    #[diagnostic(code(saltrun::report))]
    Report(#[from] io::Error),
}

impl RunError {
    /// True when a capture file did not exist when the runner went to read it.
    pub fn is_missing_capture(&self) -> bool {
        matches!(self, RunError::ReadCapture { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Runs the validator over a fixture list through a [`ProcessLauncher`].
pub struct FixtureRunner<L> {
    config: RunnerConfig,
    launcher: L,
}

impl<L: ProcessLauncher> FixtureRunner<L> {
    pub fn new(config: RunnerConfig, launcher: L) -> Self {
        Self { config, launcher }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run the validator on one fixture and collect its captured output.
    ///
    /// Both capture files are gone when this returns, whether it succeeds or not.
    #[tracing::instrument(skip(self), fields(work_dir = %self.config.work_dir.display()))]
    pub fn process(&self, fixture: &str) -> Result<FixtureRecord, RunError> {
        let stdout_name = capture_file_name(fixture, CaptureStream::Stdout);
        let stderr_name = capture_file_name(fixture, CaptureStream::Stderr);
        let request = LaunchRequest {
            work_dir: &self.config.work_dir,
            input: fixture,
            stdout: &stdout_name,
            stderr: &stderr_name,
        };

        let exit = match self.launcher.launch(&request) {
            Ok(exit) => {
                tracing::debug!(%exit, "validator finished");
                exit
            }
            Err(e) => {
                tracing::warn!(error = %e, "validator could not be launched");
                ValidatorExit::NotLaunched
            }
        };

        let stdout_path = request.sink_path(CaptureStream::Stdout);
        let stderr_path = request.sink_path(CaptureStream::Stderr);

        let out = read_capture(fixture, CaptureStream::Stdout, &stdout_path);
        let err = read_capture(fixture, CaptureStream::Stderr, &stderr_path);
        let removed_out = remove_capture(&stdout_path);
        let removed_err = remove_capture(&stderr_path);

        let out = out?;
        let err = err?;
        removed_out?;
        removed_err?;

        Ok(FixtureRecord::new(fixture, out, err, exit))
    }

    /// Lazily process every configured fixture, in order, one record per step.
    pub fn records(&self) -> Records<'_, L> {
        Records {
            runner: self,
            next: 0,
        }
    }

    /// Drive the whole fixture list, handing each record to `reporter` as soon as it is produced.
    ///
    /// Stops at the first failing fixture.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<RunSummary, RunError> {
        let start = Instant::now();
        let mut summary = RunSummary::default();

        reporter.on_run_start(self.config.fixtures.len())?;
        for record in self.records() {
            let record = record?;
            summary.total += 1;
            if !record.exit.is_success() {
                summary.nonzero_exits += 1;
            }
            reporter.on_record(&record)?;
        }
        summary.duration = start.elapsed();
        reporter.on_run_complete(&summary)?;

        tracing::info!(
            total = summary.total,
            nonzero_exits = summary.nonzero_exits,
            elapsed_ms = elapsed_ms(summary.duration),
            "fixture run complete"
        );
        Ok(summary)
    }
}

/// Iterator returned by [`FixtureRunner::records`].
pub struct Records<'a, L> {
    runner: &'a FixtureRunner<L>,
    next: usize,
}

impl<L: ProcessLauncher> Iterator for Records<'_, L> {
    type Item = Result<FixtureRecord, RunError>;

    fn next(&mut self) -> Option<Self::Item> {
        let fixture = self.runner.config.fixtures.as_slice().get(self.next)?;
        self.next += 1;
        Some(self.runner.process(fixture))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.runner.config.fixtures.len() - self.next;
        (remaining, Some(remaining))
    }
}

fn read_capture(fixture: &str, stream: CaptureStream, path: &Path) -> Result<Vec<String>, RunError> {
    let bytes = fs::read(path).map_err(|source| RunError::ReadCapture {
        fixture: fixture.to_string(),
        stream,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&String::from_utf8_lossy(&bytes)))
}

/// Whole milliseconds for logging, saturating at `u64::MAX`.
fn elapsed_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Delete a capture file. A file that was never created is not an error.
fn remove_capture(path: &Path) -> Result<(), RunError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(RunError::RemoveCapture {
            path: path.to_path_buf(),
            source,
        }),
    }
}
