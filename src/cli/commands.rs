//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Write};

use saltrun_core::FixtureList;

use super::{Cli, CliError, CliResult, ExitCode, LauncherKind, OutputFormat};
use crate::config::{RunnerConfig, ValidatorConfig};
use crate::launcher::{DirectLauncher, ProcessLauncher, ShellLauncher};
use crate::report::{JsonReporter, Reporter, TextReporter};
use crate::runner::FixtureRunner;

/// Fixtures named on the command line, or the default set when none were given.
pub fn fixture_list(files: &[String]) -> CliResult<FixtureList> {
    if files.is_empty() {
        return Ok(FixtureList::default());
    }
    FixtureList::new(files.iter().cloned()).map_err(|e| CliError::failure(format!("Error: {}", e)))
}

/// Print one fixture name per line.
pub fn list_fixtures(fixtures: &FixtureList) -> CliResult<ExitCode> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", fixtures).map_err(|e| CliError::failure(format!("Error writing fixture list: {}", e)))?;
    Ok(ExitCode::SUCCESS)
}

/// Resolve validator settings: defaults, then environment, then flags.
pub fn validator_config(cli: &Cli) -> ValidatorConfig {
    let mut config = ValidatorConfig::from_env().with_main_class(cli.main_class.as_str());
    if let Some(java) = &cli.java {
        config = config.with_java(java.as_str());
    }
    if let Some(classpath) = &cli.classpath {
        config = config.with_classpath(classpath.as_str());
    }
    for arg in &cli.validator_args {
        config = config.with_arg(arg.as_str());
    }
    config
}

/// Build the launcher selected on the command line.
pub fn launcher_for(kind: LauncherKind, validator: &ValidatorConfig) -> CliResult<Box<dyn ProcessLauncher>> {
    let command = validator
        .command()
        .map_err(|e| CliError::failure(format!("Error: {}", e)))?;
    Ok(match kind {
        LauncherKind::Shell => Box::new(ShellLauncher::new(command)),
        LauncherKind::Direct => Box::new(DirectLauncher::new(command)),
    })
}

/// Run every fixture and print records as they are produced.
pub fn run_fixtures(cli: &Cli, fixtures: FixtureList) -> CliResult<ExitCode> {
    let validator = validator_config(cli);
    let launcher = launcher_for(cli.launcher, &validator)?;
    let config = RunnerConfig::new().with_fixtures(fixtures).with_work_dir(&cli.dir);
    let runner = FixtureRunner::new(config, launcher);

    let stdout = io::stdout().lock();
    let mut reporter: Box<dyn Reporter> = match cli.format {
        OutputFormat::Text => Box::new(TextReporter::new(stdout)),
        OutputFormat::Json => Box::new(JsonReporter::new(stdout)),
    };

    let summary = runner.run(reporter.as_mut()).map_err(CliError::diagnostic)?;

    if cli.check_status && summary.nonzero_exits > 0 {
        return Err(CliError::failure(format!(
            "{} of {} validator run(s) did not exit cleanly",
            summary.nonzero_exits, summary.total
        )));
    }
    Ok(ExitCode::SUCCESS)
}
