#![forbid(unsafe_code)]
//! saltrun: a fixture runner for the SALT TBX validator
//!
//! The validator (`org.ttt.salt.Main`) is an external Java program. This crate runs it over a list of XML fixtures,
//! one at a time, with stdout and stderr redirected to `<fixture>.out` / `<fixture>.err`, reads those captures back
//! as lines, deletes them, and reports one record per fixture in fixture order.
//!
//! ## Layout
//!
//! - `config` - validator and runner settings (defaults, environment, builders)
//! - `launcher` - the `ProcessLauncher` seam with shell and direct implementations
//! - `runner` - per-fixture processing and the driver loop
//! - `report` - reporters for text and JSON output
//! - `cli` - the `saltrun` command line
//!
//! Fixture names, capture naming and the record type come from `saltrun_core`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod launcher;
pub mod report;
pub mod runner;
pub mod version;

pub use config::{RunnerConfig, ValidatorConfig};
pub use launcher::{DirectLauncher, LaunchRequest, ProcessLauncher, ShellLauncher, ValidatorCommand};
pub use report::{JsonReporter, Reporter, RunSummary, TextReporter};
pub use runner::{FixtureRunner, RunError};
pub use saltrun_core::{FixtureList, FixtureRecord, ValidatorExit};
