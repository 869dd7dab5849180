//! Runner and validator configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults, the environment
//! (`SALTRUN_JAVA`, `CLASSPATH`), and command-line flags applied through the `with_*` builders.

use std::env;
use std::path::{Path, PathBuf};

use saltrun_core::FixtureList;
use thiserror::Error;

use crate::launcher::ValidatorCommand;

/// Entry point of the TBX validator.
pub const DEFAULT_MAIN_CLASS: &str = "org.ttt.salt.Main";
/// Java runtime used when nothing else is configured.
pub const DEFAULT_JAVA: &str = "java";
/// Environment variable overriding the Java runtime.
pub const JAVA_ENV: &str = "SALTRUN_JAVA";
/// Environment variable holding the validator classpath.
pub const CLASSPATH_ENV: &str = "CLASSPATH";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("java runtime must not be empty")]
    EmptyJava,

    #[error("validator main class must not be empty")]
    EmptyMainClass,
}

/// How to start the external validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Program that runs the validator (normally a Java runtime)
    pub java: String,
    /// Passed as `-classpath <value>` when set
    pub classpath: Option<String>,
    pub main_class: String,
    /// Extra arguments placed between the main class and the fixture name
    pub extra_args: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            java: DEFAULT_JAVA.to_string(),
            classpath: None,
            main_class: DEFAULT_MAIN_CLASS.to_string(),
            extra_args: Vec::new(),
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with `SALTRUN_JAVA` and `CLASSPATH` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ValidatorConfig::from_env`] with an injectable variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut config = Self::default();
        if let Some(java) = non_empty(JAVA_ENV) {
            config.java = java;
        }
        config.classpath = non_empty(CLASSPATH_ENV);
        config
    }

    pub fn with_java(mut self, java: impl Into<String>) -> Self {
        self.java = java.into();
        self
    }

    pub fn with_classpath(mut self, classpath: impl Into<String>) -> Self {
        self.classpath = Some(classpath.into());
        self
    }

    pub fn with_main_class(mut self, main_class: impl Into<String>) -> Self {
        self.main_class = main_class.into();
        self
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Build the validator invocation: `<java> [-classpath <cp>] <main-class> [extra args...]`.
    ///
    /// The fixture name is appended by the launcher.
    pub fn command(&self) -> Result<ValidatorCommand, ConfigError> {
        if self.java.is_empty() {
            return Err(ConfigError::EmptyJava);
        }
        if self.main_class.is_empty() {
            return Err(ConfigError::EmptyMainClass);
        }

        let mut args = Vec::with_capacity(self.extra_args.len() + 3);
        if let Some(classpath) = &self.classpath {
            args.push("-classpath".to_string());
            args.push(classpath.clone());
        }
        args.push(self.main_class.clone());
        args.extend(self.extra_args.iter().cloned());

        Ok(ValidatorCommand::new(self.java.clone(), args))
    }
}

/// What to run and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub fixtures: FixtureList,
    /// Directory the fixtures live in; the validator runs here and capture files are created here
    pub work_dir: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            fixtures: FixtureList::default(),
            work_dir: PathBuf::from("."),
        }
    }
}

impl RunnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fixtures(mut self, fixtures: FixtureList) -> Self {
        self.fixtures = fixtures;
        self
    }

    pub fn with_work_dir(mut self, work_dir: impl AsRef<Path>) -> Self {
        self.work_dir = work_dir.as_ref().to_path_buf();
        self
    }
}
