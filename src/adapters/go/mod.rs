//! Go toolchain adapter
//!
//! Implements `ModuleTool` by running the `go` command.
//!
//! - [`process`] - Merged-output subprocess execution with cancellation

pub mod process;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::GoConfig;
use crate::core::ports::ModuleTool;
use crate::core::{Context, LocateError, RunFailure};

pub use process::run_combined;

/// Default name of the Go executable
pub const DEFAULT_BINARY: &str = "go";

/// `go` command implementation of the module tool
#[derive(Debug, Clone)]
pub struct GoTool {
    /// Executable name or path, resolved against `PATH`
    binary: String,
    /// Extra environment for the child process
    env: BTreeMap<String, String>,
}

impl GoTool {
    /// Create an adapter for the given executable name or path
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            env: BTreeMap::new(),
        }
    }

    /// Create an adapter from configuration
    #[must_use]
    pub fn from_config(config: &GoConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            env: config.env.clone(),
        }
    }

    /// Set an environment variable for the child process
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// The configured executable name or path
    #[must_use]
    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Default for GoTool {
    fn default() -> Self {
        Self::new(DEFAULT_BINARY)
    }
}

impl ModuleTool for GoTool {
    fn locate(&self) -> Result<PathBuf, LocateError> {
        which::which(&self.binary).map_err(|err| LocateError::new(&self.binary, err))
    }

    fn run(
        &self,
        program: &Path,
        args: &[String],
        dir: &Path,
        ctx: &Context,
    ) -> Result<Vec<u8>, RunFailure> {
        let mut command = Command::new(program);
        command.args(args).current_dir(dir).envs(&self.env);
        run_combined(command, ctx)
    }
}
