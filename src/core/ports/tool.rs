//! Module tool port
//!
//! Defines the interface for running the external module-download tool.

use std::path::{Path, PathBuf};

use crate::core::context::Context;
use crate::core::error::{LocateError, RunFailure};

/// External module-resolution tool (`go` in production)
///
/// The fetcher never resolves modules itself. It asks an implementation of
/// this trait to locate the executable and run it once, and only interprets
/// the bytes that come back.
pub trait ModuleTool: Send + Sync {
    /// Resolve the tool executable on the search path
    fn locate(&self) -> Result<PathBuf, LocateError>;

    /// Run `program` with `args` in `dir`, returning combined stdout and stderr
    ///
    /// Implementations must stop the process once `ctx` is done and report
    /// [`crate::core::error::ExecError::Context`]. A non-zero exit is an error;
    /// the captured output travels with it.
    fn run(
        &self,
        program: &Path,
        args: &[String],
        dir: &Path,
        ctx: &Context,
    ) -> Result<Vec<u8>, RunFailure>;
}
