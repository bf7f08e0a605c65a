//! Fetch service - orchestrates module download and verification
//!
//! One call to [`Fetcher::fetch`] runs the module tool at most once, in a
//! fresh temporary directory that is removed before the call returns. Local
//! references bypass the tool entirely.

use std::collections::HashSet;

use log::{debug, info, warn};
use tempfile::TempDir;

use super::decode::{decode_stream, sanitize};
use super::verify::verify_fetched;
use crate::core::context::Context;
use crate::core::error::FetchError;
use crate::core::models::{Module, ModuleReference};
use crate::core::ports::ModuleTool;

/// Fixed arguments preceding the module references
pub const DOWNLOAD_ARGS: [&str; 3] = ["mod", "download", "-json"];

/// Prefix of the per-call working directory
const TEMP_DIR_PREFIX: &str = "lichen";

/// Resolves module references into fetched modules
#[derive(Debug, Clone)]
pub struct Fetcher<T> {
    tool: T,
}

impl<T: ModuleTool> Fetcher<T> {
    /// Create a fetcher driving `tool`
    pub const fn new(tool: T) -> Self {
        Self { tool }
    }

    /// The underlying tool
    pub const fn tool(&self) -> &T {
        &self.tool
    }

    /// Fetch every reference in `refs`
    ///
    /// Returns one module per distinct reference, remote modules first in
    /// tool output order, then local modules in request order. Fails as a
    /// whole if any reference could not be resolved.
    pub fn fetch(
        &self,
        ctx: &Context,
        refs: &[ModuleReference],
    ) -> Result<Vec<Module>, FetchError> {
        if refs.is_empty() {
            return Ok(Vec::new());
        }

        let requested = distinct(refs);
        let args = download_args(&requested);

        let mut modules = if args.len() > DOWNLOAD_ARGS.len() {
            self.download(ctx, &args)?
        } else {
            debug!("All {} module(s) are local; skipping download", requested.len());
            Vec::new()
        };

        let before = modules.len();
        modules.extend(requested.iter().filter(|r| r.is_local()).cloned().map(Module::unresolved));
        debug!("Added {} local module(s)", modules.len() - before);

        verify_fetched(&modules, &requested)?;

        info!("Fetched {} module(s)", modules.len());
        Ok(modules)
    }

    fn download(&self, ctx: &Context, args: &[String]) -> Result<Vec<Module>, FetchError> {
        let program = self.tool.locate()?;
        debug!("Using module tool at {}", program.display());

        let workdir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir()
            .map_err(FetchError::TempDir)?;

        debug!("Running {} {} in {}", program.display(), args.join(" "), workdir.path().display());
        let result = self.tool.run(&program, args, workdir.path(), ctx);
        remove_workdir(workdir);

        decode_modules(&result?)
    }
}

/// Build the tool arguments for `refs`
///
/// Local references are left out; duplicates are passed once, in first-seen
/// order.
#[must_use]
pub fn download_args(refs: &[ModuleReference]) -> Vec<String> {
    DOWNLOAD_ARGS
        .iter()
        .map(ToString::to_string)
        .chain(distinct(refs).iter().filter(|r| !r.is_local()).map(ToString::to_string))
        .collect()
}

/// Trim and decode tool output into modules
///
/// Repeated records for the same reference are collapsed to the first.
pub fn decode_modules(output: &[u8]) -> Result<Vec<Module>, FetchError> {
    let input = sanitize(output);
    let mut modules: Vec<Module> = decode_stream(input).map_err(|source| FetchError::Decode {
        source,
        input: String::from_utf8_lossy(input).into_owned(),
    })?;
    debug!("Decoded {} module record(s)", modules.len());

    let mut seen = HashSet::new();
    modules.retain(|m| seen.insert(m.reference.clone()));
    Ok(modules)
}

fn distinct(refs: &[ModuleReference]) -> Vec<ModuleReference> {
    let mut seen = HashSet::new();
    refs.iter().filter(|r| seen.insert(*r)).cloned().collect()
}

fn remove_workdir(workdir: TempDir) {
    let path = workdir.path().to_path_buf();
    if let Err(err) = workdir.close() {
        warn!("Failed to remove temp directory {}: {err}", path.display());
    }
}
