//! Fetch command - download modules and report where they landed

use std::path::PathBuf;

use anyhow::Context as _;
use log::debug;

use lichen::adapters::GoTool;
use lichen::config::Config;
use lichen::core::Context;
use lichen::core::models::ModuleReference;
use lichen::core::services::Fetcher;
use lichen::output::{FetchResult, OutputMode};

/// Overrides for the fetch command
#[derive(Debug, Default)]
pub struct FetchOptions {
    /// Config file to load instead of the default
    pub config: Option<PathBuf>,
    /// Go executable overriding the config
    pub go: Option<String>,
    /// Timeout in seconds overriding the config
    pub timeout: Option<u64>,
}

/// Fetch the given module references
pub fn fetch(refs: &[String], options: &FetchOptions, mode: OutputMode) -> anyhow::Result<()> {
    let refs = parse_refs(refs)?;

    let mut config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(go) = &options.go {
        config.go.binary.clone_from(go);
    }
    if options.timeout.is_some() {
        config.go.timeout_secs = options.timeout;
    }

    let ctx = config
        .go
        .timeout()
        .map_or_else(Context::background, |timeout| Context::background().with_timeout(timeout));
    debug!("Fetching {} module reference(s) with {}", refs.len(), config.go.binary);

    let fetcher = Fetcher::new(GoTool::from_config(&config.go));
    let modules = fetcher.fetch(&ctx, &refs)?;

    FetchResult::from_modules(&modules).render(mode);
    Ok(())
}

fn parse_refs(refs: &[String]) -> anyhow::Result<Vec<ModuleReference>> {
    refs.iter()
        .map(|r| {
            r.parse::<ModuleReference>()
                .with_context(|| format!("Invalid module reference '{r}'"))
        })
        .collect()
}
