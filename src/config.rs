//! Global configuration management
//!
//! Config is stored at `~/.config/lichen/config.toml` (XDG standard), or
//! wherever `LICHEN_CONFIG` points.
//!
//! ```toml
//! [go]
//! binary = "go"
//! timeout_secs = 600
//!
//! [go.env]
//! GOFLAGS = "-mod=mod"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;

use crate::adapters::go::DEFAULT_BINARY;
use crate::paths;

/// Global lichen configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Go toolchain settings
    #[serde(default)]
    pub go: GoConfig,
}

/// Settings for running the `go` command
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoConfig {
    /// Executable name or path
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Give up on a fetch after this many seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Extra environment variables for the child process
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

fn default_binary() -> String {
    DEFAULT_BINARY.to_string()
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            timeout_secs: None,
            env: BTreeMap::new(),
        }
    }
}

impl GoConfig {
    /// The fetch timeout, if one is configured
    ///
    /// A value of zero means no timeout.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|&s| s > 0).map(Duration::from_secs)
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location, or defaults if it does not exist
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
