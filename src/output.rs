//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::Module;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a fetch operation
#[derive(Debug, Serialize)]
pub struct FetchResult {
    /// Fetched modules, in fetch order
    pub modules: Vec<ModuleInfo>,
}

/// Information about a fetched module
#[derive(Debug, Serialize)]
pub struct ModuleInfo {
    /// Module path or local directory
    pub path: String,
    /// Resolved version (empty for local modules)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    /// Directory holding the module source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Module checksum
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<String>,
    /// Whether this is a local module
    pub local: bool,
}

impl From<&Module> for ModuleInfo {
    fn from(module: &Module) -> Self {
        Self {
            path: module.reference.path.clone(),
            version: module.reference.version.clone(),
            dir: module.dir.as_ref().map(|d| d.display().to_string()),
            sum: module.sum.clone(),
            local: module.is_local(),
        }
    }
}

impl FetchResult {
    /// Build a result from fetched modules
    #[must_use]
    pub fn from_modules(modules: &[Module]) -> Self {
        Self {
            modules: modules.iter().map(ModuleInfo::from).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => println!("{}", self.to_json()),
        }
    }

    /// Human-readable rendering, one line per module
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.modules.is_empty() {
            return "No modules requested.\n".to_string();
        }

        let mut out = format!("Fetched {} module(s):\n", self.modules.len());
        for m in &self.modules {
            let name = if m.version.is_empty() {
                m.path.clone()
            } else {
                format!("{}@{}", m.path, m.version)
            };
            let location = if m.local {
                "(local)".to_string()
            } else {
                m.dir.clone().unwrap_or_else(|| "-".to_string())
            };
            out.push_str(&format!("  {name} -> {location}\n"));
        }
        out
    }

    /// Pretty-printed JSON rendering
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
