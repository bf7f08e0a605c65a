//! Resolved module model
//!
//! A module is a reference plus the metadata the module tool reported after
//! downloading it. Field names follow the JSON emitted by
//! `go mod download -json`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ModuleReference;

/// A module reference enriched with resolved metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// The reference this module was resolved from
    #[serde(flatten)]
    pub reference: ModuleReference,

    /// Directory holding the extracted module source
    #[serde(rename = "Dir", default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Checksum of the module zip (`h1:` hash)
    #[serde(rename = "Sum", default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<String>,

    /// Checksum of the module's go.mod file
    #[serde(rename = "GoModSum", default, skip_serializing_if = "Option::is_none")]
    pub go_mod_sum: Option<String>,

    /// Path to the cached `.info` file
    #[serde(rename = "Info", default, skip_serializing_if = "Option::is_none")]
    pub info: Option<PathBuf>,

    /// Path to the cached `.mod` file
    #[serde(rename = "GoMod", default, skip_serializing_if = "Option::is_none")]
    pub go_mod: Option<PathBuf>,

    /// Path to the cached `.zip` file
    #[serde(rename = "Zip", default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<PathBuf>,

    /// Failure the tool reported for this module, if any
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Module {
    /// Create a module with no resolved metadata
    ///
    /// Used for local modules, which are already addressed by path.
    #[must_use]
    pub fn unresolved(reference: ModuleReference) -> Self {
        Self {
            reference,
            ..Self::default()
        }
    }

    /// Whether this module is a local (filesystem) module
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.reference.is_local()
    }

    /// The tool-reported failure message, ignoring blank values
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.trim().is_empty())
    }
}
