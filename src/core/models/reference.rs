//! Module reference parsing and formatting
//!
//! A reference names a Go module dependency. It is either a remote
//! `path@version` pair or a local filesystem path (a `replace` target such as
//! `./internal/tools` or `/src/vendor/foo`).
//!
//! # Examples
//!
//! ```
//! use lichen::core::models::ModuleReference;
//!
//! let r: ModuleReference = "github.com/pkg/errors@v0.9.1".parse().unwrap();
//! assert_eq!(r.path, "github.com/pkg/errors");
//! assert_eq!(r.version, "v0.9.1");
//! assert!(!r.is_local());
//!
//! let local: ModuleReference = "./tools".parse().unwrap();
//! assert!(local.is_local());
//! assert_eq!(local.to_string(), "./tools");
//! ```

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a module reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// Reference string was empty
    #[error("empty module reference")]
    Empty,

    /// Reference had a version but no path (e.g. `@v1.0.0`)
    #[error("module reference is missing a path")]
    MissingPath,
}

/// Identifies a module by path and version, or by local filesystem path
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleReference {
    /// Module path (e.g. `github.com/pkg/errors`) or local directory
    #[serde(rename = "Path", default, deserialize_with = "null_as_empty")]
    pub path: String,

    /// Module version (e.g. `v0.9.1`); empty for local references
    #[serde(
        rename = "Version",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub version: String,
}

/// Missing and `null` fields both read as the empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ModuleReference {
    /// Create a reference from a path and version
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
        }
    }

    /// Create a reference to a local directory
    pub fn local(path: impl Into<String>) -> Self {
        Self::new(path, String::new())
    }

    /// Whether this reference points at the filesystem rather than a remote source
    ///
    /// Local references are never downloaded; they are resolved by identity.
    /// Only `.`, `..`, paths under `./` or `../`, and absolute paths count;
    /// `.hidden/mod` is an ordinary module path.
    #[must_use]
    pub fn is_local(&self) -> bool {
        let path = self.path.as_str();
        matches!(path, "." | "..")
            || path.starts_with("./")
            || path.starts_with("../")
            || Path::new(path).is_absolute()
    }
}

impl std::fmt::Display for ModuleReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}@{}", self.path, self.version)
        }
    }
}

impl std::str::FromStr for ModuleReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ReferenceError::Empty);
        }

        let reference = match s.rsplit_once('@') {
            Some((path, version)) => Self::new(path, version),
            None => Self::local(s),
        };

        if reference.path.is_empty() {
            return Err(ReferenceError::MissingPath);
        }
        Ok(reference)
    }
}
