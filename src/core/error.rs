//! Error types for module fetching
//!
//! Every failure of [`crate::core::services::Fetcher::fetch`] is a
//! [`FetchError`]. Execution failures keep the captured tool output, decode
//! failures keep the sanitized input, and completeness failures keep every
//! unresolved reference in a single [`MultiError`].

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

use super::context::ContextError;
use super::models::ModuleReference;

/// Failure of a fetch, tagged by the step that failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// The module tool could not be found
    #[error(transparent)]
    ToolNotFound(#[from] LocateError),

    /// The isolated working directory could not be created
    #[error("failed to create temp directory: {0}")]
    TempDir(#[source] std::io::Error),

    /// The tool failed to run, exited non-zero, or was interrupted
    #[error("failed to fetch: {0}")]
    Exec(#[from] RunFailure),

    /// The tool output was not a sequence of JSON objects
    #[error("failed to decode JSON: {source}. Input: {input}")]
    Decode {
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
        /// Sanitized output that failed to decode
        input: String,
    },

    /// One or more requested modules were not resolved
    #[error("failed to fetch all modules: {0}")]
    Incomplete(#[from] MultiError<ResolveError>),
}

impl FetchError {
    /// Whether the fetch stopped because its context was cancelled or expired
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Exec(RunFailure { cause: ExecError::Context(_), .. }))
    }

    /// The unresolved-module errors, when this is a completeness failure
    #[must_use]
    pub fn unresolved(&self) -> Option<&MultiError<ResolveError>> {
        match self {
            Self::Incomplete(errors) => Some(errors),
            _ => None,
        }
    }
}

/// The module tool executable is not on the search path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{tool} not found: {reason}")]
pub struct LocateError {
    /// Name of the executable that was looked up
    pub tool: String,
    /// Why the lookup failed
    pub reason: String,
}

impl LocateError {
    /// Create a lookup error for `tool`
    pub fn new(tool: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            tool: tool.into(),
            reason: reason.to_string(),
        }
    }
}

/// Why a tool invocation did not succeed
#[derive(Debug, Error)]
pub enum ExecError {
    /// The process could not be started
    #[error("failed to start: {0}")]
    Spawn(#[source] std::io::Error),

    /// Waiting on the process or reading its output failed
    #[error("failed to collect output: {0}")]
    Io(#[source] std::io::Error),

    /// The process exited with a non-zero status
    #[error("exit status {0}")]
    Exit(i32),

    /// The process was terminated by a signal
    #[error("terminated by signal")]
    Signaled,

    /// The context was cancelled or its deadline passed; the process was killed
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// A failed tool invocation together with everything it printed
#[derive(Debug, Error)]
#[error("{cause} (output: {})", String::from_utf8_lossy(.output))]
pub struct RunFailure {
    /// What went wrong
    #[source]
    pub cause: ExecError,
    /// Combined stdout and stderr captured before the failure
    pub output: Vec<u8>,
}

impl RunFailure {
    /// Create a failure record
    #[must_use]
    pub const fn new(cause: ExecError, output: Vec<u8>) -> Self {
        Self { cause, output }
    }

    /// The captured output as text
    #[must_use]
    pub fn output_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.output)
    }
}

/// A requested module that is missing from the fetched set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The tool produced no record for the reference
    #[error("module {0} could not be resolved")]
    Unresolved(ModuleReference),

    /// The tool produced a record carrying an error message
    #[error("module {reference} could not be resolved: {message}")]
    Failed {
        /// The failing reference
        reference: ModuleReference,
        /// Message reported by the tool
        message: String,
    },
}

impl ResolveError {
    /// The reference this error is about
    #[must_use]
    pub const fn reference(&self) -> &ModuleReference {
        match self {
            Self::Unresolved(reference) | Self::Failed { reference, .. } => reference,
        }
    }
}

/// Several independent failures reported as one error
///
/// Causes keep their insertion order. The rendered form is a count header
/// followed by one bullet per cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiError<E> {
    errors: Vec<E>,
}

impl<E> MultiError<E> {
    /// An empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add a cause
    pub fn push(&mut self, error: E) {
        self.errors.push(error);
    }

    /// Number of causes
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no cause was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The causes in insertion order
    #[must_use]
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Iterate over the causes
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.errors.iter()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl<E> Default for MultiError<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Vec<E>> for MultiError<E> {
    fn from(errors: Vec<E>) -> Self {
        Self { errors }
    }
}

impl<E> FromIterator<E> for MultiError<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for MultiError<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl<E> IntoIterator for MultiError<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a MultiError<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl<E: fmt::Display> fmt::Display for MultiError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.len() {
            1 => write!(f, "1 error occurred:")?,
            n => write!(f, "{n} errors occurred:")?,
        }
        for error in &self.errors {
            write!(f, "\n\t* {error}")?;
        }
        Ok(())
    }
}

impl<E: std::error::Error> std::error::Error for MultiError<E> {}
