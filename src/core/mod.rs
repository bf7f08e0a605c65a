//! Core fetch logic for lichen
//!
//! Everything except process execution lives here. The external tool is
//! reached only through the [`ports::ModuleTool`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ModuleReference`, `Module`)
//! - `services/` - Fetch orchestration, output decoding, verification
//! - `ports/` - Trait definitions for external dependencies
//! - `context` - Cooperative cancellation
//! - `error` - Typed failures, including the aggregated `MultiError`

pub mod context;
pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use context::{Context, ContextError};
pub use error::{ExecError, FetchError, LocateError, MultiError, ResolveError, RunFailure};
