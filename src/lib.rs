//! lichen - Fetch and verify Go module dependencies ahead of license auditing
//!
//! This library resolves module references into modules that are present on
//! disk. Resolution is delegated to `go mod download -json`; lichen runs it in
//! an isolated directory, decodes its output, adds local modules, and checks
//! that every requested module was resolved.
//!
//! ```no_run
//! use lichen::adapters::GoTool;
//! use lichen::core::Context;
//! use lichen::core::models::ModuleReference;
//! use lichen::core::services::Fetcher;
//!
//! let fetcher = Fetcher::new(GoTool::default());
//! let refs = vec![ModuleReference::new("github.com/pkg/errors", "v0.9.1")];
//! let modules = fetcher.fetch(&Context::background(), &refs).unwrap();
//! println!("{:?}", modules[0].dir);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
