//! Domain models for lichen
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ModuleReference`] - A module path and version, or a local directory
//! - [`Module`] - A reference plus the metadata the module tool resolved

mod module;
mod reference;

pub use module::Module;
pub use reference::{ModuleReference, ReferenceError};
