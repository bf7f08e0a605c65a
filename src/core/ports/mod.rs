//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the fetch orchestration and the
//! processes it drives. Implementations live in the `adapters` module; tests
//! substitute doubles that emit canned output.

mod tool;

pub use tool::ModuleTool;
