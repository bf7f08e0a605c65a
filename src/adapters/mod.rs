//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `go/` - Runs `go mod download` as a subprocess

pub mod go;

pub use go::GoTool;
