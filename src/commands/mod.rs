//! Command implementations

mod fetch;

pub use fetch::{FetchOptions, fetch};
