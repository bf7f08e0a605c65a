//! Fetch services
//!
//! - [`fetcher`] - Orchestrates one tool invocation per fetch
//! - [`decode`] - Trims and decodes the tool's JSON object stream
//! - [`verify`] - Checks that every requested module was resolved

pub mod decode;
pub mod fetcher;
pub mod verify;

pub use decode::{decode_stream, sanitize};
pub use fetcher::{DOWNLOAD_ARGS, Fetcher, decode_modules, download_args};
pub use verify::verify_fetched;
