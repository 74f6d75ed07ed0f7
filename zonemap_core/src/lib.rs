//! Shared building blocks for the zonemap crates: byte blobs, data locations and
//! asynchronous readers for boundary sources.

pub mod io;
mod types;

pub use types::*;
