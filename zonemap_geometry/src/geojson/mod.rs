//! Reading and writing GeoJSON (RFC 7946) feature collections.

mod parse;
mod write;

pub use parse::*;
pub use write::*;
