//! Reading KML boundary documents.
//!
//! The XML is first read into a small element tree ([`tree`]), then every `Placemark` is
//! turned into a [`GeoFeature`](crate::GeoFeature) ([`parse`]). The result has the same
//! shape as a GeoJSON feature collection, so the rest of the pipeline does not care which
//! format a boundary file was written in.

mod parse;
mod tree;

pub use parse::*;
