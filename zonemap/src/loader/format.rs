//! Boundary document formats and their detection.
//!
//! A format is taken from explicit configuration if present, otherwise from the file
//! extension of the source, otherwise from the first non-whitespace byte of the content.
//!
//! # Examples
//!
//! ```
//! use zonemap::BoundaryFormat;
//!
//! assert_eq!(BoundaryFormat::from_extension("KML"), Some(BoundaryFormat::Kml));
//! assert_eq!(BoundaryFormat::from_extension("json"), Some(BoundaryFormat::GeoJson));
//! assert_eq!(BoundaryFormat::from_extension("csv"), None);
//! ```

use anyhow::{Result, bail};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt::Display;
use zonemap_core::{Blob, DataLocation};
use zonemap_geometry::GeoCollection;

#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryFormat {
	Kml,
	#[cfg_attr(feature = "cli", value(name = "geojson"))]
	#[serde(alias = "json")]
	GeoJson,
}

impl BoundaryFormat {
	pub fn as_str(&self) -> &str {
		match self {
			BoundaryFormat::Kml => "kml",
			BoundaryFormat::GeoJson => "geojson",
		}
	}

	pub fn from_extension(extension: &str) -> Option<BoundaryFormat> {
		match extension.to_ascii_lowercase().as_str() {
			"kml" => Some(BoundaryFormat::Kml),
			"geojson" | "json" => Some(BoundaryFormat::GeoJson),
			_ => None,
		}
	}

	/// Guesses the format from the first non-whitespace byte: `{` for GeoJSON, `<` for KML.
	pub fn sniff(blob: &Blob) -> Option<BoundaryFormat> {
		match blob.first_non_whitespace()? {
			b'{' => Some(BoundaryFormat::GeoJson),
			b'<' => Some(BoundaryFormat::Kml),
			_ => None,
		}
	}

	pub fn detect(location: &DataLocation, blob: &Blob) -> Result<BoundaryFormat> {
		if let Some(format) = location.extension().ok().and_then(|e| BoundaryFormat::from_extension(&e)) {
			return Ok(format);
		}
		if let Some(format) = BoundaryFormat::sniff(blob) {
			log::debug!("detected {format} content in {location}");
			return Ok(format);
		}
		bail!("cannot determine the boundary format of {location}, expected KML or GeoJSON")
	}

	pub fn parse(&self, text: &str) -> Result<GeoCollection> {
		match self {
			BoundaryFormat::Kml => GeoCollection::from_kml_str(text),
			BoundaryFormat::GeoJson => GeoCollection::from_json_str(text),
		}
	}
}

impl Display for BoundaryFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
