use crate::{BoundaryFormat, DEFAULT_NAME_PROPERTIES};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Loader settings, read from a YAML file.
///
/// ```yaml
/// format: kml
/// name_properties: [zone_name, name]
/// bbox_prefilter: true
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
	/// Boundary format; detected from extension and content if missing.
	pub format: Option<BoundaryFormat>,

	/// Property keys checked in order for a zone's name.
	pub name_properties: Vec<String>,

	/// Check zone bounding boxes before testing rings.
	pub bbox_prefilter: bool,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			format: None,
			name_properties: DEFAULT_NAME_PROPERTIES.iter().map(ToString::to_string).collect(),
			bbox_prefilter: true,
		}
	}
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {}", path.display()))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {}", path.display()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn parse_example_config() -> Result<()> {
		let config = Config::from_path(Path::new("../testdata/config.yml"))?;
		assert_eq!(
			config,
			Config {
				format: Some(BoundaryFormat::Kml),
				name_properties: vec![String::from("zone_name"), String::from("name")],
				bbox_prefilter: false,
			}
		);
		Ok(())
	}

	#[test]
	fn empty_config_uses_defaults() -> Result<()> {
		assert_eq!(Config::from_string("{}")?, Config::default());
		assert_eq!(
			Config::default().name_properties,
			vec!["name", "Name", "zone_name", "title", "Title"]
		);
		Ok(())
	}

	#[test]
	fn format_names() -> Result<()> {
		assert_eq!(Config::from_string("format: geojson")?.format, Some(BoundaryFormat::GeoJson));
		assert_eq!(Config::from_string("format: json")?.format, Some(BoundaryFormat::GeoJson));
		assert!(Config::from_string("format: shapefile").is_err());
		Ok(())
	}

	#[test]
	fn unknown_fields_are_rejected() {
		let error = Config::from_string("source: zones.kml").unwrap_err().to_string();
		assert!(error.contains("unknown field `source`"), "{error}");
	}

	#[test]
	fn missing_file() {
		let error = Config::from_path(Path::new("../testdata/missing.yml")).unwrap_err();
		assert_eq!(error.to_string(), "opening config file ../testdata/missing.yml");
	}
}
