//! Turns a boundary source into a [`ZoneCollection`].
//!
//! Loading reads the whole document, detects its format, parses it into a
//! [`GeoCollection`] and keeps the polygon and multipolygon features as zones, indexed in
//! document order and named from their properties.

mod error;
mod format;

pub use error::*;
pub use format::*;

use crate::{Config, DEFAULT_NAME_PROPERTIES, Zone, ZoneCollection};
use anyhow::Context;
use zonemap_core::{Blob, DataLocation, io::open_reader};
use zonemap_geometry::GeoCollection;

#[derive(Clone, Debug, PartialEq)]
pub struct LoadOptions {
	/// Overrides format detection.
	pub format: Option<BoundaryFormat>,
	/// Candidate property keys for zone names, checked in order.
	pub name_properties: Vec<String>,
	pub bbox_prefilter: bool,
}

impl Default for LoadOptions {
	fn default() -> Self {
		Self {
			format: None,
			name_properties: DEFAULT_NAME_PROPERTIES.iter().map(ToString::to_string).collect(),
			bbox_prefilter: true,
		}
	}
}

impl From<&Config> for LoadOptions {
	fn from(config: &Config) -> Self {
		Self {
			format: config.format,
			name_properties: config.name_properties.clone(),
			bbox_prefilter: config.bbox_prefilter,
		}
	}
}

/// Reads and parses a boundary source.
///
/// Loading the same document twice yields equal collections.
pub async fn load_zones(location: &DataLocation, options: &LoadOptions) -> Result<ZoneCollection, LoadError> {
	let source_name = location.to_string();
	log::debug!("loading zones from {source_name}");

	let blob = read_source(location).await.map_err(|cause| LoadError::Fetch {
		source_name: source_name.clone(),
		cause,
	})?;

	let zones = parse_zones(location, &blob, options)?;
	log::debug!("loaded {} zones from {source_name}", zones.len());
	Ok(zones)
}

async fn read_source(location: &DataLocation) -> anyhow::Result<Blob> {
	let reader = open_reader(location)?;
	reader
		.read_all()
		.await
		.with_context(|| format!("reading {}", reader.get_name()))
}

/// Parses an already fetched document. `location` is used for format detection and
/// error messages only.
pub fn parse_zones(location: &DataLocation, blob: &Blob, options: &LoadOptions) -> Result<ZoneCollection, LoadError> {
	let source_name = location.to_string();
	let parse_error = |cause| LoadError::Parse {
		source_name: source_name.clone(),
		cause,
	};

	let format = match options.format {
		Some(format) => format,
		None => BoundaryFormat::detect(location, blob).map_err(parse_error)?,
	};
	let text = blob.as_str().map_err(parse_error)?;
	let collection = format.parse(text).map_err(parse_error)?;

	let feature_count = collection.len();
	let zones = zones_from_collection(collection, options);
	if zones.is_empty() {
		return Err(LoadError::NoAreaFeatures {
			source_name,
			feature_count,
		});
	}
	Ok(zones)
}

/// Keeps the area features of `collection` as zones. Other features are dropped.
pub fn zones_from_collection(collection: GeoCollection, options: &LoadOptions) -> ZoneCollection {
	let mut zones = Vec::new();
	for feature in collection.features {
		if !feature.geometry.is_area() {
			log::debug!("dropping {} feature", feature.geometry.type_name());
			continue;
		}
		zones.push(Zone::from_feature(zones.len(), feature, options.name_properties.as_slice()));
	}
	ZoneCollection::new(zones).with_bbox_prefilter(options.bbox_prefilter)
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::{NamedTempFile, prelude::*};
	use pretty_assertions::assert_eq;
	use zonemap_geometry::{Coordinates, GeoFeature, Geometry};

	const KML: &str = r#"<kml><Document>
		<Placemark><name>A</name><Polygon><outerBoundaryIs><LinearRing>
			<coordinates>0,0 4,0 4,4 0,4 0,0</coordinates>
		</LinearRing></outerBoundaryIs></Polygon></Placemark>
		<Placemark><name>Depot</name><Point><coordinates>1,1</coordinates></Point></Placemark>
		<Placemark><Polygon><outerBoundaryIs><LinearRing>
			<coordinates>10,0 14,0 14,4 10,4 10,0</coordinates>
		</LinearRing></outerBoundaryIs></Polygon></Placemark>
	</Document></kml>"#;

	fn blob_location(content: &str) -> DataLocation {
		DataLocation::from(Blob::from(content))
	}

	fn names(zones: &ZoneCollection) -> Vec<(usize, String)> {
		zones.iter().map(|z| (z.index(), z.name().to_string())).collect()
	}

	#[tokio::test]
	async fn loads_area_features_only() -> anyhow::Result<()> {
		let zones = load_zones(&blob_location(KML), &LoadOptions::default()).await?;
		assert_eq!(names(&zones), vec![(0, String::from("A")), (1, String::from("Zone #2"))]);
		assert!(zones.find_containing_zone(&Coordinates::new(12.0, 2.0)).is_some());
		Ok(())
	}

	#[tokio::test]
	async fn loading_twice_is_deterministic() -> anyhow::Result<()> {
		let file = NamedTempFile::new("zones.kml")?;
		file.write_str(KML)?;
		let location = DataLocation::from(file.path());

		let first = load_zones(&location, &LoadOptions::default()).await?;
		let second = load_zones(&location, &LoadOptions::default()).await?;
		assert_eq!(names(&first), names(&second));
		assert_eq!(first, second);
		Ok(())
	}

	#[tokio::test]
	async fn missing_file_is_a_fetch_error() {
		let location = DataLocation::from(std::path::Path::new("/nonexistent/zones.kml"));
		let error = load_zones(&location, &LoadOptions::default()).await.unwrap_err();
		assert!(matches!(error, LoadError::Fetch { .. }), "{error:?}");
		assert_eq!(error.source_name(), "/nonexistent/zones.kml");
	}

	#[tokio::test]
	async fn malformed_document_is_a_parse_error() {
		let error = load_zones(&blob_location("<kml><Document></kml>"), &LoadOptions::default())
			.await
			.unwrap_err();
		assert!(matches!(error, LoadError::Parse { .. }), "{error:?}");
		assert!(error.to_string().starts_with("cannot parse boundary source <blob len=21>: "));
	}

	#[tokio::test]
	async fn wrong_forced_format_is_a_parse_error() {
		let options = LoadOptions {
			format: Some(BoundaryFormat::GeoJson),
			..LoadOptions::default()
		};
		let error = load_zones(&blob_location(KML), &options).await.unwrap_err();
		assert!(matches!(error, LoadError::Parse { .. }), "{error:?}");
	}

	#[tokio::test]
	async fn no_area_features() {
		let location = blob_location(r#"{"type":"FeatureCollection","features":[]}"#);
		let error = load_zones(&location, &LoadOptions::default()).await.unwrap_err();
		assert!(matches!(error, LoadError::NoAreaFeatures { feature_count: 0, .. }), "{error:?}");

		let location = blob_location(r#"{"type":"Point","coordinates":[1,2]}"#);
		let error = load_zones(&location, &LoadOptions::default()).await.unwrap_err();
		assert_eq!(
			error.to_string(),
			"boundary source <blob len=36> has no polygon features (1 features in total)"
		);
	}

	#[test]
	fn indices_skip_dropped_features() {
		let square = |x: f64| Geometry::new_polygon(vec![vec![[x, 0.0], [x + 1.0, 0.0], [x + 1.0, 1.0], [x, 0.0]]]);
		let collection = GeoCollection::from(vec![
			GeoFeature::new(Geometry::new_point([0.0, 0.0])),
			GeoFeature::new(square(0.0)),
			GeoFeature::new(Geometry::Unsupported(String::from("GeometryCollection"))),
			GeoFeature::new(square(5.0)),
		]);
		let zones = zones_from_collection(collection, &LoadOptions::default());
		assert_eq!(
			names(&zones),
			vec![(0, String::from("Zone #1")), (1, String::from("Zone #2"))]
		);
	}

	#[test]
	fn options_from_config() -> anyhow::Result<()> {
		let config = Config::from_string("format: kml\nname_properties: [bezirk]\nbbox_prefilter: false\n")?;
		let options = LoadOptions::from(&config);
		assert_eq!(options.format, Some(BoundaryFormat::Kml));
		assert_eq!(options.name_properties, vec![String::from("bezirk")]);
		assert!(!options.bbox_prefilter);
		Ok(())
	}
}
