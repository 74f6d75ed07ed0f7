use super::GeoFeature;
use anyhow::Result;

/// A GeoJSON-shaped feature collection, the interchange structure produced by every reader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	pub fn from_kml_str(kml: &str) -> Result<Self> {
		crate::kml::parse_kml(kml)
	}

	pub fn from_json_str(json: &str) -> Result<Self> {
		crate::geojson::parse_geojson(json)
	}

	pub fn to_json(&self, precision: Option<u8>) -> serde_json::Value {
		serde_json::json!({
			"type": "FeatureCollection",
			"features": self.features.iter().map(|f| f.to_json(precision)).collect::<Vec<_>>(),
		})
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<I: IntoIterator<Item = GeoFeature>>(iter: I) -> Self {
		Self::from(iter.into_iter().collect::<Vec<_>>())
	}
}
